//! Pattern library for regex-based extraction

use crate::redaction::Category;
use anyhow::{Context, Result};
use fancy_regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this group
    pub patterns: Vec<String>,
    /// Category label
    pub category: String,
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Name of the group the pattern came from
    pub name: String,
    /// Compiled regex
    pub regex: Regex,
    /// Category the matches belong to
    pub category: Category,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    // BTreeMap keeps group order stable between runs.
    patterns: BTreeMap<String, PatternDefinition>,
}

/// Pattern registry
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
    patterns_by_category: HashMap<Category, Vec<CompiledPattern>>,
}

impl PatternRegistry {
    /// Create a new pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        let mut patterns = Vec::new();
        let mut patterns_by_category: HashMap<Category, Vec<CompiledPattern>> = HashMap::new();

        for (name, def) in library.patterns {
            let category = Category::parse(&def.category).with_context(|| {
                format!("Invalid category in pattern '{}': {}", name, def.category)
            })?;

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str)
                    .with_context(|| format!("Invalid regex in pattern '{name}': {pattern_str}"))?;

                let compiled = CompiledPattern {
                    name: name.clone(),
                    regex,
                    category,
                };

                patterns.push(compiled.clone());
                patterns_by_category
                    .entry(category)
                    .or_default()
                    .push(compiled);
            }
        }

        tracing::debug!(patterns = patterns.len(), "Pattern library compiled");

        Ok(Self {
            patterns,
            patterns_by_category,
        })
    }

    /// Create a registry from the embedded default library
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../patterns/censor_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Get all patterns
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Get patterns for a specific category
    pub fn patterns_for_category(&self, category: Category) -> Option<&[CompiledPattern]> {
        self.patterns_by_category
            .get(&category)
            .map(|v| v.as_slice())
    }
}
