//! Regex-based extractor

use super::patterns::{CompiledPattern, PatternRegistry};
use super::Extractor;
use crate::redaction::Category;
use anyhow::{Context, Result};

/// Extracts every pattern match of one category
///
/// Matches from all patterns of the category are merged in text order
/// (earliest start first, longer match first on ties). A value that occurs
/// several times in the text is returned once per occurrence.
pub struct PatternExtractor {
    name: String,
    patterns: Vec<CompiledPattern>,
}

impl PatternExtractor {
    /// Create an extractor for one category of a registry
    pub fn for_category(registry: &PatternRegistry, category: Category) -> Self {
        Self {
            name: format!("patterns:{}", category.key()),
            patterns: registry
                .patterns_for_category(category)
                .map(|p| p.to_vec())
                .unwrap_or_default(),
        }
    }

    /// Create an extractor restricted to named pattern groups
    pub fn for_groups(registry: &PatternRegistry, groups: &[&str]) -> Self {
        Self {
            name: format!("patterns:{}", groups.join("+")),
            patterns: registry
                .all_patterns()
                .iter()
                .filter(|p| groups.contains(&p.name.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Number of compiled patterns
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

impl Extractor for PatternExtractor {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self, text: &str) -> Result<Vec<String>> {
        let mut found: Vec<(usize, usize)> = Vec::new();

        for pattern in &self.patterns {
            for matched in pattern.regex.find_iter(text) {
                let matched = matched
                    .with_context(|| format!("Pattern '{}' failed to match", pattern.name))?;
                if !matched.as_str().trim().is_empty() {
                    found.push((matched.start(), matched.end()));
                }
            }
        }

        // Two patterns reporting the same range describe one occurrence.
        found.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
        found.dedup();

        Ok(found
            .into_iter()
            .map(|(start, end)| text[start..end].to_string())
            .collect())
    }
}
