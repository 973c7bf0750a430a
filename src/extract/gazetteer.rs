//! Word-list extractor for person names and place names
//!
//! The gazetteer scans runs of capitalized words on a single line and
//! checks them against a word list. It is a lightweight stand-in for a
//! statistical entity recognizer: good enough for well-formed prose, easy
//! to replace with any other [`Extractor`].

use super::Extractor;
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

/// How the word list is matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GazetteerMode {
    /// A known given name, optionally followed by one more capitalized word
    Person,
    /// A known place name, longest phrase first (up to four words)
    Place,
}

const MAX_PLACE_WORDS: usize = 4;

/// Gazetteer-backed extractor
///
/// Results are deduplicated, keeping first-seen order.
pub struct GazetteerExtractor {
    mode: GazetteerMode,
    entries: HashSet<String>,
    run: Regex,
    word: Regex,
}

impl GazetteerExtractor {
    /// Create an extractor from word-list content
    ///
    /// One entry per line; blank lines and lines starting with `#` are ignored.
    pub fn from_list(content: &str, mode: GazetteerMode) -> Result<Self> {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();

        Ok(Self {
            mode,
            entries,
            run: Regex::new(r"\p{Lu}[\p{L}'\-]*(?:[ \t]+\p{Lu}[\p{L}'\-]*)*")
                .context("Failed to compile capitalized-run pattern")?,
            word: Regex::new(r"\p{Lu}[\p{L}'\-]*").context("Failed to compile word pattern")?,
        })
    }

    /// Create an extractor from a word-list file
    pub fn from_file<P: AsRef<Path>>(path: P, mode: GazetteerMode) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read word list: {}", path.as_ref().display())
        })?;
        Self::from_list(&content, mode)
    }

    /// Person extractor with the embedded given-name list
    pub fn default_people() -> Result<Self> {
        Self::from_list(
            include_str!("../../data/given_names.txt"),
            GazetteerMode::Person,
        )
    }

    /// Place extractor with the embedded place list
    pub fn default_places() -> Result<Self> {
        Self::from_list(include_str!("../../data/places.txt"), GazetteerMode::Place)
    }

    /// Number of word-list entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the word list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn scan_run(&self, run: &str, found: &mut Vec<String>) {
        let words: Vec<(usize, usize)> = self
            .word
            .find_iter(run)
            .map(|m| (m.start(), m.end()))
            .collect();

        let mut i = 0;
        while i < words.len() {
            let consumed = match self.mode {
                GazetteerMode::Person => self.match_person(run, &words[i..]),
                GazetteerMode::Place => self.match_place(run, &words[i..]),
            };

            match consumed {
                Some(n) => {
                    found.push(run[words[i].0..words[i + n - 1].1].to_string());
                    i += n;
                }
                None => i += 1,
            }
        }
    }

    fn match_person(&self, run: &str, words: &[(usize, usize)]) -> Option<usize> {
        let (start, end) = words[0];
        if !self.entries.contains(&run[start..end]) {
            return None;
        }
        Some(if words.len() > 1 { 2 } else { 1 })
    }

    fn match_place(&self, run: &str, words: &[(usize, usize)]) -> Option<usize> {
        let longest = words.len().min(MAX_PLACE_WORDS);
        (1..=longest).rev().find(|&n| {
            let phrase = words[..n]
                .iter()
                .map(|(s, e)| &run[*s..*e])
                .collect::<Vec<_>>()
                .join(" ");
            self.entries.contains(&phrase)
        })
    }
}

impl Extractor for GazetteerExtractor {
    fn name(&self) -> &str {
        match self.mode {
            GazetteerMode::Person => "gazetteer:person",
            GazetteerMode::Place => "gazetteer:place",
        }
    }

    fn extract(&self, text: &str) -> Result<Vec<String>> {
        let mut found = Vec::new();
        for run in self.run.find_iter(text) {
            self.scan_run(run.as_str(), &mut found);
        }

        let mut seen = HashSet::new();
        found.retain(|value| seen.insert(value.clone()));
        Ok(found)
    }
}
