//! Per-document redaction statistics

use super::category::Category;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Half-open character range `[start, end)` in the original document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// First masked character
    pub start: usize,
    /// One past the last masked character
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-width span
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether the offset falls inside the span
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Check whether two spans share at least one character
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// Masked occurrences of one category
///
/// The count is always the number of recorded spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStats {
    spans: Vec<Span>,
}

impl CategoryStats {
    /// Number of occurrences masked
    pub fn count(&self) -> usize {
        self.spans.len()
    }

    /// Spans in discovery order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    fn push(&mut self, span: Span) {
        self.spans.push(span);
    }
}

impl Serialize for CategoryStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CategoryStats", 2)?;
        state.serialize_field("count", &self.count())?;
        state.serialize_field("positions", &self.spans)?;
        state.end()
    }
}

/// Redaction statistics for one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RedactionStats {
    names: CategoryStats,
    dates: CategoryStats,
    addresses: CategoryStats,
    phones: CategoryStats,
}

impl RedactionStats {
    /// Statistics for one category
    pub fn get(&self, category: Category) -> &CategoryStats {
        match category {
            Category::Names => &self.names,
            Category::Dates => &self.dates,
            Category::Addresses => &self.addresses,
            Category::Phones => &self.phones,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut CategoryStats {
        match category {
            Category::Names => &mut self.names,
            Category::Dates => &mut self.dates,
            Category::Addresses => &mut self.addresses,
            Category::Phones => &mut self.phones,
        }
    }

    /// Occurrence count for one category
    pub fn count(&self, category: Category) -> usize {
        self.get(category).count()
    }

    /// Total occurrences masked across all categories
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    /// Categories with their statistics, in processing order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryStats)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Every recorded span tagged with its category, sorted by start offset
    pub fn tagged_spans(&self) -> Vec<(Category, Span)> {
        let mut all: Vec<(Category, Span)> = self
            .iter()
            .flat_map(|(c, stats)| stats.spans().iter().map(move |s| (c, *s)))
            .collect();
        all.sort_by_key(|(_, span)| *span);
        all
    }
}

/// Accumulates spans per category while a document is being masked
#[derive(Debug, Default)]
pub struct StatsRecorder {
    stats: RedactionStats,
}

impl StatsRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one masked occurrence
    pub fn record(&mut self, category: Category, span: Span) {
        self.stats.get_mut(category).push(span);
    }

    /// Statistics recorded so far
    pub fn stats(&self) -> &RedactionStats {
        &self.stats
    }

    /// Consume the recorder and return the statistics
    pub fn finish(self) -> RedactionStats {
        self.stats
    }
}
