//! Redaction categories and their fixed processing order

use crate::domain::{CensorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of sensitive text
///
/// The declaration order is the processing rank: names are masked first,
/// then dates, then addresses, then phones. A region masked by an earlier
/// category can no longer be matched by a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Person names
    Names,
    /// Calendar dates
    Dates,
    /// Places and street addresses
    Addresses,
    /// Telephone numbers
    Phones,
}

impl Category {
    /// Every category in processing order
    pub const ALL: [Category; 4] = [
        Category::Names,
        Category::Dates,
        Category::Addresses,
        Category::Phones,
    ];

    /// Zero-based processing rank
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Lowercase key used in configuration and JSON output
    pub fn key(self) -> &'static str {
        match self {
            Self::Names => "names",
            Self::Dates => "dates",
            Self::Addresses => "addresses",
            Self::Phones => "phones",
        }
    }

    /// Capitalized label used in the statistics report
    pub fn label(self) -> &'static str {
        match self {
            Self::Names => "Names",
            Self::Dates => "Dates",
            Self::Addresses => "Addresses",
            Self::Phones => "Phones",
        }
    }

    /// Parse a category name, accepting singular and common aliases
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "names" | "name" | "person" => Ok(Self::Names),
            "dates" | "date" => Ok(Self::Dates),
            "addresses" | "address" | "location" | "street_address" => Ok(Self::Addresses),
            "phones" | "phone" | "telephone" => Ok(Self::Phones),
            _ => Err(CensorError::Validation(format!("Unknown category: {s}"))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of categories selected for redaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySelection {
    selected: [bool; 4],
}

impl CategorySelection {
    /// Selection with no categories
    pub fn none() -> Self {
        Self::default()
    }

    /// Selection with every category
    pub fn all() -> Self {
        Self {
            selected: [true; 4],
        }
    }

    /// Add a category to the selection
    pub fn with(mut self, category: Category) -> Self {
        self.selected[category.rank()] = true;
        self
    }

    /// Add a category when `enabled` is true
    pub fn with_if(self, category: Category, enabled: bool) -> Self {
        if enabled {
            self.with(category)
        } else {
            self
        }
    }

    /// Check whether a category is selected
    pub fn contains(&self, category: Category) -> bool {
        self.selected[category.rank()]
    }

    /// True when no category is selected
    pub fn is_empty(&self) -> bool {
        !self.selected.iter().any(|s| *s)
    }

    /// Selected categories in processing order
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.contains(*c))
    }
}
