//! Literal strings per category, as handed from extractors to the engine

use super::category::Category;

/// Ordered literal lists for every category
///
/// Order within a list is preserved and duplicates are kept. An empty list
/// means the category is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralSet {
    lists: [Vec<String>; 4],
}

impl LiteralSet {
    /// Create an empty literal set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a literal set from the four lists in processing order
    pub fn from_lists(
        names: Vec<String>,
        dates: Vec<String>,
        addresses: Vec<String>,
        phones: Vec<String>,
    ) -> Self {
        Self {
            lists: [names, dates, addresses, phones],
        }
    }

    /// Replace the list of one category
    pub fn set(&mut self, category: Category, literals: Vec<String>) {
        self.lists[category.rank()] = literals;
    }

    /// Builder form of [`set`](Self::set)
    pub fn with(mut self, category: Category, literals: &[&str]) -> Self {
        self.set(category, literals.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Append literals to one category
    pub fn extend(&mut self, category: Category, literals: impl IntoIterator<Item = String>) {
        self.lists[category.rank()].extend(literals);
    }

    /// Literals of one category in supplied order
    pub fn get(&self, category: Category) -> &[String] {
        &self.lists[category.rank()]
    }

    /// Total number of literals across categories
    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// True when every list is empty
    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_indexed_by_category() {
        let set = LiteralSet::from_lists(
            vec!["John".to_string()],
            vec![],
            vec!["Paris".to_string(), "Paris".to_string()],
            vec![],
        );
        assert_eq!(set.get(Category::Names), &["John".to_string()]);
        assert_eq!(set.get(Category::Addresses).len(), 2);
        assert!(set.get(Category::Phones).is_empty());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_extend_preserves_order() {
        let mut set = LiteralSet::new().with(Category::Dates, &["1/2/2020"]);
        set.extend(Category::Dates, vec!["March 5".to_string()]);
        assert_eq!(set.get(Category::Dates), &["1/2/2020", "March 5"]);
        assert!(!set.is_empty());
        assert!(LiteralSet::new().is_empty());
    }
}
