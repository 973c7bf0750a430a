//! Entity extraction
//!
//! Extractors decide *what* text is sensitive; the masking engine only ever
//! sees their output as plain literal lists. Every extractor is constructed
//! explicitly and injected through an [`ExtractorSet`], so the engine can be
//! driven by fakes in tests.
//!
//! The default set mirrors a classic setup:
//!
//! | Category  | Extractors                                        |
//! |-----------|---------------------------------------------------|
//! | names     | person gazetteer                                  |
//! | dates     | date patterns                                     |
//! | addresses | place gazetteer, then street-address patterns     |
//! | phones    | phone patterns                                    |

pub mod gazetteer;
pub mod pattern;
pub mod patterns;

pub use gazetteer::{GazetteerExtractor, GazetteerMode};
pub use pattern::PatternExtractor;
pub use patterns::PatternRegistry;

use crate::config::ExtractionConfig;
use crate::domain::CensorError;
use crate::redaction::{Category, CategorySelection, LiteralSet};
use anyhow::Result;

/// Trait for entity extractor implementations
pub trait Extractor: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Return the sensitive literals found in `text`, in a deterministic order
    fn extract(&self, text: &str) -> Result<Vec<String>>;
}

/// Extractors grouped by category
#[derive(Default)]
pub struct ExtractorSet {
    extractors: [Vec<Box<dyn Extractor>>; 4],
}

impl ExtractorSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extractor for a category
    ///
    /// Extractors of one category run in registration order and their
    /// outputs are concatenated.
    pub fn add(&mut self, category: Category, extractor: Box<dyn Extractor>) {
        self.extractors[category.rank()].push(extractor);
    }

    /// Builder form of [`add`](Self::add)
    pub fn with(mut self, category: Category, extractor: impl Extractor + 'static) -> Self {
        self.add(category, Box::new(extractor));
        self
    }

    /// Build the default set, honoring custom pattern and word-list files
    ///
    /// Pattern library failures surface as [`CensorError::Pattern`], word
    /// list failures as [`CensorError::Extraction`].
    pub fn from_config(config: &ExtractionConfig) -> crate::domain::Result<Self> {
        let registry = match &config.pattern_library {
            Some(path) => PatternRegistry::from_file(path),
            None => PatternRegistry::default_patterns(),
        }
        .map_err(|e| CensorError::Pattern(format!("{e:#}")))?;

        let people = match &config.given_names {
            Some(path) => GazetteerExtractor::from_file(path, GazetteerMode::Person),
            None => GazetteerExtractor::default_people(),
        }
        .map_err(|e| CensorError::Extraction(format!("{e:#}")))?;

        let places = match &config.places {
            Some(path) => GazetteerExtractor::from_file(path, GazetteerMode::Place),
            None => GazetteerExtractor::default_places(),
        }
        .map_err(|e| CensorError::Extraction(format!("{e:#}")))?;

        let set = Self::new()
            .with(Category::Names, people)
            .with(
                Category::Dates,
                PatternExtractor::for_category(&registry, Category::Dates),
            )
            .with(Category::Addresses, places)
            .with(
                Category::Addresses,
                PatternExtractor::for_category(&registry, Category::Addresses),
            )
            .with(
                Category::Phones,
                PatternExtractor::for_category(&registry, Category::Phones),
            );

        tracing::debug!(
            names = set.count(Category::Names),
            dates = set.count(Category::Dates),
            addresses = set.count(Category::Addresses),
            phones = set.count(Category::Phones),
            "Extractors configured"
        );

        Ok(set)
    }

    /// Number of extractors registered for a category
    pub fn count(&self, category: Category) -> usize {
        self.extractors[category.rank()].len()
    }

    /// Run the extractors of every selected category
    ///
    /// Unselected categories get an empty list.
    pub fn extract(
        &self,
        text: &str,
        selection: &CategorySelection,
    ) -> crate::domain::Result<LiteralSet> {
        let mut literals = LiteralSet::new();

        for category in selection.iter() {
            for extractor in &self.extractors[category.rank()] {
                let found = extractor.extract(text).map_err(|e| {
                    CensorError::Extraction(format!(
                        "Extractor '{}' failed: {e:#}",
                        extractor.name()
                    ))
                })?;
                tracing::trace!(
                    extractor = extractor.name(),
                    category = %category,
                    found = found.len(),
                    "Extractor finished"
                );
                literals.extend(category, found);
            }
        }

        Ok(literals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedExtractor(Vec<&'static str>);

    impl Extractor for FixedExtractor {
        fn name(&self) -> &str {
            "fixed"
        }

        fn extract(&self, _text: &str) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    struct FailingExtractor;

    impl Extractor for FailingExtractor {
        fn name(&self) -> &str {
            "failing"
        }

        fn extract(&self, _text: &str) -> Result<Vec<String>> {
            anyhow::bail!("model not loaded")
        }
    }

    #[test]
    fn test_outputs_concatenated_in_registration_order() {
        let set = ExtractorSet::new()
            .with(Category::Addresses, FixedExtractor(vec!["Paris"]))
            .with(Category::Addresses, FixedExtractor(vec!["12 Rue Street", "Paris"]));

        let literals = set.extract("", &CategorySelection::all()).unwrap();
        assert_eq!(
            literals.get(Category::Addresses),
            &["Paris", "12 Rue Street", "Paris"]
        );
    }

    #[test]
    fn test_unselected_categories_are_empty() {
        let set = ExtractorSet::new()
            .with(Category::Names, FixedExtractor(vec!["John"]))
            .with(Category::Phones, FixedExtractor(vec!["555-1234"]));

        let selection = CategorySelection::none().with(Category::Phones);
        let literals = set.extract("", &selection).unwrap();

        assert!(literals.get(Category::Names).is_empty());
        assert_eq!(literals.get(Category::Phones), &["555-1234"]);
    }

    #[test]
    fn test_extractor_error_names_extractor() {
        let set = ExtractorSet::new().with(Category::Names, FailingExtractor);
        let err = set.extract("text", &CategorySelection::all()).unwrap_err();
        assert!(matches!(err, CensorError::Extraction(_)));
        assert!(err.to_string().contains("failing"));
        assert!(err.to_string().contains("model not loaded"));
    }

    #[test]
    fn test_bad_pattern_library_is_pattern_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"[patterns.broken]\ncategory = \"dates\"\npatterns = [\"(unclosed\"]\n",
        )
        .unwrap();

        let config = ExtractionConfig {
            pattern_library: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = ExtractorSet::from_config(&config).err().unwrap();
        assert!(matches!(err, CensorError::Pattern(_)));
    }

    #[test]
    fn test_missing_word_list_is_extraction_error() {
        let config = ExtractionConfig {
            given_names: Some("/nonexistent/names.txt".into()),
            ..Default::default()
        };
        let err = ExtractorSet::from_config(&config).err().unwrap();
        assert!(matches!(err, CensorError::Extraction(_)));
    }

    #[test]
    fn test_default_set_from_config() {
        let set = ExtractorSet::from_config(&ExtractionConfig::default()).unwrap();
        assert_eq!(set.count(Category::Names), 1);
        assert_eq!(set.count(Category::Dates), 1);
        assert_eq!(set.count(Category::Addresses), 2);
        assert_eq!(set.count(Category::Phones), 1);

        let text = "John lives in Paris. Phone: 555-1234.";
        let literals = set.extract(text, &CategorySelection::all()).unwrap();
        assert_eq!(literals.get(Category::Names), &["John"]);
        assert!(literals.get(Category::Dates).is_empty());
        assert_eq!(literals.get(Category::Addresses), &["Paris"]);
        assert_eq!(literals.get(Category::Phones), &["555-1234"]);
    }
}
