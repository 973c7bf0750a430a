//! Category-ordered masking engine
//!
//! [`MaskEngine`] walks the categories in their fixed rank order and, within a
//! category, the literals in the order the extractor supplied them. Each
//! literal is located in the *current* working buffer, and an occurrence that
//! touches any position already masked by an earlier literal or category is
//! rejected. Mask glyphs present in the original text stay matchable.
//!
//! Every replacement writes exactly as many mask glyphs as characters it
//! covers. Offsets computed for later literals therefore stay valid in the
//! coordinate space of the original document.
//!
//! # Examples
//!
//! ```
//! use censor::redaction::{Category, LiteralSet, MaskEngine};
//!
//! let literals = LiteralSet::new()
//!     .with(Category::Names, &["John"])
//!     .with(Category::Addresses, &["Paris"]);
//!
//! let masked = MaskEngine::new().mask("John lives in Paris.", &literals);
//! assert_eq!(masked.text(), "████ lives in █████.");
//! assert_eq!(masked.stats().count(Category::Addresses), 1);
//! ```

use super::category::Category;
use super::literals::LiteralSet;
use super::locator::find_occurrences_where;
use super::stats::{RedactionStats, StatsRecorder};

/// Glyph written over every masked character (U+2588 FULL BLOCK)
pub const MASK_GLYPH: char = '\u{2588}';

/// Result of masking one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedDocument {
    text: String,
    stats: RedactionStats,
}

impl MaskedDocument {
    /// Masked text, same length in characters as the original
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Statistics of what was masked
    pub fn stats(&self) -> &RedactionStats {
        &self.stats
    }

    /// Split into masked text and statistics
    pub fn into_parts(self) -> (String, RedactionStats) {
        (self.text, self.stats)
    }
}

/// Masking engine
///
/// The engine holds no per-document state; each call to [`mask`](Self::mask)
/// owns its working buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskEngine;

impl MaskEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Mask every literal occurrence in `text`
    pub fn mask(&self, text: &str, literals: &LiteralSet) -> MaskedDocument {
        let mut buffer: Vec<char> = text.chars().collect();
        let mut masked = vec![false; buffer.len()];
        let mut recorder = StatsRecorder::new();

        for category in Category::ALL {
            for literal in literals.get(category) {
                if literal.is_empty() {
                    tracing::trace!(category = %category, "Skipping empty literal");
                    continue;
                }
                Self::mask_literal(&mut buffer, &mut masked, literal, category, &mut recorder);
            }

            tracing::debug!(
                category = %category,
                literals = literals.get(category).len(),
                masked = recorder.stats().count(category),
                "Category masked"
            );
        }

        MaskedDocument {
            text: buffer.into_iter().collect(),
            stats: recorder.finish(),
        }
    }

    fn mask_literal(
        buffer: &mut [char],
        masked: &mut [bool],
        literal: &str,
        category: Category,
        recorder: &mut StatsRecorder,
    ) {
        let needle: Vec<char> = literal.chars().collect();
        let spans = find_occurrences_where(buffer, &needle, |span| {
            !masked[span.start..span.end].contains(&true)
        });
        for span in spans {
            recorder.record(category, span);
            buffer[span.start..span.end].fill(MASK_GLYPH);
            masked[span.start..span.end].fill(true);
        }
    }
}
