//! Masking and statistics engine
//!
//! This module is the core of censor. Given a document and, per category, a
//! list of literal strings already flagged as sensitive, it masks every
//! occurrence with a same-length run of `█` and records where each mask went.
//!
//! # Architecture
//!
//! - **Locator** ([`locator`]): non-overlapping exact-substring search
//! - **Engine** ([`MaskEngine`]): category-ordered masking over an owned buffer
//! - **Statistics** ([`StatsRecorder`], [`RedactionStats`]): counts and spans
//! - **Report** ([`StatsReport`]): per-batch rendering and delivery
//! - **Audit** ([`audit::AuditLogger`]): optional hashed audit trail
//!
//! Categories are always processed as names, dates, addresses, phones. The
//! first category to mask a region owns it.

pub mod audit;
pub mod category;
pub mod engine;
pub mod literals;
pub mod locator;
pub mod report;
pub mod stats;

pub use category::{Category, CategorySelection};
pub use engine::{MaskEngine, MaskedDocument, MASK_GLYPH};
pub use literals::LiteralSet;
pub use report::{FileStats, ReportFormat, StatsDestination, StatsReport};
pub use stats::{CategoryStats, RedactionStats, Span, StatsRecorder};
