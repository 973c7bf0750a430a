// Censor - Sensitive Entity Redaction Tool
// Copyright (c) 2025 Censor Contributors
// Licensed under the MIT License

//! # Censor - Sensitive Entity Redaction
//!
//! Censor masks person names, dates, addresses and phone numbers in plain
//! text documents and reports exactly where each masked occurrence was.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** sensitive literals with pluggable extractors
//! - **Masking** every occurrence with a full-block glyph, preserving length
//! - **Recording** per-category counts and character spans
//! - **Reporting** per-file statistics as text or JSON
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Batch orchestration over input files
//! - [`extract`] - Extractors producing the literals to mask
//! - [`redaction`] - Masking engine, statistics, report and audit log
//! - [`domain`] - Error types shared by every layer
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use censor::redaction::{Category, LiteralSet, MaskEngine};
//!
//! let literals = LiteralSet::new()
//!     .with(Category::Names, &["John"])
//!     .with(Category::Addresses, &["Paris"])
//!     .with(Category::Phones, &["555-1234"]);
//!
//! let doc = MaskEngine::new().mask("John lives in Paris. Phone: 555-1234.", &literals);
//!
//! assert_eq!(doc.text(), "████ lives in █████. Phone: ████████.");
//! assert_eq!(doc.stats().count(Category::Addresses), 1);
//! ```
//!
//! ## Category Precedence
//!
//! Categories are masked in a fixed order: names, dates, addresses, phones.
//! A region masked by an earlier category can no longer match a later one, so
//! a value listed under two categories is credited to the first only:
//!
//! ```rust
//! use censor::redaction::{Category, LiteralSet, MaskEngine};
//!
//! let literals = LiteralSet::new()
//!     .with(Category::Names, &["Paris"])
//!     .with(Category::Addresses, &["Paris"]);
//!
//! let doc = MaskEngine::new().mask("Paris Paris", &literals);
//! assert_eq!(doc.stats().count(Category::Names), 2);
//! assert_eq!(doc.stats().count(Category::Addresses), 0);
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::CensorError`]:
//!
//! ```rust,no_run
//! use censor::domain::CensorError;
//!
//! fn example() -> Result<(), CensorError> {
//!     let config = censor::config::load_config("censor.toml")?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod extract;
pub mod logging;
pub mod redaction;
