//! Core library for seoscope.
//!
//! Keyword and phrase frequency analysis for page text in English, Russian
//! and Kazakh: tokenization, stop-word filtering, ranked unigram/bigram/
//! trigram tables, and search over the resulting snapshot.
//!
//! # Modules
//!
//! - [`analyzer`] - Page text in, [`ContentAnalysis`] snapshot out
//! - [`tokenizer`] - Alphabet-aware word extraction
//! - [`stopwords`] - Built-in and configured stop-word sets
//! - [`frequency`] - Ranked n-gram tables and percentage formatting
//! - [`search`] - Substring search over a snapshot
//! - [`tags`] - Tag cloud over link texts
//! - [`text`] - Whitespace, sentence and paragraph helpers
//! - [`demo`] - Canned snapshot for fallbacks
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use seoscope_core::{PageText, TextAnalyzer, search};
//!
//! let analyzer = TextAnalyzer::default();
//! let snapshot = analyzer.analyze(&PageText::new("The cat sat. The cat ran.", 1));
//!
//! assert_eq!(snapshot.word_count, 4);
//! assert_eq!(search(&snapshot, "cat")[0].count, 2);
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod demo;
pub mod error;
pub mod frequency;
pub mod search;
pub mod stopwords;
pub mod tags;
pub mod text;
pub mod tokenizer;

/// Default cap on input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

pub use analyzer::{ContentAnalysis, PageText, TextAnalyzer, analyze};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, StopWordsConfig};
pub use demo::demo_analysis;
pub use error::{ConfigError, ConfigResult};
pub use frequency::{FrequencyEntry, FrequencyTable, NgramOrder, TableLimits};
pub use search::{DEFAULT_SEARCH_LIMIT, search, search_with_limit};
pub use stopwords::StopWordSet;
pub use tags::{LinkTag, tag_cloud};
pub use tokenizer::{Alphabet, Tokenizer};
