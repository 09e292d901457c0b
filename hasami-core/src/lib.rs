//! Sentence segmentation for Japanese text
//!
//! Text is split after every run of sentence-ending markers such as `。`, `！`
//! or `？`. Endings inside enclosures like `「…」` or `（…）` do not split, and
//! caller-supplied exception patterns can suppress further boundaries.
//!
//! # Example
//!
//! ```rust
//! use hasami_core::{segment_sentences, WhitespacePolicy};
//!
//! let sentences = segment_sentences(
//!     "これが最初の文です。これは二番目の文です。これが最後の文です。",
//!     WhitespacePolicy::Strip,
//! );
//!
//! assert_eq!(
//!     sentences,
//!     vec!["これが最初の文です。", "これは二番目の文です。", "これが最後の文です。"]
//! );
//! ```
//!
//! Custom configurations are built with [`Segmenter::builder`] or loaded from
//! TOML through [`SegmenterConfig`].
//!
//! # Limitations
//!
//! Enclosures are matched with shortest-match regular expressions, so nested
//! enclosures of the same kind (`「foo「bar。」baz」`) close at the first
//! closing character. Spans of different kinds go to the one that starts
//! first, and to the pair listed first when they start together.

#![warn(missing_docs)]

pub mod config;
pub mod enclosure;
pub mod error;
pub mod lines;
pub mod segmenter;

use std::sync::OnceLock;

pub use config::SegmenterConfig;
pub use enclosure::{
    build_enclosure_pairs, EnclosurePair, EnclosureSuppressor, DEFAULT_ENCLOSURES,
};
pub use error::{ConfigError, Result};
pub use segmenter::{
    Segmenter, SegmenterBuilder, WhitespacePolicy, DEFAULT_SENTENCE_ENDING_MARKERS,
};

static DEFAULT_SEGMENTER: OnceLock<Segmenter> = OnceLock::new();

/// Shared segmenter with the default configuration, compiled on first use
pub fn default_segmenter() -> &'static Segmenter {
    DEFAULT_SEGMENTER.get_or_init(Segmenter::default)
}

/// Insert line breaks after sentence endings using the default configuration
pub fn insert_newlines(text: &str) -> String {
    default_segmenter().insert_newlines(text)
}

/// Split text into sentences using the default configuration
pub fn segment_sentences(text: &str, whitespace: WhitespacePolicy) -> Vec<String> {
    default_segmenter().segment_sentences(text, whitespace)
}
