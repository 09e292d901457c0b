//! Serializable segmenter configuration
//!
//! This module defines the TOML schema for segmenter configuration. Every key
//! is optional and falls back to the built-in defaults:
//!
//! ```toml
//! sentence_ending_markers = "。！？"
//! enclosures = "「」『』（）"
//! exceptions = ['君の名は。\n', '\w\n\w']
//! ```

use crate::enclosure::DEFAULT_ENCLOSURES;
use crate::error::Result;
use crate::segmenter::DEFAULT_SENTENCE_ENDING_MARKERS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root segmenter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmenterConfig {
    /// Characters that end a sentence, alone or in runs
    pub sentence_ending_markers: String,
    /// Flat string of `(open, close)` character pairs
    pub enclosures: String,
    /// Exception patterns applied in order, before enclosures
    pub exceptions: Vec<String>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            sentence_ending_markers: DEFAULT_SENTENCE_ENDING_MARKERS.to_string(),
            enclosures: DEFAULT_ENCLOSURES.to_string(),
            exceptions: Vec::new(),
        }
    }
}

impl SegmenterConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("loaded segmenter configuration from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }
}
