//! Sentence segmentation engine
//!
//! Segmentation runs in two passes over one buffer:
//!
//! 1. Every maximal run of sentence-ending markers gets a boundary marker
//!    appended, unless a line break already follows the run.
//! 2. Each exception pattern is applied in order. Any boundary marker inside
//!    a matched span is removed. Exceptions support look-around. Enclosure
//!    suppression runs as the last exception, in a single scan.
//!
//! The marked text is then split on line boundaries.

use crate::config::SegmenterConfig;
use crate::enclosure::{
    build_enclosure_pairs, EnclosurePair, EnclosureSuppressor, DEFAULT_ENCLOSURES,
};
use crate::error::{ConfigError, Result};
use crate::lines::{split_lines, starts_with_line_boundary, BOUNDARY_MARKER};
use fancy_regex::Captures;
use regex::Regex;
use std::borrow::Cow;

/// Sentence-ending markers recognised by default
pub const DEFAULT_SENTENCE_ENDING_MARKERS: &str = "。！？!?‼⁈⁈⁇";

/// How surrounding whitespace is treated during segmentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WhitespacePolicy {
    /// Trim the whole input before segmenting and every sentence afterwards
    #[default]
    Strip,
    /// Return segments exactly as they appear in the input
    Keep,
}

impl WhitespacePolicy {
    #[inline]
    fn apply<'a>(&self, text: &'a str) -> &'a str {
        match self {
            WhitespacePolicy::Strip => text.trim(),
            WhitespacePolicy::Keep => text,
        }
    }
}

impl From<bool> for WhitespacePolicy {
    /// `true` strips whitespace, `false` keeps it
    fn from(strip_whitespace: bool) -> Self {
        if strip_whitespace {
            WhitespacePolicy::Strip
        } else {
            WhitespacePolicy::Keep
        }
    }
}

/// Sentence segmenter with a fixed, precompiled configuration
///
/// A segmenter holds only compiled patterns and can be shared freely between
/// threads.
///
/// # Example
///
/// ```rust
/// use hasami_core::{Segmenter, WhitespacePolicy};
///
/// let segmenter = Segmenter::new().unwrap();
/// let sentences = segmenter.segment_sentences(
///     "これが最初の文です。「これは二番目の文です。」これが最後の文です。",
///     WhitespacePolicy::Strip,
/// );
///
/// assert_eq!(
///     sentences,
///     vec!["これが最初の文です。", "「これは二番目の文です。」これが最後の文です。"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    /// Matches a maximal run of sentence-ending markers
    boundary_pattern: Regex,
    /// User exceptions in configuration order
    exceptions: Vec<fancy_regex::Regex>,
    /// Runs after every user exception
    enclosures: EnclosureSuppressor,
}

impl Segmenter {
    /// Create a segmenter with the default configuration
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder starting from the default configuration
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::default()
    }

    /// Create a segmenter from a deserialized configuration
    pub fn from_config(config: &SegmenterConfig) -> Result<Self> {
        Self::builder()
            .sentence_ending_markers(&config.sentence_ending_markers)
            .enclosures(&config.enclosures)?
            .exceptions(&config.exceptions)?
            .build()
    }

    /// Insert a line break after every sentence ending that is not suppressed
    ///
    /// Applying this twice gives the same result as applying it once.
    pub fn insert_newlines(&self, text: &str) -> String {
        let mut marked = self.mark_boundaries(text);

        for exception in &self.exceptions {
            let suppressed = match exception.try_replacen(&marked, 0, strip_markers) {
                Ok(Cow::Borrowed(_)) => continue,
                Ok(Cow::Owned(suppressed)) => suppressed,
                Err(err) => {
                    // Backtracking limit hit; the pass is skipped, not the call
                    log::warn!("exception {:?} skipped: {}", exception.as_str(), err);
                    continue;
                }
            };
            marked = suppressed;
        }

        if let Cow::Owned(suppressed) = self.enclosures.suppress(&marked) {
            return suppressed;
        }
        marked
    }

    /// Split `text` into sentences
    ///
    /// Pre-existing line breaks also end a sentence. The result always holds at
    /// least one element: empty input yields a single empty sentence.
    pub fn segment_sentences(&self, text: &str, whitespace: WhitespacePolicy) -> Vec<String> {
        // Stripping up front keeps trailing whitespace from becoming a sentence
        let text = whitespace.apply(text);
        if text.is_empty() {
            return vec![String::new()];
        }

        log::trace!("segmenting {} bytes", text.len());

        let marked = self.insert_newlines(text);
        let sentences: Vec<String> = split_lines(&marked)
            .into_iter()
            .map(|sentence| whitespace.apply(sentence).to_string())
            .collect();

        if sentences.is_empty() {
            // An exception removed every line break of a break-only input
            return vec![String::new()];
        }

        sentences
    }

    /// Split `text` into sentences, stripping surrounding whitespace
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segment_sentences(text, WhitespacePolicy::Strip)
    }

    /// Append a boundary marker to every run of sentence-ending markers
    fn mark_boundaries(&self, text: &str) -> String {
        let mut marked = String::with_capacity(text.len() + text.len() / 16);
        let mut last = 0;

        for run in self.boundary_pattern.find_iter(text) {
            marked.push_str(&text[last..run.end()]);
            // Any line boundary counts as an existing break, not only `\n`
            if !starts_with_line_boundary(&text[run.end()..]) {
                marked.push(BOUNDARY_MARKER);
            }
            last = run.end();
        }

        marked.push_str(&text[last..]);
        marked
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new().expect("default segmenter configuration should always compile")
    }
}

fn strip_markers(caps: &Captures<'_>) -> String {
    caps[0].replace(BOUNDARY_MARKER, "")
}

fn compile(pattern: String) -> Result<Regex> {
    Regex::new(&pattern).map_err(|source| ConfigError::InvalidPattern { pattern, source })
}

fn compile_exception(pattern: &str) -> Result<fancy_regex::Regex> {
    fancy_regex::Regex::new(pattern).map_err(|source| ConfigError::InvalidException {
        pattern: pattern.to_string(),
        source: Box::new(source),
    })
}

/// Builder for [`Segmenter`]
#[derive(Debug, Clone)]
pub struct SegmenterBuilder {
    sentence_ending_markers: String,
    /// `None` selects [`DEFAULT_ENCLOSURES`]
    enclosures: Option<Vec<EnclosurePair>>,
    exceptions: Vec<fancy_regex::Regex>,
}

impl Default for SegmenterBuilder {
    fn default() -> Self {
        Self {
            sentence_ending_markers: DEFAULT_SENTENCE_ENDING_MARKERS.to_string(),
            enclosures: None,
            exceptions: Vec::new(),
        }
    }
}

impl SegmenterBuilder {
    /// Set the sentence-ending markers
    ///
    /// Every character, and every run of any combination of them, ends a
    /// sentence.
    pub fn sentence_ending_markers(mut self, markers: impl Into<String>) -> Self {
        self.sentence_ending_markers = markers.into();
        self
    }

    /// Set the enclosures from a flat string of `(open, close)` character pairs
    ///
    /// An empty string disables enclosure suppression.
    pub fn enclosures(mut self, flat: &str) -> Result<Self> {
        self.enclosures = Some(build_enclosure_pairs(flat)?);
        Ok(self)
    }

    /// Set the enclosures from already built pairs
    pub fn enclosure_pairs<I, P>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<EnclosurePair>,
    {
        self.enclosures = Some(pairs.into_iter().map(Into::into).collect());
        self
    }

    /// Add an exception pattern
    ///
    /// Boundary markers inside any span matched by `pattern` are removed.
    /// Exceptions run in the order they are added, before enclosures, and may
    /// use look-around and backreferences.
    pub fn exception(mut self, pattern: &str) -> Result<Self> {
        self.exceptions.push(compile_exception(pattern)?);
        Ok(self)
    }

    /// Add several exception patterns
    pub fn exceptions<I, S>(self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .try_fold(self, |builder, pattern| builder.exception(pattern.as_ref()))
    }

    /// Add an already compiled exception pattern
    pub fn exception_regex(mut self, pattern: fancy_regex::Regex) -> Self {
        self.exceptions.push(pattern);
        self
    }

    /// Compile the configuration into a [`Segmenter`]
    pub fn build(self) -> Result<Segmenter> {
        if self.sentence_ending_markers.is_empty() {
            return Err(ConfigError::EmptySentenceEndingMarkers);
        }

        let class: String = self
            .sentence_ending_markers
            .chars()
            .map(|marker| regex::escape(marker.encode_utf8(&mut [0; 4])))
            .collect();
        let boundary_pattern = compile(format!("[{class}]+"))?;

        let enclosures = match self.enclosures {
            Some(pairs) => pairs,
            None => build_enclosure_pairs(DEFAULT_ENCLOSURES)?,
        };

        let enclosures = EnclosureSuppressor::new(&enclosures)?;

        log::debug!(
            "compiled segmenter: {} sentence-ending markers, {} enclosure pairs, {} exception patterns",
            self.sentence_ending_markers.chars().count(),
            enclosures.len(),
            self.exceptions.len()
        );

        Ok(Segmenter {
            boundary_pattern,
            exceptions: self.exceptions,
            enclosures,
        })
    }
}
