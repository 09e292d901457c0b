//! Enclosure (bracket/quote) pair definitions
//!
//! Enclosures are configured as a flat string in which every two consecutive
//! characters form an `(open, close)` pair. Order is significant: when two
//! spans start at the same character, the pair listed first wins.

use crate::error::{ConfigError, Result};
use crate::lines::BOUNDARY_MARKER;
use regex::{Match, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Enclosures recognised by default: common East-Asian and Western brackets
/// and quotes
pub const DEFAULT_ENCLOSURES: &str =
    "〝〟「」『』（）〔〕［］｛｝｟｠〈〉《》【】〖〗〘〙〚〛‹›«»''\"\"()[]{}｢｣";

/// A single enclosure: sentence endings between `open` and `close` are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnclosurePair {
    /// Opening character
    pub open: char,
    /// Closing character
    pub close: char,
}

impl EnclosurePair {
    /// Create a pair from its opening and closing characters
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// Shortest-match pattern for one span of this enclosure
    ///
    /// The `s` flag lets a span cover line breaks, including the ones inserted
    /// as boundary markers.
    fn pattern(&self) -> String {
        format!(
            "(?s){}.*?{}",
            regex::escape(self.open.encode_utf8(&mut [0; 4])),
            regex::escape(self.close.encode_utf8(&mut [0; 4]))
        )
    }
}

impl From<(char, char)> for EnclosurePair {
    fn from((open, close): (char, char)) -> Self {
        Self::new(open, close)
    }
}

/// Group a flat string of characters into enclosure pairs, preserving order
///
/// No deduplication is performed and `open == close` is allowed, which is how
/// symmetric quotes such as `""` are expressed.
///
/// # Errors
///
/// Returns [`ConfigError::OddLengthEnclosures`] when the number of characters
/// is odd.
pub fn build_enclosure_pairs(flat: &str) -> Result<Vec<EnclosurePair>> {
    let chars: Vec<char> = flat.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(ConfigError::OddLengthEnclosures {
            length: chars.len(),
        });
    }

    Ok(chars
        .chunks_exact(2)
        .map(|pair| EnclosurePair::new(pair[0], pair[1]))
        .collect())
}

/// Removes boundary markers inside enclosure spans
///
/// Each pair is compiled on its own. Scanning left to right, the span that
/// starts first is suppressed; when several pairs start at the same position
/// the pair listed first wins. Scanning resumes after the suppressed span.
///
/// Same-kind nesting such as `「foo「bar」baz」` is not tracked: the shortest
/// match closes at the first closing character.
#[derive(Debug, Clone, Default)]
pub struct EnclosureSuppressor {
    patterns: Vec<Regex>,
}

impl EnclosureSuppressor {
    /// Compile one span pattern per pair, keeping configuration order
    pub fn new(pairs: &[EnclosurePair]) -> Result<Self> {
        let patterns = pairs
            .iter()
            .map(|pair| {
                let pattern = pair.pattern();
                Regex::new(&pattern)
                    .map_err(|source| ConfigError::InvalidPattern { pattern, source })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Number of configured pairs
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check whether no pairs are configured
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Remove every boundary marker inside an enclosure span of `text`
    pub fn suppress<'t>(&self, text: &'t str) -> Cow<'t, str> {
        // Next match of every pattern at or after `last`
        let mut upcoming: Vec<Option<Match<'t>>> =
            self.patterns.iter().map(|pattern| pattern.find(text)).collect();
        let mut suppressed = String::new();
        let mut last = 0;

        loop {
            for (pattern, slot) in self.patterns.iter().zip(upcoming.iter_mut()) {
                if matches!(slot, Some(span) if span.start() < last) {
                    *slot = pattern.find_at(text, last);
                }
            }

            // min_by_key keeps the first of equal starts, i.e. configuration order
            let Some(span) = upcoming.iter().flatten().min_by_key(|span| span.start()).copied()
            else {
                break;
            };

            suppressed.push_str(&text[last..span.start()]);
            suppressed.extend(span.as_str().chars().filter(|&ch| ch != BOUNDARY_MARKER));
            last = span.end();
        }

        if last == 0 {
            return Cow::Borrowed(text);
        }

        suppressed.push_str(&text[last..]);
        Cow::Owned(suppressed)
    }
}
