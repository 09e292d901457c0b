//! Configuration error types
//!
//! Every error in this crate is raised while a segmenter is being
//! configured. Segmenting text with a valid configuration never fails.

use thiserror::Error;

/// Errors raised while building a [`Segmenter`](crate::Segmenter) or loading
/// its configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No sentence-ending marker was supplied
    #[error("at least one sentence-ending marker must be supplied")]
    EmptySentenceEndingMarkers,

    /// The flat enclosure definition cannot be grouped into pairs
    #[error("odd-length enclosure definition: {length} characters cannot be grouped into pairs")]
    OddLengthEnclosures {
        /// Number of characters in the rejected definition
        length: usize,
    },

    /// A sentence-ending or enclosure pattern failed to compile
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern text as supplied
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A caller-supplied exception pattern failed to compile
    #[error("invalid exception pattern {pattern:?}: {source}")]
    InvalidException {
        /// The pattern text as supplied
        pattern: String,
        /// The underlying look-around capable regex error
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// The TOML configuration could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_markers_display() {
        let error = ConfigError::EmptySentenceEndingMarkers;
        assert_eq!(
            error.to_string(),
            "at least one sentence-ending marker must be supplied"
        );
    }

    #[test]
    fn test_odd_length_display() {
        let error = ConfigError::OddLengthEnclosures { length: 3 };
        assert!(error.to_string().starts_with("odd-length enclosure definition"));
        assert!(error.to_string().contains('3'));
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        use std::error::Error as _;

        let source = regex::Regex::new("(").unwrap_err();
        let error = ConfigError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };

        assert!(error.to_string().contains("\"(\""));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_invalid_exception_keeps_source() {
        use std::error::Error as _;

        let source = fancy_regex::Regex::new("(?<=x").unwrap_err();
        let error = ConfigError::InvalidException {
            pattern: "(?<=x".to_string(),
            source: Box::new(source),
        };

        assert!(error.to_string().starts_with("invalid exception pattern"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: ConfigError = io_error.into();

        match error {
            ConfigError::Io(_) => (),
            _ => panic!("Wrong error type"),
        }
    }
}
