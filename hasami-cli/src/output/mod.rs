//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single sentence
    fn format_sentence(&mut self, sentence: &str) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod text;

pub use text::TextFormatter;
