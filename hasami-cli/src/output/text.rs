//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, BufWriter, Write};

/// Plain text formatter - outputs one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }

    /// Number of sentences written so far
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Consume the formatter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<BufWriter<io::StdoutLock<'static>>> {
    /// Create a buffered formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout().lock()))
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, sentence: &str) -> Result<()> {
        writeln!(self.writer, "{sentence}")?;
        self.sentence_count += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_sentence_per_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_sentence("一。").unwrap();
        formatter.format_sentence("二。").unwrap();
        formatter.finish().unwrap();

        assert_eq!(formatter.sentence_count(), 2);
        assert_eq!(String::from_utf8(formatter.into_inner()).unwrap(), "一。\n二。\n");
    }

    #[test]
    fn test_empty_sentence_is_an_empty_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_sentence("").unwrap();

        assert_eq!(formatter.into_inner(), b"\n");
    }
}
