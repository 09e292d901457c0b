//! Command-line arguments and the segmentation loop

use crate::error::CliResult;
use crate::input::InputSource;
use crate::output::{OutputFormatter, TextFormatter};
use anyhow::Context;
use clap::Parser;
use hasami_core::{Segmenter, WhitespacePolicy};
use std::io::BufRead;
use std::path::PathBuf;

/// Split Japanese text into one sentence per line
#[derive(Debug, Parser)]
#[command(name = "hasami", version, about)]
pub struct Cli {
    /// Input file (default: stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Execute the command
    pub fn execute(&self) -> CliResult<()> {
        log::info!("Starting sentence segmentation");
        log::debug!("Arguments: {:?}", self);

        let source = InputSource::from(self.input.clone());
        let reader = source.open()?;
        let mut formatter = TextFormatter::stdout();

        let lines = segment_lines(reader, hasami_core::default_segmenter(), &mut formatter)?;
        formatter.finish()?;

        log::info!(
            "Processed {} lines into {} sentences from {}",
            lines,
            formatter.sentence_count(),
            source.display_name()
        );
        Ok(())
    }
}

/// Segment every line of `reader` and pass the sentences to `formatter`
///
/// Each line is segmented on its own with surrounding whitespace stripped.
/// Returns the number of lines read.
pub fn segment_lines<R, F>(
    reader: R,
    segmenter: &Segmenter,
    formatter: &mut F,
) -> CliResult<usize>
where
    R: BufRead,
    F: OutputFormatter + ?Sized,
{
    let mut count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
        for sentence in segmenter.segment_sentences(&line, WhitespacePolicy::Strip) {
            formatter.format_sentence(&sentence)?;
        }
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let mut formatter = TextFormatter::new(Vec::new());
        segment_lines(Cursor::new(input), &Segmenter::default(), &mut formatter).unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_optional_input_file() {
        let cli = Cli::try_parse_from(["hasami"]).unwrap();
        assert_eq!(cli.input, None);

        let cli = Cli::try_parse_from(["hasami", "input.txt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("input.txt")));
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["hasami", "--language", "ja"]).is_err());
    }

    #[test]
    fn test_each_line_is_segmented() {
        assert_eq!(
            run("これは単純な文です。\nこれが最初の文です。これは二番目の文です。これが最後の文です。"),
            "これは単純な文です。\nこれが最初の文です。\nこれは二番目の文です。\nこれが最後の文です。\n"
        );
    }

    #[test]
    fn test_whitespace_is_stripped_per_line() {
        assert_eq!(run("  一。 二。  \r\n"), "一。\n二。\n");
    }

    #[test]
    fn test_blank_line_prints_empty_sentence() {
        assert_eq!(run("一。\n\n二。\n"), "一。\n\n二。\n");
    }

    #[test]
    fn test_line_count() {
        let mut formatter = TextFormatter::new(Vec::new());
        let lines =
            segment_lines(Cursor::new("一。二。\n三。"), &Segmenter::default(), &mut formatter)
                .unwrap();
        assert_eq!(lines, 2);
        assert_eq!(formatter.sentence_count(), 3);
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        let result = segment_lines(
            Cursor::new(b"ok\n\xff\xfe\n".to_vec()),
            &Segmenter::default(),
            &mut formatter,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read line 2"));
    }
}
