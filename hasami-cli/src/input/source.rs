//! Line-oriented input from a file or standard input

use crate::error::{CliError, CliResult};
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where input lines are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Open the source for buffered line reading
    pub fn open(&self) -> CliResult<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            InputSource::File(path) => {
                Self::check_file(path)?;
                let file = File::open(path)
                    .with_context(|| format!("Failed to open file: {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Human-readable name used in log messages
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    fn check_file(path: &Path) -> CliResult<()> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        if !path.is_file() {
            return Err(CliError::NotAFile(path.display().to_string()).into());
        }
        Ok(())
    }
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(InputSource::Stdin, InputSource::File)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_optional_path() {
        assert_eq!(InputSource::from(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from(Some(PathBuf::from("a.txt"))),
            InputSource::File(PathBuf::from("a.txt"))
        );
    }

    #[test]
    fn test_open_reads_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("input.txt");
        fs::write(&file_path, "一行目\n二行目\n").unwrap();

        let reader = InputSource::File(file_path).open().unwrap();
        let lines: Vec<String> = reader.lines().map(|line| line.unwrap()).collect();
        assert_eq!(lines, vec!["一行目", "二行目"]);
    }

    #[test]
    fn test_open_nonexistent_file() {
        let result = InputSource::File(PathBuf::from("/nonexistent/file.txt")).open();
        let err = result.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_open_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = InputSource::File(temp_dir.path().to_path_buf()).open();
        let err = result.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotAFile(_))
        ));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(InputSource::Stdin.display_name(), "<stdin>");
        assert_eq!(
            InputSource::File(PathBuf::from("input.txt")).display_name(),
            "input.txt"
        );
    }
}
