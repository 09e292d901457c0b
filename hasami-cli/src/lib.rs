//! Hasami CLI library
//!
//! This library provides the line-oriented command-line filter for the
//! hasami sentence segmenter.

pub mod cli;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{segment_lines, Cli};
pub use error::{CliError, CliResult};
