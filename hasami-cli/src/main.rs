//! Command-line filter that prints one sentence per line

use anyhow::Result;
use clap::Parser;
use hasami_cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only sentences
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    Cli::parse().execute()
}
