//! bpo-rename - copy BirdNET-Pi recordings under BPO-compliant filenames.
//!
//! The library side takes an explicit source directory
//! ([`rename::RenameOptions`]); only [`run`] looks at the process working
//! directory.

#![warn(missing_docs)]

pub mod cli;
pub mod constants;
pub mod error;
pub mod rename;

use clap::Parser;
use cli::Cli;
use constants::DEFAULT_LOG_FILTER;
use rename::RenameOptions;
use tracing::debug;

pub use error::{Error, Result};

/// Main entry point for the bpo-rename CLI.
pub fn run() -> Result<()> {
    let _cli = Cli::parse();

    init_logging();

    let source_dir = std::env::current_dir().map_err(|e| Error::CurrentDir { source: e })?;
    debug!("Scanning {}", source_dir.display());

    rename::execute(&RenameOptions::for_source_dir(source_dir))?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
