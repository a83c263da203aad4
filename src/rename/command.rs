//! Rename command execution.

use std::path::PathBuf;

use tracing::debug;

use crate::constants::DEST_DIR_NAME;
use crate::error::Result;

use super::copier::{FileOutcome, collect_source_files, ensure_dest_dir, process_source_file};

/// Where to read recordings from and where to put the renamed copies.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Directory scanned for `.mp3`/`.wav` recordings.
    pub source_dir: PathBuf,
    /// Directory receiving the renamed copies.
    pub dest_dir: PathBuf,
}

impl RenameOptions {
    /// Options for `source_dir`, writing to its `BPO_filenames` subdirectory.
    pub fn for_source_dir(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let dest_dir = source_dir.join(DEST_DIR_NAME);
        Self {
            source_dir,
            dest_dir,
        }
    }
}

/// Counts for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameSummary {
    /// Files copied under a new name.
    pub copied: usize,
    /// Files skipped because their name was not recognized.
    pub skipped: usize,
}

/// Execute the rename command.
///
/// Prints one line per file to stdout. Stops at the first I/O error.
#[allow(clippy::print_stdout)]
pub fn execute(options: &RenameOptions) -> Result<RenameSummary> {
    ensure_dest_dir(&options.dest_dir)?;

    let files = collect_source_files(&options.source_dir)?;
    let mut summary = RenameSummary::default();

    for file in &files {
        let outcome = process_source_file(file, &options.dest_dir)?;
        println!("{}", report_line(&outcome));

        match outcome {
            FileOutcome::Copied { .. } => summary.copied += 1,
            FileOutcome::Unrecognized { .. } => summary.skipped += 1,
        }
    }

    debug!(
        "Done: {} copied, {} skipped in {}",
        summary.copied,
        summary.skipped,
        options.source_dir.display()
    );

    Ok(summary)
}

/// Console line for a file outcome.
pub fn report_line(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Copied {
            source,
            destination,
        } => format!(
            "Copied and renamed: {} -> {}",
            source.display(),
            destination.display()
        ),
        FileOutcome::Unrecognized { source } => format!(
            "WARNING: file \"{}\" was not recognized and is ignored.",
            source.display()
        ),
    }
}
