//! Source enumeration and copy-with-rename.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::SOURCE_SUFFIXES;
use crate::error::{Error, Result};

use super::parser::bpo_file_name;

/// What happened to a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was recognized and copied under its BPO name.
    Copied {
        /// Original recording.
        source: PathBuf,
        /// Renamed copy.
        destination: PathBuf,
    },
    /// The filename did not match the BirdNET-Pi pattern.
    Unrecognized {
        /// Skipped recording.
        source: PathBuf,
    },
}

/// Create the destination directory if it does not exist yet.
///
/// Existing contents are left alone.
pub fn ensure_dest_dir(dest_dir: &Path) -> Result<()> {
    fs::create_dir_all(dest_dir).map_err(|e| Error::DestDirCreate {
        path: dest_dir.to_path_buf(),
        source: e,
    })
}

/// Collect candidate recordings directly inside `source_dir`.
///
/// Every entry whose name ends in `.mp3` comes first, then every entry
/// ending in `.wav`; each group is sorted by file name. Entries are not
/// filtered by type, so a matching directory or dangling symlink is still
/// reported. Subdirectories are not descended into.
pub fn collect_source_files(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |e: std::io::Error| Error::ReadSourceDir {
        path: source_dir.to_path_buf(),
        source: e,
    };

    let mut candidates = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(read_err)? {
        candidates.push(entry.map_err(read_err)?.path());
    }
    candidates.sort();

    let mut files = Vec::with_capacity(candidates.len());
    for suffix in SOURCE_SUFFIXES {
        files.extend(
            candidates
                .iter()
                .filter(|path| has_suffix(path, suffix))
                .cloned(),
        );
    }

    debug!(
        "Found {} candidate file(s) in {}",
        files.len(),
        source_dir.display()
    );

    Ok(files)
}

/// Case-sensitive check that the file name ends in `suffix`.
///
/// Works on the raw name bytes so non-UTF-8 names and bare `.wav` match.
fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
}

/// Copy `source` to `destination` byte for byte.
///
/// An existing destination file is overwritten.
pub fn copy_file(source: &Path, destination: &Path) -> Result<()> {
    let bytes = fs::read(source).map_err(|e| Error::ReadSource {
        path: source.to_path_buf(),
        source: e,
    })?;

    fs::write(destination, bytes).map_err(|e| Error::WriteDestination {
        path: destination.to_path_buf(),
        source: e,
    })
}

/// Parse one source file's name and copy it into `dest_dir` when recognized.
pub fn process_source_file(source: &Path, dest_dir: &Path) -> Result<FileOutcome> {
    let Some(new_name) = bpo_file_name(source) else {
        return Ok(FileOutcome::Unrecognized {
            source: source.to_path_buf(),
        });
    };

    let destination = dest_dir.join(new_name);
    if destination.exists() {
        debug!("Overwriting existing {}", destination.display());
    }
    copy_file(source, &destination)?;

    Ok(FileOutcome::Copied {
        source: source.to_path_buf(),
        destination,
    })
}
