//! Error types for bpo-rename.

use std::path::PathBuf;

/// Result type alias for bpo-rename operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for bpo-rename.
///
/// Every variant is fatal for the run. An unrecognized filename is not an
/// error; it is reported as a skipped file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The process working directory could not be determined.
    #[error("could not determine the current working directory")]
    CurrentDir {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to list the source directory.
    #[error("failed to read source directory '{path}'")]
    ReadSourceDir {
        /// Path to the source directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the destination directory.
    #[error("failed to create destination directory '{path}'")]
    DestDirCreate {
        /// Path to the destination directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a source recording.
    #[error("failed to read source file '{path}'")]
    ReadSource {
        /// Path to the source file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a renamed copy.
    #[error("failed to write destination file '{path}'")]
    WriteDestination {
        /// Path to the destination file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
