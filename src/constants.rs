//! Application-wide constants.
//!
//! Fixed names and message formats live here so the driver, the tests and
//! the docs agree on them.

/// Application name used for the binary and user-facing messages.
pub const APP_NAME: &str = "bpo-rename";

/// Name of the subdirectory (under the source directory) that receives
/// the renamed copies.
pub const DEST_DIR_NAME: &str = "BPO_filenames";

/// Source name suffixes, in enumeration order.
///
/// Matching is case-sensitive: `recording.WAV` is not picked up.
pub const SOURCE_SUFFIXES: [&str; 2] = [".mp3", ".wav"];

/// Pattern for BirdNET-Pi recording stems.
///
/// Capture groups: 1 = date (`YYYY-MM-DD`), 2 = species token (letters,
/// digits and underscore; combining marks are not word characters here),
/// 3 = time (`HH_MM_SS`). The digit run and the second date are matched but
/// discarded.
pub const BIRDNET_STEM_PATTERN: &str =
    r"(\d{4}-\d{2}-\d{2})_([\p{L}\p{N}_]+)-\d+-\d{4}-\d{2}-\d{2}-birdnet-(\d{2}_\d{2}_\d{2})";

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
