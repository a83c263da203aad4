//! Copy BirdNET-Pi recordings under BPO-compliant filenames.
//!
//! The parser turns a recording stem into date, time and species; the
//! copier enumerates a directory and writes renamed copies; the command
//! ties the two together and reports each file.

pub mod command;
mod copier;
mod parser;

pub use command::{RenameOptions, RenameSummary, execute};
pub use copier::{
    FileOutcome, collect_source_files, copy_file, ensure_dest_dir, process_source_file,
};
pub use parser::{ParsedComponents, bpo_file_name, parse_stem};
