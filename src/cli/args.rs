//! CLI argument definitions.

use clap::Parser;

/// Copy BirdNET-Pi recordings in the current directory into `BPO_filenames/`
/// under BPO-compliant names.
///
/// Every `*.mp3` and `*.wav` file directly in the working directory is
/// examined. Files named like
/// `2023-05-14_robin-3-2023-05-14-birdnet-07_32_10.wav` are copied to
/// `BPO_filenames/20230514-073210-robin.wav`; anything else is reported and
/// left alone. Source files are never modified.
#[derive(Debug, Parser)]
#[command(name = crate::constants::APP_NAME)]
#[command(author, version, about)]
pub struct Cli {}
