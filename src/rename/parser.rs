//! BirdNET-Pi filename parsing.
//!
//! Recordings written by BirdNET-Pi carry their date, species and time in
//! the stem, e.g. `2023-05-14_robin-3-2023-05-14-birdnet-07_32_10.wav`.
//! The BPO pipeline expects `20230514-073210-robin.wav` instead.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::BIRDNET_STEM_PATTERN;

// Pattern is a compile-time constant and known to be valid
#[allow(clippy::expect_used)]
static BIRDNET_STEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BIRDNET_STEM_PATTERN).expect("valid BirdNET stem pattern"));

/// Components extracted from a recognized BirdNET-Pi stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedComponents {
    /// Recording date as `YYYYMMDD`.
    pub date: String,
    /// Recording time as `HHMMSS`.
    pub time: String,
    /// Species token, verbatim.
    pub species: String,
}

impl ParsedComponents {
    /// Build the BPO filename: `{date}-{time}-{species}{suffix}`.
    ///
    /// `suffix` includes the leading dot (`.wav`), or is empty.
    pub fn file_name(&self, suffix: &str) -> String {
        format!("{}-{}-{}{suffix}", self.date, self.time, self.species)
    }
}

/// Parse a filename stem (no extension).
///
/// The pattern may appear anywhere in the stem; the leftmost match wins.
/// Returns `None` when the stem is not a BirdNET-Pi recording name.
pub fn parse_stem(stem: &str) -> Option<ParsedComponents> {
    let captures = BIRDNET_STEM.captures(stem)?;

    Some(ParsedComponents {
        date: captures[1].replace('-', ""),
        time: captures[3].replace('_', ""),
        species: captures[2].to_string(),
    })
}

/// Compute the BPO filename for a source path.
///
/// The original extension is kept exactly, case included. Non-UTF-8 names
/// are converted lossily before matching.
pub fn bpo_file_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let suffix = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    parse_stem(&stem).map(|parsed| parsed.file_name(&suffix))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stem_basic() {
        let parsed = parse_stem("2023-05-14_robin-3-2023-05-14-birdnet-07_32_10").unwrap();
        assert_eq!(parsed.date, "20230514");
        assert_eq!(parsed.time, "073210");
        assert_eq!(parsed.species, "robin");
    }

    #[test]
    fn test_parse_stem_with_surrounding_text() {
        let parsed =
            parse_stem("backup_2023-05-14_robin-3-2023-05-14-birdnet-07_32_10_copy").unwrap();
        assert_eq!(parsed.date, "20230514");
        assert_eq!(parsed.time, "073210");
        // Leading "backup_" is not part of the species token
        assert_eq!(parsed.species, "robin");
    }

    #[test]
    fn test_parse_stem_leftmost_match_wins() {
        let stem = "2021-01-01_wren-1-2021-01-01-birdnet-01_01_01 \
                    2022-02-02_owl-2-2022-02-02-birdnet-02_02_02";
        let parsed = parse_stem(stem).unwrap();
        assert_eq!(parsed.species, "wren");
        assert_eq!(parsed.date, "20210101");
    }

    #[test]
    fn test_parse_stem_species_with_underscores_and_digits() {
        let parsed =
            parse_stem("2023-06-01_Great_Tit_2-87-2023-06-01-birdnet-23_59_58").unwrap();
        assert_eq!(parsed.species, "Great_Tit_2");
        assert_eq!(parsed.time, "235958");
    }

    #[test]
    fn test_parse_stem_second_date_not_validated() {
        let parsed = parse_stem("2023-05-14_robin-3-1999-12-31-birdnet-07_32_10").unwrap();
        assert_eq!(parsed.date, "20230514");
    }

    #[test]
    fn test_parse_stem_rejects_missing_birdnet_literal() {
        assert!(parse_stem("2023-05-14_robin-3-2023-05-14-07_32_10").is_none());
        assert!(parse_stem("2023-05-14_robin-3-2023-05-14-BirdNET-07_32_10").is_none());
    }

    #[test]
    fn test_parse_stem_rejects_malformed_parts() {
        // Missing digit run
        assert!(parse_stem("2023-05-14_robin-2023-05-14-birdnet-07_32_10").is_none());
        // Time with colons
        assert!(parse_stem("2023-05-14_robin-3-2023-05-14-birdnet-07:32:10").is_none());
        // Short year
        assert!(parse_stem("23-05-14_robin-3-2023-05-14-birdnet-07_32_10").is_none());
        // Species with a space
        assert!(parse_stem("2023-05-14_song sparrow-3-2023-05-14-birdnet-07_32_10").is_none());
    }

    #[test]
    fn test_parse_stem_rejects_bpo_output_names() {
        assert!(parse_stem("20230514-073210-robin").is_none());
        assert!(parse_stem("not_a_birdnet_file").is_none());
        assert!(parse_stem("").is_none());
    }

    #[test]
    fn test_file_name_format() {
        let parsed = ParsedComponents {
            date: "20230514".to_string(),
            time: "073210".to_string(),
            species: "robin".to_string(),
        };
        assert_eq!(parsed.file_name(".wav"), "20230514-073210-robin.wav");
        assert_eq!(parsed.file_name(""), "20230514-073210-robin");
    }

    #[test]
    fn test_bpo_file_name_preserves_suffix() {
        let stem = "2023-05-14_robin-3-2023-05-14-birdnet-07_32_10";
        assert_eq!(
            bpo_file_name(Path::new(&format!("{stem}.wav"))).unwrap(),
            "20230514-073210-robin.wav"
        );
        assert_eq!(
            bpo_file_name(Path::new(&format!("/data/{stem}.mp3"))).unwrap(),
            "20230514-073210-robin.mp3"
        );
        assert_eq!(
            bpo_file_name(Path::new(&format!("{stem}.WAV"))).unwrap(),
            "20230514-073210-robin.WAV"
        );
    }

    #[test]
    fn test_bpo_file_name_uses_last_extension_only() {
        let name = "2023-05-14_robin-3-2023-05-14-birdnet-07_32_10.backup.wav";
        assert_eq!(
            bpo_file_name(Path::new(name)).unwrap(),
            "20230514-073210-robin.wav"
        );
    }

    #[test]
    fn test_bpo_file_name_unrecognized() {
        assert!(bpo_file_name(Path::new("not_a_birdnet_file.mp3")).is_none());
    }

    #[test]
    fn test_parse_stem_unicode_species() {
        let parsed = parse_stem("2024-04-01_räkättirastas-5-2024-04-01-birdnet-05_00_00").unwrap();
        assert_eq!(parsed.species, "räkättirastas");
    }

    #[test]
    fn test_parse_stem_rejects_combining_marks_in_species() {
        // NFD form of "räkätti", as written by macOS filesystems
        assert!(parse_stem("2024-04-01_ra\u{0308}katti-5-2024-04-01-birdnet-05_00_00").is_none());
    }
}
