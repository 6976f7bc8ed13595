use std::path::Path;

use anyhow::{Context, Result};

use crate::core::ports::SequenceRecovery;
use crate::global_constants::{LOG_TAG_SEQUENCE, OUTPUT_IMAGE_EXTENSION};

/// Recovers the capture counter by scanning the output folder for the highest
/// numeric suffix among files named `<prefix><digits>.png`. The filesystem is
/// the only persistence the counter has.
pub struct FilesystemSequenceScanner;

impl FilesystemSequenceScanner {
    pub fn initialize() -> Self {
        log::debug!(
            "{} initializing filesystem sequence scanner",
            LOG_TAG_SEQUENCE
        );
        Self
    }

    fn extract_sequence_index(file_name: &str, prefix: &str) -> Option<u32> {
        let after_prefix = file_name.strip_prefix(prefix)?;
        let digits = after_prefix.strip_suffix(&format!(".{}", OUTPUT_IMAGE_EXTENSION))?;

        digits.parse::<u32>().ok()
    }
}

impl SequenceRecovery for FilesystemSequenceScanner {
    fn recover_last_index(&self, folder: &Path, prefix: &str) -> Result<u32> {
        let entries = std::fs::read_dir(folder)
            .with_context(|| format!("failed to list output folder {:?}", folder))?;

        let mut last_index = 0;
        for entry in entries {
            let entry =
                entry.with_context(|| format!("failed to read an entry of {:?}", folder))?;
            let file_name = entry.file_name();

            let Some(file_name) = file_name.to_str() else {
                continue;
            };

            if let Some(index) = Self::extract_sequence_index(file_name, prefix) {
                last_index = last_index.max(index);
            }
        }

        log::info!(
            "{} resuming capture counter at {}",
            LOG_TAG_SEQUENCE,
            last_index
        );

        Ok(last_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_folder(name: &str, file_names: &[&str]) -> std::path::PathBuf {
        let folder = std::env::temp_dir().join(name);
        std::fs::remove_dir_all(&folder).ok();
        std::fs::create_dir_all(&folder).unwrap();
        for file_name in file_names {
            std::fs::write(folder.join(file_name), b"").unwrap();
        }
        folder
    }

    #[test]
    fn test_empty_folder_recovers_zero() {
        let folder = make_test_folder("satellite-scraper-seq-empty", &[]);
        let scanner = FilesystemSequenceScanner::initialize();

        let last_index = scanner
            .recover_last_index(&folder, "satellite_crop_")
            .unwrap();

        assert_eq!(last_index, 0);
        std::fs::remove_dir_all(&folder).ok();
    }

    #[test]
    fn test_highest_suffix_wins_regardless_of_listing_order() {
        let folder = make_test_folder(
            "satellite-scraper-seq-highest",
            &[
                "satellite_crop_0003.png",
                "satellite_crop_0007.png",
                "satellite_crop_0001.png",
            ],
        );
        let scanner = FilesystemSequenceScanner::initialize();

        let last_index = scanner
            .recover_last_index(&folder, "satellite_crop_")
            .unwrap();

        assert_eq!(last_index, 7);
        std::fs::remove_dir_all(&folder).ok();
    }

    #[test]
    fn test_files_not_matching_the_pattern_are_ignored() {
        let folder = make_test_folder(
            "satellite-scraper-seq-nonmatching",
            &[
                "satellite_crop_0002.png",
                "notes.txt",
                "other_0009.png",
                "satellite_crop_abc.png",
                "satellite_crop_0011.jpg",
            ],
        );
        let scanner = FilesystemSequenceScanner::initialize();

        let last_index = scanner
            .recover_last_index(&folder, "satellite_crop_")
            .unwrap();

        assert_eq!(last_index, 2);
        std::fs::remove_dir_all(&folder).ok();
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let folder = std::env::temp_dir().join("satellite-scraper-seq-missing");
        std::fs::remove_dir_all(&folder).ok();
        let scanner = FilesystemSequenceScanner::initialize();

        assert!(scanner
            .recover_last_index(&folder, "satellite_crop_")
            .is_err());
    }

    #[test]
    fn test_extract_sequence_index_parses_zero_padded_suffix() {
        assert_eq!(
            FilesystemSequenceScanner::extract_sequence_index(
                "satellite_crop_0042.png",
                "satellite_crop_"
            ),
            Some(42)
        );
        assert_eq!(
            FilesystemSequenceScanner::extract_sequence_index("satellite_crop_0042.png", "tile_"),
            None
        );
    }
}
