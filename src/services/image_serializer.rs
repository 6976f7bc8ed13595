use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::global_constants::{LOG_TAG_SERIALIZE, SUPPORTED_IMAGE_EXTENSIONS};

#[derive(Debug)]
pub struct SerializationReport {
    pub files_processed: usize,
    pub start_index: u32,
}

/// Renames every image in a folder into a gap-free zero-padded sequence,
/// ordered by the numeric token embedded in the original names.
pub struct ImageSerializer;

impl ImageSerializer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing image serializer", LOG_TAG_SERIALIZE);
        Self
    }

    fn list_image_files(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(folder)
            .with_context(|| format!("failed to list folder {:?}", folder))?;

        let mut image_files = Vec::new();
        for entry in entries {
            let entry =
                entry.with_context(|| format!("failed to read an entry of {:?}", folder))?;
            let path = entry.path();

            if path.is_file() && has_supported_image_extension(&path) {
                image_files.push(path);
            }
        }

        Ok(image_files)
    }

    pub fn serialize_folder(
        &self,
        folder: &Path,
        prefix: &str,
        start_index: u32,
    ) -> Result<SerializationReport> {
        if !folder.exists() {
            anyhow::bail!("folder {:?} does not exist", folder);
        }

        let mut image_files = self.list_image_files(folder)?;

        // Stable sort: files with equal keys keep whatever order the
        // directory listing produced.
        image_files.sort_by_key(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(extract_numeric_sort_key)
                .unwrap_or(0)
        });

        let mut current_index = start_index;
        for old_path in &image_files {
            let original_extension = old_path
                .extension()
                .and_then(|extension| extension.to_str())
                .unwrap_or_default();
            let new_file_name = format!("{}{:04}.{}", prefix, current_index, original_extension);
            let new_path = folder.join(&new_file_name);

            std::fs::rename(old_path, &new_path)
                .with_context(|| format!("failed to rename {:?} to {:?}", old_path, new_path))?;

            let old_file_name = old_path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();
            log::info!(
                "{} renamed {} -> {}",
                LOG_TAG_SERIALIZE,
                old_file_name,
                new_file_name
            );

            current_index += 1;
        }

        Ok(SerializationReport {
            files_processed: image_files.len(),
            start_index,
        })
    }
}

/// The first maximal run of decimal digits anywhere in the name; 0 when the
/// name carries none.
pub fn extract_numeric_sort_key(file_name: &str) -> u64 {
    let mut digit_run = String::new();

    for character in file_name.chars() {
        if character.is_ascii_digit() {
            digit_run.push(character);
        } else if !digit_run.is_empty() {
            break;
        }
    }

    if digit_run.is_empty() {
        return 0;
    }

    // A run too long for u64 still has to sort after everything sane.
    digit_run.parse::<u64>().unwrap_or(u64::MAX)
}

fn has_supported_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            let extension = extension.to_ascii_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&extension.as_str())
        })
        .unwrap_or(false)
}
