use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::global_constants;

/// Run configuration for the capture utility. Loaded from the user config
/// directory; written back with defaults on first run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSettings {
    pub output_folder: String,
    pub file_prefix: String,
    pub crop_width: u32,
    pub crop_height: u32,
    pub crop_x_offset: u32,
    pub crop_y_offset: u32,
    pub batch_size: u32,
    pub drag_distance_pixels: u32,
    pub settle_delay_ms: u64,
    pub pointer_move_duration_ms: u64,
    pub drag_duration_ms: u64,
    #[serde(default)]
    pub enable_input_fail_safe: bool,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            output_folder: global_constants::DEFAULT_OUTPUT_FOLDER.to_string(),
            file_prefix: global_constants::DEFAULT_OUTPUT_FILE_PREFIX.to_string(),
            crop_width: global_constants::DEFAULT_CROP_WIDTH,
            crop_height: global_constants::DEFAULT_CROP_HEIGHT,
            crop_x_offset: global_constants::DEFAULT_CROP_X_OFFSET,
            crop_y_offset: global_constants::DEFAULT_CROP_Y_OFFSET,
            batch_size: global_constants::DEFAULT_BATCH_SIZE,
            drag_distance_pixels: global_constants::DEFAULT_DRAG_DISTANCE_PIXELS,
            settle_delay_ms: global_constants::DEFAULT_SETTLE_DELAY_MS,
            pointer_move_duration_ms: global_constants::DEFAULT_POINTER_MOVE_DURATION_MS,
            drag_duration_ms: global_constants::DEFAULT_DRAG_DURATION_MS,
            enable_input_fail_safe: false,
        }
    }
}

impl CaptureSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!(
                "{} No settings file found, using defaults",
                global_constants::LOG_TAG_SETTINGS
            );
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: CaptureSettings = serde_json::from_str(&contents)?;

        log::info!(
            "{} Loaded settings from {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} output folder: {}, crop: {}x{} at ({}, {}), batch: {}",
            global_constants::LOG_TAG_SETTINGS,
            settings.output_folder,
            settings.crop_width,
            settings.crop_height,
            settings.crop_x_offset,
            settings.crop_y_offset,
            settings.batch_size
        );

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!(
            "{} Saved settings to {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values_match_the_documented_run() {
        let settings = CaptureSettings::default();

        assert_eq!(settings.output_folder, "satellite_images");
        assert_eq!(settings.file_prefix, "satellite_crop_");
        assert_eq!(settings.crop_width, 650);
        assert_eq!(settings.crop_height, 650);
        assert_eq!(settings.crop_x_offset, 100);
        assert_eq!(settings.crop_y_offset, 200);
        assert_eq!(settings.batch_size, 50);
        assert_eq!(settings.drag_distance_pixels, 400);
        assert!(!settings.enable_input_fail_safe);
    }

    #[test]
    fn test_serialization_round_trip_preserves_every_field() {
        let settings = CaptureSettings {
            output_folder: "tiles".to_string(),
            file_prefix: "tile_".to_string(),
            crop_width: 512,
            crop_height: 256,
            crop_x_offset: 10,
            crop_y_offset: 20,
            batch_size: 7,
            drag_distance_pixels: 120,
            settle_delay_ms: 100,
            pointer_move_duration_ms: 200,
            drag_duration_ms: 300,
            enable_input_fail_safe: true,
        };

        let serialized = serde_json::to_string(&settings).unwrap();
        let deserialized: CaptureSettings = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.output_folder, settings.output_folder);
        assert_eq!(deserialized.file_prefix, settings.file_prefix);
        assert_eq!(deserialized.crop_width, settings.crop_width);
        assert_eq!(deserialized.crop_height, settings.crop_height);
        assert_eq!(deserialized.batch_size, settings.batch_size);
        assert_eq!(
            deserialized.enable_input_fail_safe,
            settings.enable_input_fail_safe
        );
    }

    #[test]
    fn test_deserialization_with_missing_fail_safe_flag_defaults_to_disabled() {
        let json = r#"{
            "output_folder": "satellite_images",
            "file_prefix": "satellite_crop_",
            "crop_width": 650,
            "crop_height": 650,
            "crop_x_offset": 100,
            "crop_y_offset": 200,
            "batch_size": 50,
            "drag_distance_pixels": 400,
            "settle_delay_ms": 2000,
            "pointer_move_duration_ms": 500,
            "drag_duration_ms": 1500
        }"#;

        let settings: CaptureSettings = serde_json::from_str(json).unwrap();

        assert!(!settings.enable_input_fail_safe);
    }
}
