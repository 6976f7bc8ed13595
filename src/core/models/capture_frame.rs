use std::path::Path;

use anyhow::{Context, Result};

use crate::global_constants::LOG_TAG_FRAME;

/// Raw RGBA pixels of a full-screen (or cropped) capture.
#[derive(Clone)]
pub struct CaptureFrame {
    pub width: u32,
    pub height: u32,
    raw_rgba_data: Vec<u8>,
}

impl std::fmt::Debug for CaptureFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl CaptureFrame {
    pub fn build_from_raw_data(width_pixels: u32, height_pixels: u32, raw_rgba_data: Vec<u8>) -> Self {
        log::debug!(
            "{} building frame: {}x{}",
            LOG_TAG_FRAME,
            width_pixels,
            height_pixels
        );

        Self {
            width: width_pixels,
            height: height_pixels,
            raw_rgba_data,
        }
    }

    /// Fixed-size sub-rectangle starting at (x, y). The requested rectangle is
    /// clamped to the frame; zero-sized requests are rejected.
    pub fn crop_region(&self, x: u32, y: u32, crop_width: u32, crop_height: u32) -> Result<Self> {
        if crop_width == 0 || crop_height == 0 {
            anyhow::bail!("Crop dimensions must be greater than zero");
        }

        let x = x.min(self.width.saturating_sub(1));
        let y = y.min(self.height.saturating_sub(1));
        let crop_width = crop_width.min(self.width - x);
        let crop_height = crop_height.min(self.height - y);

        log::debug!(
            "{} cropping {}x{} at ({}, {}) from {}x{}",
            LOG_TAG_FRAME,
            crop_width,
            crop_height,
            x,
            y,
            self.width,
            self.height
        );

        let mut cropped_data = Vec::with_capacity((crop_width * crop_height * 4) as usize);

        for row in y..(y + crop_height) {
            let row_start = (row * self.width * 4 + x * 4) as usize;
            let row_end = row_start + (crop_width * 4) as usize;

            if row_end > self.raw_rgba_data.len() {
                anyhow::bail!("Crop region exceeds frame bounds");
            }

            cropped_data.extend_from_slice(&self.raw_rgba_data[row_start..row_end]);
        }

        Ok(Self::build_from_raw_data(crop_width, crop_height, cropped_data))
    }

    pub fn save_as_png(&self, path: &Path) -> Result<()> {
        let image_buffer =
            image::RgbaImage::from_raw(self.width, self.height, self.raw_rgba_data.clone())
                .context("Frame byte count does not match its dimensions")?;

        image_buffer
            .save(path)
            .with_context(|| format!("failed to write image to {:?}", path))
    }
}
