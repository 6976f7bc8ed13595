use anyhow::{Context, Result};

use crate::core::models::CaptureFrame;
use crate::core::ports::ScreenCapturer;
use crate::global_constants::{
    ERROR_CONTEXT_CAPTURE_MONITOR, ERROR_CONTEXT_MONITOR_ENUMERATION,
    ERROR_CONTEXT_SCREEN_DIMENSIONS, LOG_TAG_CAPTURE,
};

pub struct XcapScreenCapturer;

impl XcapScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing xcap screen capturer", LOG_TAG_CAPTURE);
        Self
    }

    /// The monitor at the desktop origin, falling back to the first one the
    /// backend enumerates.
    fn find_primary_monitor(&self) -> Result<xcap::Monitor> {
        let mut monitors = xcap::Monitor::all().context(ERROR_CONTEXT_MONITOR_ENUMERATION)?;

        let origin_index = monitors
            .iter()
            .position(|monitor| monitor.x().unwrap_or(0) == 0 && monitor.y().unwrap_or(0) == 0);

        match origin_index {
            Some(index) => Ok(monitors.swap_remove(index)),
            None => {
                if monitors.is_empty() {
                    anyhow::bail!("no monitors detected");
                }
                Ok(monitors.swap_remove(0))
            }
        }
    }

    fn capture_monitor_image(&self, monitor: &xcap::Monitor) -> Result<xcap::image::RgbaImage> {
        monitor
            .capture_image()
            .context(ERROR_CONTEXT_CAPTURE_MONITOR)
    }

    fn convert_image_to_capture_frame(&self, image: xcap::image::RgbaImage) -> CaptureFrame {
        let width_pixels = image.width();
        let height_pixels = image.height();
        let raw_rgba_data = image.into_raw();

        log::info!(
            "{} captured {}x{} screenshot",
            LOG_TAG_CAPTURE,
            width_pixels,
            height_pixels
        );

        CaptureFrame::build_from_raw_data(width_pixels, height_pixels, raw_rgba_data)
    }
}

impl ScreenCapturer for XcapScreenCapturer {
    fn detect_screen_dimensions(&self) -> Result<(u32, u32)> {
        let primary_monitor = self.find_primary_monitor()?;

        let screen_width = primary_monitor
            .width()
            .context(ERROR_CONTEXT_SCREEN_DIMENSIONS)?;
        let screen_height = primary_monitor
            .height()
            .context(ERROR_CONTEXT_SCREEN_DIMENSIONS)?;

        log::debug!(
            "{} detected screen dimensions: {}x{}",
            LOG_TAG_CAPTURE,
            screen_width,
            screen_height
        );

        Ok((screen_width, screen_height))
    }

    fn capture_full_screen(&self) -> Result<CaptureFrame> {
        let primary_monitor = self.find_primary_monitor()?;
        let captured_image = self.capture_monitor_image(&primary_monitor)?;

        Ok(self.convert_image_to_capture_frame(captured_image))
    }
}
