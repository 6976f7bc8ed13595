use anyhow::Result;

use crate::core::models::CaptureFrame;

pub trait ScreenCapturer: Send + Sync {
    fn detect_screen_dimensions(&self) -> Result<(u32, u32)>;
    fn capture_full_screen(&self) -> Result<CaptureFrame>;
}
