use std::time::Duration;

use anyhow::Result;

use crate::core::models::ScreenPoint;

/// Drives the OS input facility: pointer relocation, drag gestures and the
/// capture trigger key.
pub trait InputInjector {
    fn move_pointer_smoothly(&mut self, destination: ScreenPoint, duration: Duration)
        -> Result<()>;

    fn drag_pointer_smoothly(
        &mut self,
        from: ScreenPoint,
        to: ScreenPoint,
        duration: Duration,
    ) -> Result<()>;

    fn tap_key(&mut self, key_character: char) -> Result<()>;
}
