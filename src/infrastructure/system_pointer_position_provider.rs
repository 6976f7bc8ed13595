use mouse_position::mouse_position::Mouse;

use crate::core::models::ScreenPoint;
use crate::core::ports::PointerPositionProvider;
use crate::global_constants::{LOG_TAG_INPUT, MESSAGE_POINTER_POSITION_FAILED};

pub struct SystemPointerPositionProvider;

impl SystemPointerPositionProvider {
    pub fn initialize() -> Self {
        log::debug!("{} initializing pointer position provider", LOG_TAG_INPUT);
        Self
    }

    fn query_system_pointer_position(&self) -> Mouse {
        Mouse::get_mouse_position()
    }

    fn convert_mouse_result_to_point(&self, mouse_result: Mouse) -> Result<ScreenPoint, String> {
        match mouse_result {
            Mouse::Position { x, y } => {
                log::debug!("{} current pointer position: ({}, {})", LOG_TAG_INPUT, x, y);
                Ok(ScreenPoint::at_coordinates(x, y))
            }
            Mouse::Error => {
                log::warn!("{} {}", LOG_TAG_INPUT, MESSAGE_POINTER_POSITION_FAILED);
                Err(MESSAGE_POINTER_POSITION_FAILED.to_string())
            }
        }
    }
}

impl PointerPositionProvider for SystemPointerPositionProvider {
    fn get_current_pointer_position(&self) -> Result<ScreenPoint, String> {
        let mouse_position_result = self.query_system_pointer_position();
        self.convert_mouse_result_to_point(mouse_position_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_result_converts_to_screen_point() {
        let provider = SystemPointerPositionProvider::initialize();

        let point = provider
            .convert_mouse_result_to_point(Mouse::Position { x: 33, y: 44 })
            .unwrap();

        assert_eq!(point, ScreenPoint::at_coordinates(33, 44));
    }

    #[test]
    fn test_error_result_converts_to_message() {
        let provider = SystemPointerPositionProvider::initialize();

        let conversion = provider.convert_mouse_result_to_point(Mouse::Error);

        assert_eq!(conversion, Err(MESSAGE_POINTER_POSITION_FAILED.to_string()));
    }
}
