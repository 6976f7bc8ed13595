use rand::Rng;

use crate::core::models::{PanDirection, ScreenPoint};
use crate::global_constants::{BORDER_SCREEN_FRACTION, LOG_TAG_BORDER};

/// Centered rectangle covering a fixed fraction of the screen. Both random
/// cursor placement and drag destinations are confined to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementBorder {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
    pub width: i32,
    pub height: i32,
}

impl MovementBorder {
    pub fn from_screen_dimensions(screen_width: u32, screen_height: u32) -> Self {
        let border_width = (screen_width as f64 * BORDER_SCREEN_FRACTION) as i32;
        let border_height = (screen_height as f64 * BORDER_SCREEN_FRACTION) as i32;

        let start_x = (screen_width as i32 - border_width) / 2;
        let start_y = (screen_height as i32 - border_height) / 2;

        let border = Self {
            start_x,
            start_y,
            end_x: start_x + border_width,
            end_y: start_y + border_height,
            width: border_width,
            height: border_height,
        };

        log::info!(
            "{} movement border start: ({}, {}) end: ({}, {}) size: {}x{}",
            LOG_TAG_BORDER,
            border.start_x,
            border.start_y,
            border.end_x,
            border.end_y,
            border.width,
            border.height
        );

        border
    }

    /// Uniform integer sample inside the border, boundaries included.
    pub fn random_point_within<R: Rng>(&self, rng: &mut R) -> ScreenPoint {
        let random_x = rng.gen_range(self.start_x..=self.end_x);
        let random_y = rng.gen_range(self.start_y..=self.end_y);

        ScreenPoint::at_coordinates(random_x, random_y)
    }

    /// Destination of a drag of `distance` pixels in `direction`, clamped to
    /// the border on the relevant axis only.
    pub fn clamp_drag_destination(
        &self,
        from: ScreenPoint,
        direction: PanDirection,
        distance: u32,
    ) -> ScreenPoint {
        let distance = distance as i32;
        let mut destination = from;

        match direction {
            PanDirection::Right => {
                destination.x_position = (from.x_position + distance).min(self.end_x);
            }
            PanDirection::Left => {
                destination.x_position = (from.x_position - distance).max(self.start_x);
            }
            PanDirection::Up => {
                destination.y_position = (from.y_position - distance).max(self.start_y);
            }
            PanDirection::Down => {
                destination.y_position = (from.y_position + distance).min(self.end_y);
            }
        }

        destination
    }
}
