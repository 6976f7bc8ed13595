mod capture_frame;
mod movement_border;
mod pan_direction;
mod screen_point;

pub use capture_frame::CaptureFrame;
pub use movement_border::MovementBorder;
pub use pan_direction::PanDirection;
pub use screen_point::ScreenPoint;
