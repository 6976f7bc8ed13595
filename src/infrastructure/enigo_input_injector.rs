use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use enigo::{Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};

use crate::core::models::ScreenPoint;
use crate::core::ports::InputInjector;
use crate::global_constants::{
    FAIL_SAFE_CORNER_MARGIN_PIXELS, LOG_TAG_INPUT, MESSAGE_FAIL_SAFE_DISABLED,
    POINTER_MINIMUM_STEPS, POINTER_STEP_INTERVAL_MS,
};

pub struct EnigoInputInjector {
    enigo: Enigo,
    fail_safe_enabled: bool,
}

impl EnigoInputInjector {
    /// The fail-safe interlock is decided here, at construction, rather than
    /// through any process-wide switch.
    pub fn initialize(fail_safe_enabled: bool) -> Result<Self> {
        log::debug!("{} initializing enigo input injector", LOG_TAG_INPUT);

        if !fail_safe_enabled {
            log::warn!("{} {}", LOG_TAG_INPUT, MESSAGE_FAIL_SAFE_DISABLED);
        }

        let enigo = Enigo::new(&Settings::default())
            .context("Unable to initialize the input injection backend")?;

        Ok(Self {
            enigo,
            fail_safe_enabled,
        })
    }

    fn guard_fail_safe(&self, destination: ScreenPoint) -> Result<()> {
        if self.fail_safe_enabled && destination_hits_fail_safe_corner(destination) {
            anyhow::bail!(
                "fail-safe triggered: refusing to drive the pointer into the screen corner at {}",
                destination
            );
        }

        Ok(())
    }

    fn step_pointer_through(&mut self, steps: &[ScreenPoint]) -> Result<()> {
        for step in steps {
            self.enigo
                .move_mouse(step.x_position, step.y_position, Coordinate::Abs)
                .context("pointer move failed")?;
            thread::sleep(Duration::from_millis(POINTER_STEP_INTERVAL_MS));
        }

        Ok(())
    }
}

impl InputInjector for EnigoInputInjector {
    fn move_pointer_smoothly(
        &mut self,
        destination: ScreenPoint,
        duration: Duration,
    ) -> Result<()> {
        self.guard_fail_safe(destination)?;

        let (current_x, current_y) = self
            .enigo
            .location()
            .context("unable to read pointer location")?;
        let current_position = ScreenPoint::at_coordinates(current_x, current_y);

        log::debug!(
            "{} moving pointer {} -> {} over {:?}",
            LOG_TAG_INPUT,
            current_position,
            destination,
            duration
        );

        let steps = generate_linear_steps(current_position, destination, duration);
        self.step_pointer_through(&steps)
    }

    fn drag_pointer_smoothly(
        &mut self,
        from: ScreenPoint,
        to: ScreenPoint,
        duration: Duration,
    ) -> Result<()> {
        self.guard_fail_safe(to)?;

        log::debug!(
            "{} dragging pointer {} -> {} over {:?}",
            LOG_TAG_INPUT,
            from,
            to,
            duration
        );

        self.enigo
            .move_mouse(from.x_position, from.y_position, Coordinate::Abs)
            .context("pointer move failed")?;
        self.enigo
            .button(Button::Left, Direction::Press)
            .context("button press failed")?;

        let movement_result = self.step_pointer_through(&generate_linear_steps(from, to, duration));

        // Release the button even when the movement failed partway.
        let release_result = self
            .enigo
            .button(Button::Left, Direction::Release)
            .context("button release failed");

        movement_result?;
        release_result
    }

    fn tap_key(&mut self, key_character: char) -> Result<()> {
        log::debug!("{} tapping key '{}'", LOG_TAG_INPUT, key_character);

        self.enigo
            .key(Key::Unicode(key_character), Direction::Click)
            .context("key tap failed")
    }
}

/// Absolute pointer positions emitted at ~125 Hz from `from` (exclusive) to
/// `to` (inclusive), never fewer than `POINTER_MINIMUM_STEPS` of them.
fn generate_linear_steps(from: ScreenPoint, to: ScreenPoint, duration: Duration) -> Vec<ScreenPoint> {
    let step_count = ((duration.as_millis() as u64 / POINTER_STEP_INTERVAL_MS) as usize)
        .max(POINTER_MINIMUM_STEPS);

    let delta_x = (to.x_position - from.x_position) as f64;
    let delta_y = (to.y_position - from.y_position) as f64;

    (1..=step_count)
        .map(|step| {
            let progress = step as f64 / step_count as f64;

            ScreenPoint::at_coordinates(
                from.x_position + (delta_x * progress).round() as i32,
                from.y_position + (delta_y * progress).round() as i32,
            )
        })
        .collect()
}

fn destination_hits_fail_safe_corner(destination: ScreenPoint) -> bool {
    destination.x_position <= FAIL_SAFE_CORNER_MARGIN_PIXELS
        && destination.y_position <= FAIL_SAFE_CORNER_MARGIN_PIXELS
}
