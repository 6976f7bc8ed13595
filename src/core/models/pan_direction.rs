use std::fmt;

use rand::Rng;

use crate::global_constants::LOG_TAG_BORDER;

/// Direction the view is panned between captures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    Right,
    Left,
    Up,
    Down,
}

const ALL_DIRECTIONS: [PanDirection; 4] = [
    PanDirection::Right,
    PanDirection::Left,
    PanDirection::Up,
    PanDirection::Down,
];

impl PanDirection {
    pub fn opposite(&self) -> PanDirection {
        match self {
            PanDirection::Right => PanDirection::Left,
            PanDirection::Left => PanDirection::Right,
            PanDirection::Up => PanDirection::Down,
            PanDirection::Down => PanDirection::Up,
        }
    }

    /// Picks the next pan direction uniformly at random, resampling while the
    /// candidate would exactly reverse the previous pan. The first pick of a
    /// run (`previous == None`) is unrestricted.
    pub fn choose_next<R: Rng>(rng: &mut R, previous: Option<PanDirection>) -> PanDirection {
        loop {
            let candidate = ALL_DIRECTIONS[rng.gen_range(0..ALL_DIRECTIONS.len())];

            let reverses_previous_pan =
                previous.is_some_and(|previous_direction| candidate == previous_direction.opposite());

            if !reverses_previous_pan {
                log::debug!("{} next pan direction: {}", LOG_TAG_BORDER, candidate);
                return candidate;
            }
        }
    }
}

impl fmt::Display for PanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanDirection::Right => write!(f, "right"),
            PanDirection::Left => write!(f, "left"),
            PanDirection::Up => write!(f, "up"),
            PanDirection::Down => write!(f, "down"),
        }
    }
}
