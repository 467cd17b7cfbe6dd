//! Angle/time converter - the bidirectional mapping between dial angle and minutes
//!
//! Angles are degrees measured clockwise from 12 o'clock. Time runs either way
//! around the dial depending on the configured [`Direction`].

use crate::input::{Coerced, DialInput};
use crate::scale::{self, ConfigurationError, DialConfig, ScaleMode, FULL_TURN};

/// Which way increasing time moves the handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    pub fn is_clockwise(self) -> bool {
        self == Direction::Clockwise
    }
}

/// Reduce any finite angle into `[0, 360)`
pub fn normalize_angle(angle: f64) -> f64 {
    ((angle % FULL_TURN) + FULL_TURN) % FULL_TURN
}

/// An immutable dial: a resolved scale plus a direction
///
/// Changing either is a reconfiguration; build a new `Dial`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dial {
    config: DialConfig,
    direction: Direction,
}

impl Dial {
    pub fn new(config: DialConfig, direction: Direction) -> Self {
        Self { config, direction }
    }

    pub fn with_scale(mode: ScaleMode, direction: Direction) -> Self {
        Self::new(scale::resolve(mode), direction)
    }

    /// Build a dial from its external configuration surface
    pub fn from_settings(scale_id: &str, clockwise: bool) -> Result<Self, ConfigurationError> {
        let config = scale::resolve_id(scale_id)?;
        Ok(Self::new(config, Direction::from_clockwise(clockwise)))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn max_minutes(&self) -> u32 {
        self.config.max_minutes()
    }

    /// Convert a dial angle to fractional minutes
    ///
    /// Malformed or non-finite readings yield `0`. Clockwise output lies in
    /// `[0, max)`, counter-clockwise output in `(0, max]`.
    pub fn angle_to_minutes<'a>(&self, input: impl Into<DialInput<'a>>) -> f64 {
        let angle = match input.into().coerce() {
            Coerced::Finite(angle) => angle,
            other => {
                log::trace!("angle reading {:?} coerced to 0 minutes", other);
                return 0.0;
            }
        };

        let minutes = normalize_angle(angle) / self.config.degrees_per_minute();
        match self.direction {
            Direction::Clockwise => minutes,
            Direction::CounterClockwise => f64::from(self.config.max_minutes()) - minutes,
        }
    }

    /// Convert minutes to a dial angle in `[0, 360]`
    ///
    /// Input is clamped to `[0, max]`. `+Infinity` maps to `360`; every other
    /// malformed reading maps to `0`.
    pub fn minutes_to_angle<'a>(&self, input: impl Into<DialInput<'a>>) -> f64 {
        let minutes = match input.into().coerce() {
            Coerced::Finite(minutes) => minutes,
            Coerced::PosInfinity => return FULL_TURN,
            other => {
                log::trace!("minutes reading {:?} coerced to angle 0", other);
                return 0.0;
            }
        };

        let max = f64::from(self.config.max_minutes());
        let clamped = minutes.clamp(0.0, max);
        match self.direction {
            Direction::Clockwise => clamped * self.config.degrees_per_minute(),
            Direction::CounterClockwise => (max - clamped) * self.config.degrees_per_minute(),
        }
    }
}

impl Default for Dial {
    fn default() -> Self {
        Self::with_scale(ScaleMode::default(), Direction::default())
    }
}
