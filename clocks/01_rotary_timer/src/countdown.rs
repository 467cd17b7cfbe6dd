//! Countdown state for the timer
//!
//! The dial engine cannot tell "just started" from "just finished" because both
//! sit at the top of the dial. This module is the single owner of elapsed time.

use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CountdownState {
    /// Waiting for the user to start
    #[default]
    Idle,
    Running { started: Instant, total_minutes: f64 },
    Finished,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Countdown {
    pub state: CountdownState,
}

impl Countdown {
    /// Start counting down; ignored for an empty duration
    pub fn start(&mut self, total_minutes: f64, now: Instant) -> bool {
        if total_minutes.is_nan() || total_minutes <= 0.0 {
            return false;
        }
        self.state = CountdownState::Running {
            started: now,
            total_minutes,
        };
        true
    }

    pub fn reset(&mut self) {
        self.state = CountdownState::Idle;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CountdownState::Running { .. })
    }

    /// Elapsed share in `[0, 1]`
    pub fn progress(&self, now: Instant) -> f64 {
        match self.state {
            CountdownState::Idle => 0.0,
            CountdownState::Running {
                started,
                total_minutes,
            } => (elapsed_minutes(started, now) / total_minutes).clamp(0.0, 1.0),
            CountdownState::Finished => 1.0,
        }
    }

    /// Minutes left, or `None` when not running
    pub fn remaining_minutes(&self, now: Instant) -> Option<f64> {
        match self.state {
            CountdownState::Running {
                started,
                total_minutes,
            } => Some((total_minutes - elapsed_minutes(started, now)).max(0.0)),
            _ => None,
        }
    }

    /// Advance to `Finished` once time is up; returns true on that transition
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_running() && self.progress(now) >= 1.0 {
            self.state = CountdownState::Finished;
            return true;
        }
        false
    }
}

fn elapsed_minutes(started: Instant, now: Instant) -> f64 {
    now.saturating_duration_since(started).as_secs_f64() / 60.0
}
