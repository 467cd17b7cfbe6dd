//! Scale registry - maps a scale identifier to its dial configuration
//!
//! A scale is the number of minutes represented by one full revolution of the dial.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Degrees in one full revolution
pub const FULL_TURN: f64 = 360.0;

/// Error raised when a dial is configured with an unusable scale
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The identifier is not one of the registered scales
    #[error("unsupported scale mode: {0:?}")]
    UnsupportedScale(String),
    /// A custom dial must span at least one minute
    #[error("dial must span at least one minute")]
    ZeroMinutes,
}

/// Supported full-circle scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScaleMode {
    #[serde(rename = "1min")]
    OneMinute,
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "10min")]
    TenMinutes,
    #[serde(rename = "25min")]
    TwentyFiveMinutes,
    #[serde(rename = "45min")]
    FortyFiveMinutes,
    #[default]
    #[serde(rename = "60min")]
    SixtyMinutes,
}

impl ScaleMode {
    /// All registered scales, shortest first
    pub const ALL: [ScaleMode; 6] = [
        ScaleMode::OneMinute,
        ScaleMode::FiveMinutes,
        ScaleMode::TenMinutes,
        ScaleMode::TwentyFiveMinutes,
        ScaleMode::FortyFiveMinutes,
        ScaleMode::SixtyMinutes,
    ];

    /// Minutes covered by one revolution
    pub const fn max_minutes(self) -> u32 {
        match self {
            ScaleMode::OneMinute => 1,
            ScaleMode::FiveMinutes => 5,
            ScaleMode::TenMinutes => 10,
            ScaleMode::TwentyFiveMinutes => 25,
            ScaleMode::FortyFiveMinutes => 45,
            ScaleMode::SixtyMinutes => 60,
        }
    }

    /// The string identifier used in settings files
    pub const fn id(self) -> &'static str {
        match self {
            ScaleMode::OneMinute => "1min",
            ScaleMode::FiveMinutes => "5min",
            ScaleMode::TenMinutes => "10min",
            ScaleMode::TwentyFiveMinutes => "25min",
            ScaleMode::FortyFiveMinutes => "45min",
            ScaleMode::SixtyMinutes => "60min",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ScaleMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleMode::ALL
            .into_iter()
            .find(|mode| mode.id() == s)
            .ok_or_else(|| ConfigurationError::UnsupportedScale(s.to_string()))
    }
}

/// Resolved dial configuration
///
/// `degrees_per_minute` is always derived from `max_minutes`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialConfig {
    max_minutes: u32,
    degrees_per_minute: f64,
}

impl DialConfig {
    /// Build a configuration for an arbitrary positive duration
    pub fn with_max_minutes(max_minutes: u32) -> Result<Self, ConfigurationError> {
        if max_minutes == 0 {
            return Err(ConfigurationError::ZeroMinutes);
        }
        Ok(Self {
            max_minutes,
            degrees_per_minute: FULL_TURN / f64::from(max_minutes),
        })
    }

    pub fn max_minutes(&self) -> u32 {
        self.max_minutes
    }

    pub fn degrees_per_minute(&self) -> f64 {
        self.degrees_per_minute
    }
}

impl From<ScaleMode> for DialConfig {
    fn from(mode: ScaleMode) -> Self {
        resolve(mode)
    }
}

/// Look up the configuration for a registered scale
pub fn resolve(mode: ScaleMode) -> DialConfig {
    let max_minutes = mode.max_minutes();
    DialConfig {
        max_minutes,
        degrees_per_minute: FULL_TURN / f64::from(max_minutes),
    }
}

/// Resolve a scale identifier such as `"25min"`
pub fn resolve_id(id: &str) -> Result<DialConfig, ConfigurationError> {
    let mode: ScaleMode = id.parse()?;
    log::debug!("resolved scale {} to {} minutes", mode, mode.max_minutes());
    Ok(resolve(mode))
}
