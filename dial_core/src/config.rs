//! Settings persistence
//!
//! Loads and saves dial settings as TOML under the platform config directory.

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::converter::{Dial, Direction};
use crate::scale::ScaleMode;

/// Error type for settings persistence
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The persisted configuration surface of a dial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialSettings {
    pub scale_mode: ScaleMode,
    pub clockwise: bool,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self {
            scale_mode: ScaleMode::SixtyMinutes,
            clockwise: true,
        }
    }
}

impl DialSettings {
    pub fn direction(&self) -> Direction {
        Direction::from_clockwise(self.clockwise)
    }

    pub fn dial(&self) -> Dial {
        Dial::with_scale(self.scale_mode, self.direction())
    }
}

/// Base configuration directory for dial apps
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "rotary-dial", "dials").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Settings file path for a named app
pub fn config_path(app_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", app_name)))
}

/// Load settings for a named app
///
/// Returns `None` if the file doesn't exist yet.
pub fn load_config<T: DeserializeOwned>(app_name: &str) -> Result<Option<T>, ConfigError> {
    let path = config_path(app_name).ok_or(ConfigError::NoConfigDir)?;
    load_from(&path)
}

/// Save settings for a named app
pub fn save_config<T: Serialize>(app_name: &str, config: &T) -> Result<(), ConfigError> {
    let path = config_path(app_name).ok_or(ConfigError::NoConfigDir)?;
    save_to(&path, config)
}

/// Delete settings for a named app
pub fn delete_config(app_name: &str) -> Result<(), ConfigError> {
    let path = config_path(app_name).ok_or(ConfigError::NoConfigDir)?;
    delete_at(&path)
}

/// Load settings from a file, `None` if it doesn't exist
pub fn load_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    if !path.exists() {
        log::debug!("no settings at {}", path.display());
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let config: T = toml::from_str(&contents)?;
    log::debug!("loaded settings from {}", path.display());
    Ok(Some(config))
}

/// Save settings to a file, creating its parent directory
pub fn save_to<T: Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

/// Delete a settings file; a missing file is not an error
pub fn delete_at(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path() {
        if let Some(path) = config_path("rotary_timer") {
            assert!(path.to_string_lossy().ends_with("rotary_timer.toml"));
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dial_core_{}_{}", name, std::process::id()))
    }

    #[test]
    fn test_save_load_delete_round_trip() {
        let dir = scratch_dir("round_trip");
        let path = dir.join("nested").join("timer.toml");
        let settings = DialSettings {
            scale_mode: ScaleMode::FortyFiveMinutes,
            clockwise: false,
        };

        assert_eq!(load_from::<DialSettings>(&path).unwrap(), None);
        save_to(&path, &settings).unwrap();
        assert!(path.exists());
        assert_eq!(load_from::<DialSettings>(&path).unwrap(), Some(settings));

        delete_at(&path).unwrap();
        assert_eq!(load_from::<DialSettings>(&path).unwrap(), None);
        // Deleting again is a no-op.
        delete_at(&path).unwrap();

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = scratch_dir("parse_error");
        let path = dir.join("timer.toml");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "scale_mode = 60").unwrap();

        let result = load_from::<DialSettings>(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_settings_toml() {
        let settings = DialSettings {
            scale_mode: ScaleMode::TwentyFiveMinutes,
            clockwise: false,
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        assert!(text.contains("scale_mode = \"25min\""));
        assert!(text.contains("clockwise = false"));

        let parsed: DialSettings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
        assert_eq!(parsed.dial().max_minutes(), 25);
        assert_eq!(parsed.dial().direction(), Direction::CounterClockwise);
    }

    #[test]
    fn test_settings_defaults_fill_missing_keys() {
        let parsed: DialSettings = toml::from_str("clockwise = false").unwrap();
        assert_eq!(parsed.scale_mode, ScaleMode::SixtyMinutes);
        assert!(!parsed.clockwise);
    }

    #[test]
    fn test_settings_reject_unknown_scale() {
        let result: Result<DialSettings, _> = toml::from_str("scale_mode = \"30min\"");
        assert!(result.is_err());
    }
}
