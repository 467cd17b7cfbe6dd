//! Rotary dial geometry engine
//!
//! Pure conversions between dial angles and minutes, plus the geometry for the
//! progress wedge, graduation marks and number labels of a countdown dial.
//! Nothing here holds state; rebuild the [`Dial`] when scale or direction change.

pub mod arc;
pub mod config;
pub mod converter;
pub mod geometry;
pub mod input;
pub mod markup;
pub mod pointer;
pub mod readout;
pub mod scale;

pub use arc::{progress_path, wedge_outline, PathCommand, ProgressPath};
pub use config::{delete_config, load_config, save_config, ConfigError, DialSettings};
pub use converter::{normalize_angle, Dial, Direction};
pub use geometry::{polar_to_cartesian, Point};
pub use input::DialInput;
pub use markup::{GraduationMark, NumberLabel};
pub use pointer::bearing;
pub use readout::{format_readout, minutes_to_duration};
pub use scale::{resolve, resolve_id, ConfigurationError, DialConfig, ScaleMode};
