//! Progress arc builder - the wedge showing the elapsed share of the dial
//!
//! The wedge always sweeps clockwise from 12 o'clock, independent of the
//! direction in which time runs on the dial.

use std::fmt;

use crate::geometry::{polar_to_cartesian, Point};
use crate::scale::FULL_TURN;

/// One command of a vector path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc from the current point to `to`
    Arc {
        radius: f64,
        large_arc: bool,
        /// `true` sweeps clockwise in y-down space
        sweep: bool,
        to: Point,
    },
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
            PathCommand::Arc {
                radius,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "A {r} {r} 0 {} {} {} {}",
                u8::from(*large_arc),
                u8::from(*sweep),
                to.x,
                to.y,
                r = radius
            ),
            PathCommand::Close => f.write_str("Z"),
        }
    }
}

/// A vector path description; displays as SVG path data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressPath {
    commands: Vec<PathCommand>,
}

impl ProgressPath {
    /// The path with nothing to draw
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for ProgressPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Build the wedge path for a completion fraction
///
/// Returns an empty path for `0` and `None` for `1`: a full turn cannot be
/// expressed as a single arc, so the caller draws a closed circle instead.
pub fn progress_path(
    progress: f64,
    center_x: f64,
    center_y: f64,
    radius: f64,
) -> Option<ProgressPath> {
    let progress = clamp_progress(progress);
    if progress == 0.0 {
        return Some(ProgressPath::empty());
    }
    if progress == 1.0 {
        return None;
    }

    let end_angle = progress * FULL_TURN;
    let top = polar_to_cartesian(center_x, center_y, radius, 0.0);
    let end = polar_to_cartesian(center_x, center_y, radius, end_angle);

    Some(ProgressPath {
        commands: vec![
            PathCommand::MoveTo(Point::new(center_x, center_y)),
            PathCommand::LineTo(top),
            PathCommand::Arc {
                radius,
                large_arc: end_angle > FULL_TURN / 2.0,
                sweep: true,
                to: end,
            },
            PathCommand::Close,
        ],
    })
}

/// Sample the wedge as a polygon outline for hosts without an arc primitive
///
/// A partial wedge starts at the center, then follows the arc from the top.
/// A full turn yields points on the circle only.
pub fn wedge_outline(
    progress: f64,
    center_x: f64,
    center_y: f64,
    radius: f64,
    segments: usize,
) -> Vec<Point> {
    let progress = clamp_progress(progress);
    if progress == 0.0 {
        return Vec::new();
    }

    let segments = segments.max(1);
    let sweep = progress * FULL_TURN;
    let arc = (0..=segments).map(|i| {
        let angle = sweep * i as f64 / segments as f64;
        polar_to_cartesian(center_x, center_y, radius, angle)
    });

    if progress == 1.0 {
        return arc.collect();
    }

    let mut points = Vec::with_capacity(segments + 2);
    points.push(Point::new(center_x, center_y));
    points.extend(arc);
    points
}
