//! Pointer geometry - maps a screen coordinate on the dial to a time value

use crate::converter::{normalize_angle, Dial};

/// Bearing of a point around a center, clockwise from straight up
///
/// Returns `None` when the bearing is undefined: the point sits on the center
/// or a coordinate is not finite.
pub fn bearing(point_x: f64, point_y: f64, center_x: f64, center_y: f64) -> Option<f64> {
    let dx = point_x - center_x;
    let dy = point_y - center_y;
    if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
        return None;
    }
    // Screen y grows downward, so "up" is -dy.
    Some(normalize_angle(dx.atan2(-dy).to_degrees()))
}

impl Dial {
    /// Time value under a pointer, honoring the dial's direction
    ///
    /// A pointer exactly on the center yields `0`.
    pub fn coordinates_to_minutes(
        &self,
        point_x: f64,
        point_y: f64,
        center_x: f64,
        center_y: f64,
    ) -> f64 {
        match bearing(point_x, point_y, center_x, center_y) {
            Some(angle) => self.angle_to_minutes(angle),
            None => {
                log::trace!("pointer at ({}, {}) has no bearing", point_x, point_y);
                0.0
            }
        }
    }

    /// Round a dragged value to the nearest multiple of `step`, kept on the dial
    pub fn snap_minutes(&self, minutes: f64, step: f64) -> f64 {
        let max = f64::from(self.max_minutes());
        if !minutes.is_finite() {
            return 0.0;
        }
        let snapped = if step > 0.0 && step.is_finite() {
            (minutes / step).round() * step
        } else {
            minutes
        };
        snapped.clamp(0.0, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::Direction;
    use crate::scale::ScaleMode;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }

    #[test]
    fn test_bearing_quadrants() {
        assert_eq!(bearing(0.0, -10.0, 0.0, 0.0), Some(0.0));
        assert_close(bearing(10.0, 0.0, 0.0, 0.0).unwrap(), 90.0);
        assert_close(bearing(0.0, 10.0, 0.0, 0.0).unwrap(), 180.0);
        assert_close(bearing(-10.0, 0.0, 0.0, 0.0).unwrap(), 270.0);
        assert_eq!(bearing(5.0, 5.0, 5.0, 5.0), None);
        assert_eq!(bearing(f64::NAN, 0.0, 0.0, 0.0), None);
    }

    #[test]
    fn test_coordinates_clockwise() {
        let dial = Dial::with_scale(ScaleMode::SixtyMinutes, Direction::Clockwise);
        assert_close(dial.coordinates_to_minutes(150.0, 100.0, 100.0, 100.0), 15.0);
        assert_close(dial.coordinates_to_minutes(100.0, 150.0, 100.0, 100.0), 30.0);
        assert_close(dial.coordinates_to_minutes(50.0, 100.0, 100.0, 100.0), 45.0);
    }

    #[test]
    fn test_coordinates_counter_clockwise() {
        let dial = Dial::with_scale(ScaleMode::SixtyMinutes, Direction::CounterClockwise);
        // Bearing is still measured clockwise; only the time mapping flips.
        assert_close(dial.coordinates_to_minutes(150.0, 100.0, 100.0, 100.0), 45.0);
        assert_close(dial.coordinates_to_minutes(50.0, 100.0, 100.0, 100.0), 15.0);
    }

    #[test]
    fn test_center_is_stable() {
        for direction in [Direction::Clockwise, Direction::CounterClockwise] {
            let dial = Dial::with_scale(ScaleMode::TenMinutes, direction);
            assert_eq!(dial.coordinates_to_minutes(100.0, 100.0, 100.0, 100.0), 0.0);
        }
    }

    #[test]
    fn test_snap_minutes() {
        let dial = Dial::with_scale(ScaleMode::TwentyFiveMinutes, Direction::Clockwise);
        assert_eq!(dial.snap_minutes(7.4, 1.0), 7.0);
        assert_eq!(dial.snap_minutes(24.8, 1.0), 25.0);
        assert_eq!(dial.snap_minutes(26.0, 5.0), 25.0);
        assert_eq!(dial.snap_minutes(-2.0, 1.0), 0.0);
        assert_eq!(dial.snap_minutes(3.3, 0.0), 3.3);
        assert_eq!(dial.snap_minutes(f64::NAN, 1.0), 0.0);
    }
}
