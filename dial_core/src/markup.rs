//! Dial markup - graduation marks and number labels for the dial face

use crate::converter::Dial;
use crate::geometry::polar_to_cartesian;

/// Minutes between labelled (major) positions
pub const LABEL_INTERVAL: u32 = 5;
/// Major mark length as a share of the outer radius
pub const MAJOR_MARK_LENGTH: f64 = 0.15;
/// Minor mark length as a share of the outer radius
pub const MINOR_MARK_LENGTH: f64 = 0.08;

/// One tick line on the dial face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraduationMark {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub is_major: bool,
}

/// A minute label and its anchor position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberLabel {
    pub value: u32,
    pub x: f64,
    pub y: f64,
}

impl Dial {
    /// Labels every five minutes, skipping the value that coincides with 0
    pub fn number_positions(&self, radius: f64, center_x: f64, center_y: f64) -> Vec<NumberLabel> {
        (0..self.max_minutes() / LABEL_INTERVAL)
            .map(|i| {
                let value = i * LABEL_INTERVAL;
                let p = polar_to_cartesian(center_x, center_y, radius, self.minutes_to_angle(value));
                NumberLabel { value, x: p.x, y: p.y }
            })
            .collect()
    }

    /// One mark per whole minute, running inward from `radius`
    pub fn graduation_marks(&self, radius: f64, center_x: f64, center_y: f64) -> Vec<GraduationMark> {
        (0..self.max_minutes())
            .map(|minute| {
                let angle = self.minutes_to_angle(minute);
                let is_major = minute % LABEL_INTERVAL == 0;
                let length = if is_major { MAJOR_MARK_LENGTH } else { MINOR_MARK_LENGTH };
                let inner = polar_to_cartesian(center_x, center_y, radius * (1.0 - length), angle);
                let outer = polar_to_cartesian(center_x, center_y, radius, angle);
                GraduationMark {
                    x1: inner.x,
                    y1: inner.y,
                    x2: outer.x,
                    y2: outer.y,
                    is_major,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::Direction;
    use crate::scale::ScaleMode;

    #[test]
    fn test_twenty_five_minute_counts() {
        let dial = Dial::with_scale(ScaleMode::TwentyFiveMinutes, Direction::Clockwise);
        let labels = dial.number_positions(80.0, 100.0, 100.0);
        let values: Vec<u32> = labels.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![0, 5, 10, 15, 20]);

        let marks = dial.graduation_marks(90.0, 100.0, 100.0);
        assert_eq!(marks.len(), 25);
        assert_eq!(marks.iter().filter(|m| m.is_major).count(), 5);
    }

    #[test]
    fn test_counts_across_scales() {
        for mode in ScaleMode::ALL {
            let dial = Dial::with_scale(mode, Direction::Clockwise);
            let max = mode.max_minutes();
            assert_eq!(dial.number_positions(50.0, 0.0, 0.0).len() as u32, max / 5);
            assert_eq!(dial.graduation_marks(50.0, 0.0, 0.0).len() as u32, max);
        }
    }

    #[test]
    fn test_label_positions_follow_direction() {
        let cw = Dial::with_scale(ScaleMode::SixtyMinutes, Direction::Clockwise);
        let ccw = Dial::with_scale(ScaleMode::SixtyMinutes, Direction::CounterClockwise);

        let fifteen_cw = cw.number_positions(50.0, 100.0, 100.0)[3];
        assert_eq!(fifteen_cw.value, 15);
        assert!((fifteen_cw.x - 150.0).abs() < 1e-9);
        assert!((fifteen_cw.y - 100.0).abs() < 1e-9);

        let fifteen_ccw = ccw.number_positions(50.0, 100.0, 100.0)[3];
        assert!((fifteen_ccw.x - 50.0).abs() < 1e-9);
        assert!((fifteen_ccw.y - 100.0).abs() < 1e-9);

        let zero = ccw.number_positions(50.0, 100.0, 100.0)[0];
        assert!((zero.x - 100.0).abs() < 1e-9);
        assert!((zero.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_mark_geometry() {
        let dial = Dial::with_scale(ScaleMode::SixtyMinutes, Direction::Clockwise);
        let marks = dial.graduation_marks(100.0, 0.0, 0.0);

        let top = marks[0];
        assert!(top.is_major);
        assert!((top.y1 + 85.0).abs() < 1e-9);
        assert!((top.y2 + 100.0).abs() < 1e-9);

        let minor = marks[1];
        assert!(!minor.is_major);
        let inner = minor.x1.hypot(minor.y1);
        let outer = minor.x2.hypot(minor.y2);
        assert!((inner - 92.0).abs() < 1e-9);
        assert!((outer - 100.0).abs() < 1e-9);
    }
}
