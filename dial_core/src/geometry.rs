//! Geometry primitives shared by the dial generators
//!
//! Coordinates are in screen space: x grows to the right, y grows downward.
//! Angles are degrees measured clockwise from 12 o'clock.

/// A point in the rendering layer's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Position on a circle for an angle measured clockwise from the top
pub fn polar_to_cartesian(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(center_x + radius * rad.sin(), center_y - radius * rad.cos())
}
