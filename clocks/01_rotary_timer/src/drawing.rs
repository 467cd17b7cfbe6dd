//! Drawing module - dial face, progress wedge and handle rendering
//!
//! The dial engine works in y-down screen space; nannou is y-up with the
//! origin at the window center. `to_engine` and `to_nannou` convert between them.

use dial_core::{wedge_outline, Dial, Point};
use nannou::prelude::*;

/// Color palette for the rotary timer
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 24,
        green: 24,
        blue: 28,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 240,
        green: 240,
        blue: 240,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_SECONDARY: Srgb<u8> = Srgb {
        red: 160,
        green: 160,
        blue: 160,
        standard: std::marker::PhantomData,
    };
    pub const WEDGE: Srgb<u8> = Srgb {
        red: 232,
        green: 64,
        blue: 56,
        standard: std::marker::PhantomData,
    };
    pub const HANDLE: Srgb<u8> = Srgb {
        red: 250,
        green: 250,
        blue: 250,
        standard: std::marker::PhantomData,
    };
    pub const TICK_NORMAL: Srgb<u8> = Srgb {
        red: 90,
        green: 90,
        blue: 90,
        standard: std::marker::PhantomData,
    };
    pub const TICK_MAJOR: Srgb<u8> = Srgb {
        red: 150,
        green: 150,
        blue: 150,
        standard: std::marker::PhantomData,
    };
}

/// Segments used to sample the wedge outline
const WEDGE_SEGMENTS: usize = 180;

/// Convert a nannou point to engine screen space
pub fn to_engine(p: Point2) -> (f64, f64) {
    (<f64 as From<_>>::from(p.x), -<f64 as From<_>>::from(p.y))
}

/// Convert an engine point back to nannou space
pub fn to_nannou(p: Point) -> Point2 {
    pt2(p.x as f32, -p.y as f32)
}

/// Dial geometry for the current window
#[derive(Debug, Clone, Copy)]
pub struct DialLayout {
    pub center: Point2,
    pub radius: f32,
}

impl DialLayout {
    pub fn calculate(window_rect: Rect) -> Self {
        let radius = window_rect.w().min(window_rect.h()) * 0.36;
        DialLayout {
            center: window_rect.xy() + vec2(0.0, 20.0),
            radius,
        }
    }

    /// Whether a pointer is close enough to the face to grab the handle
    pub fn contains(&self, p: Point2) -> bool {
        p.distance(self.center) <= self.radius * 1.15
    }
}

/// Draw graduation marks and minute labels
pub fn draw_face(draw: &Draw, dial: &Dial, layout: DialLayout) {
    let (cx, cy) = to_engine(layout.center);
    let radius = <f64 as From<_>>::from(layout.radius);

    draw_ring(draw, layout.center, layout.radius, 1.5, colors::TICK_MAJOR);

    for mark in dial.graduation_marks(radius, cx, cy) {
        let (color, weight) = if mark.is_major {
            (colors::TICK_MAJOR, 2.5)
        } else {
            (colors::TICK_NORMAL, 1.0)
        };
        draw.line()
            .start(to_nannou(Point::new(mark.x1, mark.y1)))
            .end(to_nannou(Point::new(mark.x2, mark.y2)))
            .color(color)
            .weight(weight);
    }

    let label_radius = radius * 1.12;
    for label in dial.number_positions(label_radius, cx, cy) {
        draw.text(&label.value.to_string())
            .xy(to_nannou(Point::new(label.x, label.y)))
            .color(colors::TEXT_SECONDARY)
            .font_size(16)
            .w(40.0);
    }
}

/// Draw the progress wedge for an elapsed share
pub fn draw_wedge(draw: &Draw, progress: f64, layout: DialLayout) {
    let (cx, cy) = to_engine(layout.center);
    let radius = <f64 as From<_>>::from(layout.radius) * 0.8;

    if progress >= 1.0 {
        draw.ellipse()
            .xy(layout.center)
            .radius(radius as f32)
            .color(colors::WEDGE);
        return;
    }

    let outline = wedge_outline(progress, cx, cy, radius, WEDGE_SEGMENTS);
    if outline.len() < 3 {
        return;
    }
    draw.polygon()
        .points(outline.into_iter().map(to_nannou))
        .color(colors::WEDGE);
}

/// Draw the draggable handle at the angle for `minutes`
pub fn draw_handle(draw: &Draw, dial: &Dial, minutes: f64, layout: DialLayout) {
    let (cx, cy) = to_engine(layout.center);
    let angle = dial.minutes_to_angle(minutes);
    let tip = dial_core::polar_to_cartesian(cx, cy, <f64 as From<_>>::from(layout.radius) * 0.8, angle);
    let tip = to_nannou(tip);

    draw.line()
        .start(layout.center)
        .end(tip)
        .color(colors::HANDLE)
        .weight(3.0);
    draw.ellipse().xy(tip).radius(7.0).color(colors::HANDLE);
    draw.ellipse().xy(layout.center).radius(5.0).color(colors::HANDLE);
}

/// Draw the digital readout below the dial
pub fn draw_readout(draw: &Draw, text: &str, caption: &str, layout: DialLayout) {
    let base = layout.center - vec2(0.0, layout.radius * 1.3);
    draw.text(text)
        .xy(base)
        .color(colors::TEXT_PRIMARY)
        .font_size(36)
        .w(300.0);
    draw.text(caption)
        .xy(base - vec2(0.0, 30.0))
        .color(colors::TEXT_SECONDARY)
        .font_size(14)
        .w(300.0);
}

/// Draw a ring (circle outline) using line segments
fn draw_ring(draw: &Draw, center: Point2, radius: f32, weight: f32, color: Srgb<u8>) {
    let segments = 120;
    let points: Vec<Point2> = (0..=segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * TAU;
            center + vec2(angle.cos(), angle.sin()) * radius
        })
        .collect();

    draw.polyline()
        .weight(weight)
        .color(color)
        .points(points);
}
