//! Rectangular bounds of the drawing surface.

use crate::data::point::Point;

/// The drawing surface rectangle, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Surface width
    pub width: f64,
    /// Surface height
    pub height: f64,
}

impl Bounds {
    /// Create bounds with the given width and height
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp a point into the surface rectangle
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(0.0, self.width),
            point.y.clamp(0.0, self.height),
        )
    }

    /// Whether a point lies inside the surface rectangle (edges included)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}
