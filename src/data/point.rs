//! A 2D point, used both for control points and for sampled curve points.

use serde::{Deserialize, Serialize};

/// A point in 2D space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between this point and `other` at parameter `t`.
    ///
    /// `t = 0` yields this point, `t = 1` yields `other`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            interpolated(self.x, other.x, t),
            interpolated(self.y, other.y, t),
        )
    }

    /// Squared Euclidean distance to another point
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

fn interpolated(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}
