//! SVG path data for polylines
//!
//! The primary line collected by a construction is a dense polyline. This
//! module renders such point lists as SVG path data, one `M` command
//! followed by an `L` per point.
//!
//! # Examples
//!
//! ```rust
//! use casteljau_rs::modules::export::svg_path::ToSvgPath;
//! use casteljau_rs::points;
//!
//! let line = points![(10, 20), (30, 40), (50, 40)];
//!
//! assert_eq!(line.to_svg_path(), "M10,20 L30,40 L50,40");
//! ```

use crate::data::Point;

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> String;
}

impl ToSvgPath for [Point] {
    fn to_svg_path(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut result = format!("M{},{}", self[0].x, self[0].y);
        for point in &self[1..] {
            result.push_str(&format!(" L{},{}", point.x, point.y));
        }
        result
    }
}
