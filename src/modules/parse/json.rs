//! JSON parsing and serialization of control point lists
//!
//! The accepted form is a flat array of point objects:
//! `[{"x": 170.0, "y": 500.0}, {"x": 20.0, "y": 10.0}]`. Unknown fields on a
//! point are ignored. Counting rules are not enforced here; a list of any
//! length parses, and construction rejects short lists itself.
//!
//! # Examples
//!
//! ```rust
//! use casteljau_rs::modules::parse::json;
//! use casteljau_rs::pt;
//!
//! let data = r#"[{"x": 170.0, "y": 500.0}, {"x": 20.0, "y": 10.0}]"#;
//! let points = json::points_from_json(data).unwrap();
//!
//! assert_eq!(points, vec![pt!(170, 500), pt!(20, 10)]);
//! ```

use crate::data::Point;
use crate::error::{CurveError, CurveResult};

/// Parse a JSON array of `{"x": .., "y": ..}` objects into a point list
pub fn points_from_json(data: &str) -> CurveResult<Vec<Point>> {
    serde_json::from_str(data)
        .map_err(|e| CurveError::ParseError(format!("invalid control point JSON: {}", e)))
}

/// Serialize a point list back to its JSON array form
pub fn points_to_json(points: &[Point]) -> CurveResult<String> {
    serde_json::to_string(points)
        .map_err(|e| CurveError::ParseError(format!("cannot serialize control points: {}", e)))
}
