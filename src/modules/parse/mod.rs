//! Parsing module for control point input
//!
//! Now supported format:
//! - JSON:
//!     in the form of `[{"x": 170.0, "y": 500.0}, {"x": 20.0, "y": 10.0}]`.
//!     See the `json` module for more detailed information on the JSON format.

pub mod json;
