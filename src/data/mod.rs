//! Core data structures: points, the control polygon, scaffold segments and
//! the drawing surface bounds.

pub mod bounds;
pub mod macros;
pub mod point;
pub mod polygon;
pub mod scaffold;

pub use bounds::Bounds;
pub use point::Point;
pub use polygon::ControlPolygon;
pub use scaffold::{ScaffoldSegment, SegmentKey};
