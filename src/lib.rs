// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::bounds::Bounds;
pub use data::point::Point;
pub use data::polygon::ControlPolygon;
pub use data::scaffold::{ScaffoldSegment, SegmentKey};
pub use error::{CurveError, CurveResult};
pub use modules::build::builder::CurveBuilder;
pub use modules::edit::editor::{EditOutcome, PointSetEditor};
pub use modules::style::palette::{Color, SegmentPalette};
