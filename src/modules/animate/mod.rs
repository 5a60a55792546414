//! Animated construction runs
//!
//! The [runner](runner/index.html) freezes the control points, advances the
//! construction one step per frame with an optional pause, and thaws the
//! points again when it stops, whether by finishing or by cancellation.

pub mod runner;
