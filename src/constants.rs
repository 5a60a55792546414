//! Fixed tuning constants for curve construction and point editing.

use std::time::Duration;

/// Construction progress gained per step. A full build takes about
/// `1 / PROGRESS_STEP` steps (2000 at the default value).
pub const PROGRESS_STEP: f64 = 0.0005;

/// Radius of a control point marker, in surface units.
pub const POINT_RADIUS: f64 = 4.0;

/// Squared capture distance around a control point. Shared by point
/// hit-testing and by click-versus-drag detection so that a click which
/// "wobbles" inside the marker still counts as a click.
pub const GRAB_DISTANCE_SQUARED: f64 = (2.0 * POINT_RADIUS) * (2.0 * POINT_RADIUS);

/// Default pause between construction steps when animating.
pub const FRAME_DELAY: Duration = Duration::from_millis(5);
