//! Build a Bézier curve step by step from its control points
//!
//! This module implements the De Casteljau construction. The reduction
//! itself lives in [casteljau](casteljau/index.html); the stateful,
//! animatable construction that collects the primary line one point per
//! step lives in [builder](builder/index.html).

pub mod builder;
pub mod casteljau;
