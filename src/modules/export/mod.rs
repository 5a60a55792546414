//! Export construction results to various formats
//!
//! This module provides functionality to export constructions to different
//! formats for visualization, sharing, or further processing.
//!
//! # Available Export Formats
//!
//! - [SVG](svg/index.html) - Render a construction snapshot to an SVG document
//! - [SVG path data](svg_path/index.html) - Render the primary line as bare path data

pub mod svg;
pub mod svg_path;
