//! SVG export of a construction snapshot
//!
//! This module renders the current state of a [`CurveBuilder`] to an SVG
//! document: the primary line collected so far, optionally the colored
//! construction scaffold with the control point markers, and the moving tip
//! of the curve while the construction is still running.
//!
//! # Features
//!
//! - Export the primary line of a construction as an SVG path
//! - Overlay the scaffold lines in their stable per-segment colors
//! - Configure the output SVG dimensions
//!
//! # Examples
//!
//! ```rust
//! use casteljau_rs::modules::export::svg;
//! use casteljau_rs::{points, CurveBuilder};
//!
//! let points = points![(50, 200), (100, 50), (200, 50), (250, 200)];
//! let mut builder = CurveBuilder::new(&points).unwrap();
//! builder.build_full();
//!
//! let svg_string = svg::snapshot_svg(&mut builder, 300, 300, false);
//!
//! assert!(svg_string.contains("<path"));
//! assert!(svg_string.contains("stroke=\"black\""));
//! ```

use svg::node::element::{path::Data, Circle, Line, Path};
use svg::Document;

use crate::constants::POINT_RADIUS;
use crate::data::Point;
use crate::modules::build::builder::CurveBuilder;

/// Render the current state of a construction to an SVG string.
///
/// The primary line is drawn as a rounded black path. With `with_scaffold`
/// set, the scaffold lines of the current step are layered underneath in
/// their per-segment colors and the control points are marked with red
/// circles. While the construction is unfinished, the moving tip of the
/// line is marked in green.
pub fn snapshot_svg(
    builder: &mut CurveBuilder,
    width: u32,
    height: u32,
    with_scaffold: bool,
) -> String {
    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height));

    if with_scaffold {
        for segment in builder.scaffold() {
            let stroke = builder.segment_color(segment.key).to_hex();
            let line = Line::new()
                .set("x1", segment.start.x)
                .set("y1", segment.start.y)
                .set("x2", segment.end.x)
                .set("y2", segment.end.y)
                .set("stroke", stroke)
                .set("stroke-width", 1);
            document = document.add(line);
        }
    }

    document = document.add(primary_line_path(builder.primary_line()));

    if !builder.finished() {
        let tip = builder.primary_line()[builder.primary_line().len() - 1];
        let marker = Circle::new()
            .set("cx", tip.x)
            .set("cy", tip.y)
            .set("r", POINT_RADIUS)
            .set("fill", "green");
        document = document.add(marker);
    }

    if with_scaffold {
        for point in builder.control_points() {
            let marker = Circle::new()
                .set("cx", point.x)
                .set("cy", point.y)
                .set("r", POINT_RADIUS)
                .set("fill", "red");
            document = document.add(marker);
        }
    }

    document.to_string()
}

/// Render a bare polyline to an SVG string, without any construction
/// decorations.
pub fn polyline_svg(points: &[Point], width: u32, height: u32) -> String {
    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height));

    if !points.is_empty() {
        document = document.add(primary_line_path(points));
    }

    document.to_string()
}

fn primary_line_path(points: &[Point]) -> Path {
    let mut data = Data::new();
    if let Some(first) = points.first() {
        data = data.move_to((first.x, first.y));
        for point in &points[1..] {
            data = data.line_to((point.x, point.y));
        }
    }

    Path::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 2)
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round")
        .set("d", data)
}
