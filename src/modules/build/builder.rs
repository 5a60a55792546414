//! Step-by-step construction of a Bézier curve from its control points.

use crate::constants::PROGRESS_STEP;
use crate::data::{Point, ScaffoldSegment, SegmentKey};
use crate::error::{CurveError, CurveResult};
use crate::modules::build::casteljau;
use crate::modules::style::palette::{Color, SegmentPalette};

/// Incremental De Casteljau construction over a fixed control point set.
///
/// The builder owns a snapshot of the control points and grows the primary
/// line one curve point per step, advancing the parameter by a fixed
/// increment until it reaches 1. At any moment the construction scaffold for
/// the current parameter can be emitted, with a stable color per scaffold
/// segment.
///
/// # Examples
///
/// ```
/// use casteljau_rs::{points, CurveBuilder};
///
/// let points = points![(170, 500), (20, 10), (770, 25)];
/// let mut builder = CurveBuilder::new(&points).unwrap();
///
/// while builder.advance() {}
///
/// assert!(builder.finished());
/// let line = builder.primary_line();
/// assert_eq!(line.first(), Some(&points[0]));
/// assert_eq!(line.last(), Some(&points[2]));
/// ```
#[derive(Debug, Clone)]
pub struct CurveBuilder {
    base_points: Vec<Point>,
    working_set: Vec<Point>,
    primary_line: Vec<Point>,
    palette: SegmentPalette,
    progress: f64,
}

impl CurveBuilder {
    /// Create a builder over a copy of `points`, with a fresh random palette.
    ///
    /// At least two control points are required.
    pub fn new(points: &[Point]) -> CurveResult<Self> {
        Self::with_palette(points, SegmentPalette::new())
    }

    /// Create a builder that colors its scaffold from the given palette
    pub fn with_palette(points: &[Point], palette: SegmentPalette) -> CurveResult<Self> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints(format!(
                "At least 2 control points are required to build a curve, got {}",
                points.len()
            )));
        }

        let base_points = points.to_vec();
        let working_set = base_points.clone();
        let mut primary_line = Vec::with_capacity((1.0 / PROGRESS_STEP) as usize + 2);
        primary_line.push(base_points[0]);

        Ok(Self {
            base_points,
            working_set,
            primary_line,
            palette,
            progress: 0.0,
        })
    }

    /// Whether the construction has reached the end of the curve
    pub fn finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Current parameter value, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// The control points this construction runs over
    pub fn control_points(&self) -> &[Point] {
        &self.base_points
    }

    /// The curve points collected so far. The first entry is always the
    /// first control point.
    pub fn primary_line(&self) -> &[Point] {
        &self.primary_line
    }

    /// Advance the construction by one step and append the new curve point
    /// to the primary line.
    ///
    /// The parameter moves by a fixed increment and is clamped at 1. On the
    /// final step the exact last control point is appended instead of the
    /// reduced point, so the line always closes on it regardless of float
    /// drift. Returns `false` once the construction is finished.
    pub fn advance(&mut self) -> bool {
        if self.finished() {
            return false;
        }

        self.progress = (self.progress + PROGRESS_STEP).min(1.0);
        casteljau::reduce(&self.base_points, &mut self.working_set, self.progress, None);

        let next = if self.finished() {
            self.base_points[self.base_points.len() - 1]
        } else {
            self.working_set[0]
        };
        self.primary_line.push(next);
        true
    }

    /// Run the construction to completion and return the full primary line.
    ///
    /// Picks up from the current progress, so a partially advanced builder
    /// is completed rather than restarted.
    pub fn build_full(&mut self) -> &[Point] {
        while self.advance() {}
        &self.primary_line
    }

    /// Visit every scaffold segment at the current parameter value.
    ///
    /// Segments arrive in level-major order, each with its stable key and
    /// its two endpoints as they are right now. The primary line and the
    /// progress are left untouched.
    pub fn emit_scaffold<F>(&mut self, mut visit: F)
    where
        F: FnMut(SegmentKey, Point, Point),
    {
        casteljau::reduce(
            &self.base_points,
            &mut self.working_set,
            self.progress,
            Some(&mut visit),
        );
    }

    /// Collect the current scaffold into a list of segments
    pub fn scaffold(&mut self) -> Vec<ScaffoldSegment> {
        let count = self.base_points.len();
        let mut segments = Vec::with_capacity(count * (count - 1) / 2);
        self.emit_scaffold(|key, start, end| segments.push(ScaffoldSegment { key, start, end }));
        segments
    }

    /// The stable color assigned to a scaffold segment
    pub fn segment_color(&mut self, key: SegmentKey) -> Color {
        self.palette.color_for(key)
    }
}
