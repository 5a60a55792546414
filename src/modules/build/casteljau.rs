//! The De Casteljau reduction: repeated linear interpolation that collapses a
//! control polygon onto a single curve point.
//!
//! One pass replaces every working point but the last with the interpolation
//! between it and its right neighbour at parameter `t`. After `n - 1` passes
//! a polygon of `n` points has collapsed to a single point, the curve point
//! at `t`. The lines walked during the passes form the construction
//! scaffold; a visitor can observe each of them just before its start point
//! is overwritten.
//!
//! # Examples
//!
//! ```
//! use casteljau_rs::modules::build::casteljau;
//! use casteljau_rs::{points, pt};
//!
//! // A quadratic arc through three control points
//! let points = points![(0, 0), (10, 0), (10, 10)];
//!
//! let mid = casteljau::point_at(&points, 0.5).unwrap();
//! assert_eq!(mid, pt!(7.5, 2.5));
//! ```

use crate::data::{Point, SegmentKey};
use crate::error::{CurveError, CurveResult};

/// Collapse `base` onto a single curve point at parameter `t`, using
/// `working` as the scratch buffer for the interpolation passes.
///
/// `working` is first overwritten with a copy of `base` and must have the
/// same length. After the call, `working[0]` holds the reduced curve point.
/// A visitor, when given, sees every scaffold segment of every pass in
/// level-major order, keyed by its stable [`SegmentKey`].
pub fn reduce(
    base: &[Point],
    working: &mut [Point],
    t: f64,
    mut visit: Option<&mut dyn FnMut(SegmentKey, Point, Point)>,
) {
    working.copy_from_slice(base);

    let count = working.len();
    for level in 1..count {
        for index in 0..count - level {
            let start = working[index];
            let end = working[index + 1];
            if let Some(visit) = visit.as_mut() {
                visit(SegmentKey::new(level, index), start, end);
            }
            working[index] = start.lerp(&end, t);
        }
    }
}

/// Evaluate the curve defined by `points` at parameter `t`.
///
/// Runs a full reduction over a private working buffer. At least two control
/// points are required.
pub fn point_at(points: &[Point], t: f64) -> CurveResult<Point> {
    if points.len() < 2 {
        return Err(CurveError::TooFewPoints(format!(
            "At least 2 control points are required to evaluate a curve, got {}",
            points.len()
        )));
    }

    let mut working = points.to_vec();
    reduce(points, &mut working, t, None);
    Ok(working[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{points, pt};
    use approx::assert_relative_eq;

    #[test]
    fn test_point_at_endpoints() {
        let points = points![(170, 500), (20, 10), (770, 25), (1020, 500)];

        // t=0 is the first control point, t=1 the last
        assert_eq!(point_at(&points, 0.0).unwrap(), pt!(170, 500));
        assert_eq!(point_at(&points, 1.0).unwrap(), pt!(1020, 500));
    }

    #[test]
    fn test_quadratic_midpoint() {
        // For (0,0), (10,0), (10,10) at t=0.5 the passes give
        //   level 1: (5,0), (10,5)
        //   level 2: (7.5, 2.5)
        // and every interpolation is exact in f64.
        let points = points![(0, 0), (10, 0), (10, 10)];
        assert_eq!(point_at(&points, 0.5).unwrap(), pt!(7.5, 2.5));
    }

    #[test]
    fn test_reduction_matches_bernstein_form() {
        // The reduction must agree with the closed cubic polynomial
        // B(t) = (1-t)^3 p0 + 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3 p3
        fn bernstein_cubic(p: &[Point], t: f64) -> Point {
            let u = 1.0 - t;
            let x = u.powi(3) * p[0].x
                + 3.0 * u.powi(2) * t * p[1].x
                + 3.0 * u * t.powi(2) * p[2].x
                + t.powi(3) * p[3].x;
            let y = u.powi(3) * p[0].y
                + 3.0 * u.powi(2) * t * p[1].y
                + 3.0 * u * t.powi(2) * p[2].y
                + t.powi(3) * p[3].y;
            Point::new(x, y)
        }

        let points = points![(50, 200), (100, 50), (200, 50), (250, 200)];

        for t in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            let reduced = point_at(&points, t).unwrap();
            let expected = bernstein_cubic(&points, t);
            assert_relative_eq!(reduced.x, expected.x, epsilon = 1e-9);
            assert_relative_eq!(reduced.y, expected.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_visitor_sees_passes_in_level_major_order() {
        let points = points![(0, 0), (4, 0), (4, 4), (0, 4)];
        let mut working = points.clone();

        let mut keys = Vec::new();
        let mut visit = |key: SegmentKey, _start: Point, _end: Point| keys.push(key);
        reduce(&points, &mut working, 0.5, Some(&mut visit));

        // Four points: three passes of 3, 2 and 1 segments, level-major
        assert_eq!(
            keys,
            vec![
                SegmentKey::new(1, 0),
                SegmentKey::new(1, 1),
                SegmentKey::new(1, 2),
                SegmentKey::new(2, 0),
                SegmentKey::new(2, 1),
                SegmentKey::new(3, 0),
            ]
        );

        // n points visit n * (n - 1) / 2 segments in total
        assert_eq!(keys.len(), points.len() * (points.len() - 1) / 2);
    }

    #[test]
    fn test_visitor_sees_segments_before_collapse() {
        let points = points![(0, 0), (10, 0)];
        let mut working = points.clone();

        let mut seen = Vec::new();
        let mut visit =
            |key: SegmentKey, start: Point, end: Point| seen.push((key, start, end));
        reduce(&points, &mut working, 0.25, Some(&mut visit));

        // The single pass connects the two original points, not the result
        assert_eq!(seen, vec![(SegmentKey::new(1, 0), pt!(0, 0), pt!(10, 0))]);
        assert_eq!(working[0], pt!(2.5, 0));
    }

    #[test]
    fn test_point_at_rejects_short_input() {
        assert!(matches!(
            point_at(&[], 0.5),
            Err(CurveError::TooFewPoints(_))
        ));
        assert!(matches!(
            point_at(&[pt!(1, 1)], 0.5),
            Err(CurveError::TooFewPoints(_))
        ));
    }
}
