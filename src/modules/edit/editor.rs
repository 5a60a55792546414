//! Gesture-driven editing of a control point set.

use crate::constants::GRAB_DISTANCE_SQUARED;
use crate::data::{Bounds, ControlPolygon, Point};
use crate::error::CurveResult;

/// What a completed gesture did to the point set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A new control point was appended at this index
    Appended(usize),
    /// The control point at this index was removed
    Removed(usize),
    /// The control point at this index was dragged to a new position
    Relocated(usize),
    /// The gesture left the point set as it was
    Unchanged,
}

/// One in-flight press-move-release gesture
#[derive(Debug, Clone, Copy)]
struct Gesture {
    origin: Point,
    captured: Option<usize>,
    moved: bool,
}

/// Editor that turns press, move and release positions into control point
/// edits.
///
/// A gesture starts with [`begin`](Self::begin), which captures the nearest
/// control point within grab distance, if any. Motion is fed in through
/// [`drag`](Self::drag) and the gesture completes with [`end`](Self::end):
///
/// * a click on a captured point removes it,
/// * a click on empty space appends a new point there,
/// * a drag with a captured point relocates it, clamped to the surface,
/// * a drag from empty space changes nothing.
///
/// A click is any gesture whose positions all stay within grab distance of
/// the press position, so a small wobble under the finger still counts as a
/// click. While the underlying point set is frozen, gestures are rejected.
#[derive(Debug, Clone)]
pub struct PointSetEditor {
    polygon: ControlPolygon,
    bounds: Bounds,
    gesture: Option<Gesture>,
}

impl PointSetEditor {
    /// Create an editor over an empty point set
    pub fn new(bounds: Bounds) -> Self {
        Self {
            polygon: ControlPolygon::new(),
            bounds,
            gesture: None,
        }
    }

    /// Create an editor over an existing point list
    pub fn with_points(points: Vec<Point>, bounds: Bounds) -> Self {
        Self {
            polygon: ControlPolygon::from_points(points),
            bounds,
            gesture: None,
        }
    }

    /// The control points in their current state
    pub fn points(&self) -> &[Point] {
        self.polygon.points()
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.polygon.len()
    }

    /// Whether the point set is empty
    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
    }

    /// An owned copy of the current points
    pub fn snapshot(&self) -> Vec<Point> {
        self.polygon.snapshot()
    }

    /// The surface rectangle drags are clamped to
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Replace the surface rectangle, e.g. after a resize
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Whether the point set is frozen
    pub fn is_frozen(&self) -> bool {
        self.polygon.is_frozen()
    }

    /// Freeze the point set against edits
    pub fn freeze(&mut self) -> CurveResult<()> {
        self.polygon.freeze()
    }

    /// Thaw the point set
    pub fn unfreeze(&mut self) {
        self.polygon.unfreeze()
    }

    /// Whether a gesture is currently in flight
    pub fn gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Append a control point at the end
    pub fn push(&mut self, point: Point) -> CurveResult<()> {
        self.polygon.push(point)
    }

    /// Remove the control point at `index`, returning it
    pub fn remove(&mut self, index: usize) -> CurveResult<Point> {
        self.polygon.remove(index)
    }

    /// Replace the control point at `index`, returning the previous point
    pub fn replace(&mut self, index: usize, point: Point) -> CurveResult<Point> {
        self.polygon.replace(index, point)
    }

    /// Move the control point at `from` so that it ends up at index `to`
    pub fn move_point(&mut self, from: usize, to: usize) -> CurveResult<()> {
        self.polygon.move_point(from, to)
    }

    /// Remove all control points
    pub fn clear(&mut self) -> CurveResult<()> {
        self.polygon.clear()
    }

    /// The index of the control point within grab distance of `position`,
    /// if any.
    ///
    /// The nearest qualifying point wins; on an exact distance tie the
    /// earliest index is kept. The comparison is strict, so a point at
    /// exactly grab distance is not captured.
    pub fn hit_test(&self, position: Point) -> Option<usize> {
        let mut best = None;
        let mut best_distance = GRAB_DISTANCE_SQUARED;

        for (index, point) in self.polygon.iter().enumerate() {
            let distance = position.distance_squared(point);
            if distance < best_distance {
                best_distance = distance;
                best = Some(index);
            }
        }

        best
    }

    /// Start a gesture at `position`, capturing the nearest control point
    /// within grab distance.
    ///
    /// Fails while the point set is frozen. Beginning a new gesture replaces
    /// any gesture still in flight.
    pub fn begin(&mut self, position: Point) -> CurveResult<()> {
        self.polygon.check_frozen()?;

        self.gesture = Some(Gesture {
            origin: position,
            captured: self.hit_test(position),
            moved: false,
        });
        Ok(())
    }

    /// Feed a motion position into the active gesture.
    ///
    /// With a captured point, the point follows the position, clamped to the
    /// surface bounds. Without an active gesture this is a no-op.
    pub fn drag(&mut self, position: Point) -> CurveResult<()> {
        let Some(gesture) = self.gesture.as_mut() else {
            return Ok(());
        };
        if gesture.moved && gesture.captured.is_none() {
            return Ok(());
        }

        gesture.moved = gesture.moved || !is_near(&gesture.origin, &position);

        let Some(index) = gesture.captured else {
            return Ok(());
        };
        let clamped = self.bounds.clamp(position);
        self.polygon.replace(index, clamped)?;
        Ok(())
    }

    /// Complete the active gesture at `position` and report what it did.
    ///
    /// The final position is applied as one last drag first. A gesture that
    /// never left grab distance of its press position is a click: it removes
    /// the captured point, or appends a new point at the release position
    /// when nothing was captured. The append is deliberately not clamped.
    /// Without an active gesture this returns [`EditOutcome::Unchanged`].
    pub fn end(&mut self, position: Point) -> CurveResult<EditOutcome> {
        if self.gesture.is_none() {
            return Ok(EditOutcome::Unchanged);
        }

        self.drag(position)?;
        let Some(gesture) = self.gesture.take() else {
            return Ok(EditOutcome::Unchanged);
        };

        if gesture.moved {
            return Ok(match gesture.captured {
                Some(index) => EditOutcome::Relocated(index),
                None => EditOutcome::Unchanged,
            });
        }

        match gesture.captured {
            Some(index) => {
                self.polygon.remove(index)?;
                Ok(EditOutcome::Removed(index))
            }
            None => {
                self.polygon.push(position)?;
                Ok(EditOutcome::Appended(self.polygon.len() - 1))
            }
        }
    }
}

fn is_near(a: &Point, b: &Point) -> bool {
    a.distance_squared(b) < GRAB_DISTANCE_SQUARED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;
    use crate::{points, pt};

    fn editor() -> PointSetEditor {
        PointSetEditor::with_points(points![(100, 100), (200, 100)], Bounds::new(300.0, 200.0))
    }

    #[test]
    fn test_hit_test_within_grab_distance() {
        let editor = editor();

        // 3 right, 4 down of the first point: distance^2 = 25, inside
        assert_eq!(editor.hit_test(pt!(103, 104)), Some(0));

        // distance^2 = 62.41 still inside, 64 exactly is out
        assert_eq!(editor.hit_test(pt!(107.9, 100)), Some(0));
        assert_eq!(editor.hit_test(pt!(108, 100)), None);

        assert_eq!(editor.hit_test(pt!(150, 100)), None);
        assert_eq!(editor.hit_test(pt!(204, 100)), Some(1));
    }

    #[test]
    fn test_hit_test_on_empty_set() {
        let editor = PointSetEditor::new(Bounds::new(100.0, 100.0));
        assert_eq!(editor.hit_test(pt!(50, 50)), None);
    }

    #[test]
    fn test_hit_test_at_exact_point_coordinates() {
        let editor = editor();
        assert_eq!(editor.hit_test(pt!(100, 100)), Some(0));
        assert_eq!(editor.hit_test(pt!(200, 100)), Some(1));
    }

    #[test]
    fn test_hit_test_prefers_nearest_then_earliest() {
        let editor =
            PointSetEditor::with_points(points![(0, 0), (6, 0)], Bounds::new(100.0, 100.0));

        // Nearest point wins
        assert_eq!(editor.hit_test(pt!(2, 0)), Some(0));
        assert_eq!(editor.hit_test(pt!(4, 0)), Some(1));

        // On an exact tie (distance^2 = 9 to both) the earlier index is kept
        assert_eq!(editor.hit_test(pt!(3, 0)), Some(0));
    }

    #[test]
    fn test_click_on_empty_space_appends() {
        let mut editor = editor();

        editor.begin(pt!(40, 40)).unwrap();
        let outcome = editor.end(pt!(40, 40)).unwrap();

        assert_eq!(outcome, EditOutcome::Appended(2));
        assert_eq!(editor.points(), &[pt!(100, 100), pt!(200, 100), pt!(40, 40)]);
        assert!(!editor.gesture_active());
    }

    #[test]
    fn test_click_wobble_appends_at_release_position() {
        let mut editor = editor();

        // The pointer wobbles but never leaves grab distance of the press
        editor.begin(pt!(40, 40)).unwrap();
        editor.drag(pt!(45, 44)).unwrap();
        let outcome = editor.end(pt!(44, 43)).unwrap();

        // Still a click; the new point lands on the release position
        assert_eq!(outcome, EditOutcome::Appended(2));
        assert_eq!(editor.points()[2], pt!(44, 43));
    }

    #[test]
    fn test_click_on_point_removes_it() {
        let mut editor = editor();

        editor.begin(pt!(103, 101)).unwrap();
        let outcome = editor.end(pt!(103, 101)).unwrap();

        assert_eq!(outcome, EditOutcome::Removed(0));
        assert_eq!(editor.points(), &[pt!(200, 100)]);
    }

    #[test]
    fn test_click_wobble_still_removes() {
        let mut editor = editor();

        editor.begin(pt!(103, 101)).unwrap();
        editor.drag(pt!(106, 104)).unwrap();
        let outcome = editor.end(pt!(107, 103)).unwrap();

        assert_eq!(outcome, EditOutcome::Removed(0));
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_drag_relocates_and_clamps_to_bounds() {
        let mut editor = editor();

        editor.begin(pt!(101, 99)).unwrap();
        editor.drag(pt!(150, 150)).unwrap();
        assert_eq!(editor.points()[0], pt!(150, 150));

        // Positions beyond the surface are clamped to its edges
        editor.drag(pt!(400, -50)).unwrap();
        assert_eq!(editor.points()[0], pt!(300, 0));

        let outcome = editor.end(pt!(350, 250)).unwrap();
        assert_eq!(outcome, EditOutcome::Relocated(0));
        assert_eq!(editor.points()[0], pt!(300, 200));
        assert_eq!(editor.len(), 2);
    }

    #[test]
    fn test_drag_from_empty_space_changes_nothing() {
        let mut editor = editor();
        let before = editor.snapshot();

        editor.begin(pt!(50, 50)).unwrap();
        editor.drag(pt!(150, 150)).unwrap();
        let outcome = editor.end(pt!(150, 150)).unwrap();

        assert_eq!(outcome, EditOutcome::Unchanged);
        assert_eq!(editor.points(), before.as_slice());
    }

    #[test]
    fn test_end_without_begin_is_unchanged() {
        let mut editor = editor();

        assert_eq!(editor.drag(pt!(10, 10)), Ok(()));
        assert_eq!(editor.end(pt!(10, 10)), Ok(EditOutcome::Unchanged));
        assert_eq!(editor.len(), 2);
    }

    #[test]
    fn test_direct_edits_pass_through_to_the_polygon() {
        let mut editor = editor();

        let previous = editor.replace(0, pt!(10, 10)).unwrap();
        assert_eq!(previous, pt!(100, 100));

        editor.move_point(1, 0).unwrap();
        assert_eq!(editor.points(), &[pt!(200, 100), pt!(10, 10)]);

        editor.freeze().unwrap();
        assert!(matches!(
            editor.replace(0, pt!(1, 1)),
            Err(CurveError::Frozen(_))
        ));
        assert!(matches!(editor.move_point(0, 1), Err(CurveError::Frozen(_))));
    }

    #[test]
    fn test_gestures_rejected_while_frozen() {
        let mut editor = editor();
        editor.freeze().unwrap();

        assert!(matches!(
            editor.begin(pt!(40, 40)),
            Err(CurveError::Frozen(_))
        ));

        // Reads stay available
        assert_eq!(editor.hit_test(pt!(103, 104)), Some(0));

        editor.unfreeze();
        editor.begin(pt!(40, 40)).unwrap();
        let outcome = editor.end(pt!(40, 40)).unwrap();
        assert_eq!(outcome, EditOutcome::Appended(2));
    }

    #[test]
    fn test_set_bounds_changes_clamping() {
        let mut editor = editor();
        editor.set_bounds(Bounds::new(120.0, 120.0));

        editor.begin(pt!(101, 99)).unwrap();
        editor.drag(pt!(400, 400)).unwrap();
        assert_eq!(editor.points()[0], pt!(120, 120));
        editor.end(pt!(400, 400)).unwrap();
    }
}
