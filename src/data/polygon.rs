//! An editable sequence of control points that can be frozen while a
//! construction runs over it.

use crate::data::point::Point;
use crate::error::{CurveError, CurveResult};

/// An ordered control point sequence with a freeze flag.
///
/// While frozen, every mutating operation fails with [`CurveError::Frozen`],
/// which keeps the point set stable for the duration of a running
/// construction. Reads are always allowed.
#[derive(Debug, Clone, Default)]
pub struct ControlPolygon {
    points: Vec<Point>,
    frozen: bool,
}

impl ControlPolygon {
    /// Create an empty control polygon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a control polygon from an existing point list
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            points,
            frozen: false,
        }
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The control points as a slice
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the control points
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The control point at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// An owned copy of the current points
    pub fn snapshot(&self) -> Vec<Point> {
        self.points.clone()
    }

    /// Whether the polygon is currently frozen
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Freeze the polygon, rejecting edits until [`unfreeze`](Self::unfreeze).
    ///
    /// Freezing an already frozen polygon is an error.
    pub fn freeze(&mut self) -> CurveResult<()> {
        if self.frozen {
            return Err(CurveError::Frozen(
                "a construction is already running".to_string(),
            ));
        }
        self.frozen = true;
        Ok(())
    }

    /// Thaw the polygon. Unfreezing a polygon that is not frozen is a no-op.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    pub(crate) fn check_frozen(&self) -> CurveResult<()> {
        if self.frozen {
            return Err(CurveError::Frozen(
                "control point edits are rejected until construction finishes".to_string(),
            ));
        }
        Ok(())
    }

    /// Append a control point at the end
    pub fn push(&mut self, point: Point) -> CurveResult<()> {
        self.check_frozen()?;
        self.points.push(point);
        Ok(())
    }

    /// Insert a control point at `index`, shifting later points right.
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, point: Point) -> CurveResult<()> {
        self.check_frozen()?;
        self.points.insert(index, point);
        Ok(())
    }

    /// Remove and return the control point at `index`.
    ///
    /// Panics if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> CurveResult<Point> {
        self.check_frozen()?;
        Ok(self.points.remove(index))
    }

    /// Replace the control point at `index`, returning the previous point.
    ///
    /// Panics if `index` is out of range.
    pub fn replace(&mut self, index: usize, point: Point) -> CurveResult<Point> {
        self.check_frozen()?;
        Ok(std::mem::replace(&mut self.points[index], point))
    }

    /// Move the control point at `from` so that it ends up at index `to`.
    ///
    /// Panics if either index is out of range.
    pub fn move_point(&mut self, from: usize, to: usize) -> CurveResult<()> {
        self.check_frozen()?;
        let point = self.points.remove(from);
        self.points.insert(to, point);
        Ok(())
    }

    /// Remove all control points
    pub fn clear(&mut self) -> CurveResult<()> {
        self.check_frozen()?;
        self.points.clear();
        Ok(())
    }
}
