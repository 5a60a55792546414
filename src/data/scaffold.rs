//! Scaffold segments: the intermediate interpolation lines of a De Casteljau
//! reduction, identified by a stable key.

use crate::data::point::Point;

/// Stable identity of one scaffold segment across construction steps.
///
/// `level` counts reduction passes starting at 1 (the control polygon itself
/// is level 0 and is not part of the scaffold). Within a level, `index` is the
/// position of the segment's start point in the working set. For `n` control
/// points the levels run from 1 to `n - 1`, level `l` holding `n - l`
/// segments, so a full reduction visits `n * (n - 1) / 2` distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentKey {
    /// Reduction pass, starting at 1
    pub level: usize,
    /// Position within the pass
    pub index: usize,
}

impl SegmentKey {
    /// Create a new segment key
    pub fn new(level: usize, index: usize) -> Self {
        Self { level, index }
    }
}

/// One scaffold segment of a reduction step: its key plus the two working
/// points it connects at the current parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaffoldSegment {
    /// Stable identity of this segment
    pub key: SegmentKey,
    /// Segment start, before the collapse of this pass
    pub start: Point,
    /// Segment end, before the collapse of this pass
    pub end: Point,
}
