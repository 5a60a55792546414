//! Interactive editing of the control point set
//!
//! Press, move and release positions are turned into append, remove and
//! relocate edits by the [editor](editor/index.html), with a grab distance
//! that makes small wobbles still count as clicks.

pub mod editor;
