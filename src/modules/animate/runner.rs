//! Drive a construction to completion frame by frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::constants::FRAME_DELAY;
use crate::error::CurveResult;
use crate::modules::build::builder::CurveBuilder;
use crate::modules::edit::editor::PointSetEditor;
use crate::modules::style::palette::SegmentPalette;

/// Pacing of an animated construction run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationOptions {
    /// Pause after each frame. A zero delay runs the construction at full
    /// speed, which is what tests and offline rendering want.
    pub frame_delay: Duration,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            frame_delay: FRAME_DELAY,
        }
    }
}

/// Animate a full construction over the editor's current points.
///
/// The point set is frozen for the duration of the run and thawed again on
/// every way out, so the points cannot change mid-construction. Each
/// successful step calls `on_frame` with the builder, which is where a
/// caller renders. The run stops early when `cancel` becomes true; the
/// partially built curve is returned as is.
pub fn run<F>(
    editor: &mut PointSetEditor,
    options: AnimationOptions,
    cancel: &AtomicBool,
    on_frame: F,
) -> CurveResult<CurveBuilder>
where
    F: FnMut(&mut CurveBuilder),
{
    run_with_palette(editor, options, cancel, SegmentPalette::new(), on_frame)
}

/// Same as [`run`], with a caller-provided scaffold palette
pub fn run_with_palette<F>(
    editor: &mut PointSetEditor,
    options: AnimationOptions,
    cancel: &AtomicBool,
    palette: SegmentPalette,
    mut on_frame: F,
) -> CurveResult<CurveBuilder>
where
    F: FnMut(&mut CurveBuilder),
{
    let mut builder = CurveBuilder::with_palette(editor.points(), palette)?;
    editor.freeze()?;

    while !cancel.load(Ordering::Relaxed) {
        if !builder.advance() {
            break;
        }
        on_frame(&mut builder);
        if !options.frame_delay.is_zero() {
            thread::sleep(options.frame_delay);
        }
    }

    editor.unfreeze();
    Ok(builder)
}
