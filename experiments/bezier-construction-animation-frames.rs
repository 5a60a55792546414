// drive a full construction over a demo point layout and render evenly
// spaced snapshot frames to PNG files.

// each animation frame shows the scaffold lines in their stable colors, the
// primary line collected so far and the moving tip; the final frame shows
// the bare finished curve.

use casteljau_rs::constants::{POINT_RADIUS, PROGRESS_STEP};
use casteljau_rs::modules::animate::runner::{self, AnimationOptions};
use casteljau_rs::{points, Bounds, CurveBuilder, Point, PointSetEditor, SegmentPalette};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

const OUTPUT_DIR: &str = "frames";
const SURFACE_WIDTH: u32 = 1200;
const SURFACE_HEIGHT: u32 = 560;
const FRAME_STRIDE: usize = 40; // one PNG every 40 construction steps
const PALETTE_SEED: u64 = 17;

fn to_pixel(point: Point) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

fn render_frame(
    builder: &mut CurveBuilder,
    path: &Path,
    with_scaffold: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (SURFACE_WIDTH, SURFACE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    if with_scaffold {
        for segment in builder.scaffold() {
            let color = builder.segment_color(segment.key);
            let style = ShapeStyle::from(&RGBColor(color.r, color.g, color.b)).stroke_width(1);
            root.draw(&PathElement::new(
                vec![to_pixel(segment.start), to_pixel(segment.end)],
                style,
            ))?;
        }
    }

    let line: Vec<(i32, i32)> = builder
        .primary_line()
        .iter()
        .map(|point| to_pixel(*point))
        .collect();
    root.draw(&PathElement::new(
        line,
        ShapeStyle::from(&BLACK).stroke_width(2),
    ))?;

    if !builder.finished() {
        let tip = builder.primary_line()[builder.primary_line().len() - 1];
        root.draw(&Circle::new(
            to_pixel(tip),
            POINT_RADIUS as i32,
            GREEN.filled(),
        ))?;
    }

    if with_scaffold {
        for point in builder.control_points() {
            root.draw(&Circle::new(
                to_pixel(*point),
                POINT_RADIUS as i32,
                RED.filled(),
            ))?;
        }
    }

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Starting construction frame rendering");

    let start_time = Instant::now();
    std::fs::create_dir_all(OUTPUT_DIR)?;

    let mut editor = PointSetEditor::with_points(
        points![
            (170, 500),
            (20, 10),
            (770, 25),
            (1020, 500),
            (1170, 100),
            (360, 200)
        ],
        Bounds::new(SURFACE_WIDTH as f64, SURFACE_HEIGHT as f64),
    );
    info!("Control points: {}", editor.len());

    let total_steps = (1.0 / PROGRESS_STEP).ceil() as u64;

    // Create progress bar for construction steps
    let step_pb = ProgressBar::new(total_steps);
    step_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} Steps [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let cancel = AtomicBool::new(false);
    let mut steps = 0usize;
    let mut rendered_frames = 0usize;
    let mut failed_frames = 0usize;

    let mut builder = runner::run_with_palette(
        &mut editor,
        AnimationOptions {
            frame_delay: Duration::ZERO,
        },
        &cancel,
        SegmentPalette::with_seed(PALETTE_SEED),
        |builder| {
            steps += 1;
            step_pb.inc(1);
            if steps % FRAME_STRIDE != 0 {
                return;
            }

            let frame_path =
                PathBuf::from(OUTPUT_DIR).join(format!("frame_{:04}.png", rendered_frames));
            match render_frame(builder, &frame_path, true) {
                Ok(()) => rendered_frames += 1,
                Err(e) => {
                    error!("Failed to render frame at step {}: {}", steps, e);
                    failed_frames += 1;
                }
            }
        },
    )?;
    step_pb.finish();

    // One closing frame of the bare finished curve
    let final_path = PathBuf::from(OUTPUT_DIR).join("frame_final.png");
    match render_frame(&mut builder, &final_path, false) {
        Ok(()) => rendered_frames += 1,
        Err(e) => {
            error!("Failed to render the final frame: {}", e);
            failed_frames += 1;
        }
    }

    let duration = start_time.elapsed();
    info!("\nRendering completed in {:.2?}", duration);
    info!("Construction steps: {}", steps);
    info!("Frames rendered: {}", rendered_frames);
    info!("Failed frames: {}", failed_frames);
    info!("Output directory: {}", OUTPUT_DIR);

    Ok(())
}
