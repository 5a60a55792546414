use casteljau_rs::modules::animate::runner::{self, AnimationOptions};
use casteljau_rs::modules::export::svg::snapshot_svg;
use casteljau_rs::modules::export::svg_path::ToSvgPath;
use casteljau_rs::modules::parse::json;
use casteljau_rs::{points, pt, Bounds, EditOutcome, PointSetEditor, SegmentPalette};
use std::sync::atomic::AtomicBool;
use std::time::Duration;

#[test]
fn test_complete_workflow() {
    // Start from a five point layout on a 1200x560 surface
    let mut editor = PointSetEditor::with_points(
        points![(170, 500), (20, 10), (770, 25), (1020, 500), (1170, 100)],
        Bounds::new(1200.0, 560.0),
    );

    // A click on empty space appends a sixth control point
    editor.begin(pt!(360, 200)).unwrap();
    assert_eq!(editor.end(pt!(360, 200)).unwrap(), EditOutcome::Appended(5));
    assert_eq!(editor.len(), 6);

    // A drag starting on the first point relocates it
    editor.begin(pt!(171, 501)).unwrap();
    editor.drag(pt!(190, 490)).unwrap();
    assert_eq!(editor.end(pt!(200, 480)).unwrap(), EditOutcome::Relocated(0));
    assert_eq!(editor.points()[0], pt!(200, 480));

    // Animate the construction to completion at full speed
    let cancel = AtomicBool::new(false);
    let mut frames = 0usize;
    let mut builder = runner::run_with_palette(
        &mut editor,
        AnimationOptions {
            frame_delay: Duration::ZERO,
        },
        &cancel,
        SegmentPalette::with_seed(11),
        |_| frames += 1,
    )
    .unwrap();

    assert!(builder.finished());
    assert!(frames == 2000 || frames == 2001);
    assert!(!editor.is_frozen());

    // The primary line runs from the first control point to the last,
    // one collected point per frame plus the seed
    let line = builder.primary_line().to_vec();
    assert_eq!(line.len(), frames + 1);
    assert_eq!(line[0], pt!(200, 480));
    assert_eq!(line[line.len() - 1], pt!(360, 200));

    // A snapshot of the finished curve has no moving tip and no scaffold
    let svg_string = snapshot_svg(&mut builder, 1200, 560, false);
    assert!(svg_string.contains("<path"));
    assert!(!svg_string.contains("fill=\"green\""));

    // Bare path data starts at the relocated first point
    let path_data = line.to_svg_path();
    assert!(path_data.starts_with("M200,480 L"));

    // The edited points survive a JSON round trip
    let data = json::points_to_json(editor.points()).unwrap();
    let parsed = json::points_from_json(&data).unwrap();
    assert_eq!(parsed, editor.points());
}
