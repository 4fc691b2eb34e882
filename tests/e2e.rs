mod common;

use common::synthetic_image::{
    blank_u8, draw_horizontal_u8, draw_line_u8, draw_vertical_u8, raster_from_u8,
};
use hough_lines::cluster::ClusterStrategy;
use hough_lines::hough::SlantRange;
use hough_lines::image::ImageU8;
use hough_lines::{detect_lines, DetectedLine, DetectorParams, LineDetector};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn params_with_votes(min_votes: f32) -> DetectorParams {
    let mut params = DetectorParams::default();
    params.maxima.threshold = min_votes;
    params
}

fn slant_deg(line: &DetectedLine) -> f64 {
    line.slant.to_degrees()
}

fn cross_40() -> Vec<u8> {
    let mut img = blank_u8(40, 40);
    draw_horizontal_u8(&mut img, 40, 10);
    draw_vertical_u8(&mut img, 40, 30);
    img
}

#[test]
fn diagonal_line_round_trips_its_slant() {
    init_logger();
    let (w, h) = (20usize, 20usize);
    let mut img = blank_u8(w, h);
    draw_line_u8(&mut img, w, (0, 0), (19, 19), 255);

    let det = LineDetector::new(params_with_votes(15.0));
    let report = det
        .process_u8(ImageU8::packed(w, h, &img), 0)
        .expect("valid image");

    assert_eq!(report.lines.len(), 1, "lines: {:?}", report.lines);
    let line = report.lines[0];
    assert!(
        (slant_deg(&line) - 45.0).abs() <= 2.0,
        "slant {:.2}° too far from 45°",
        slant_deg(&line)
    );
    assert!(line.r.abs() < 1.0);
    assert_eq!(report.trace.accumulator.peak, 20.0);
}

#[test]
fn all_zero_input_produces_no_lines() {
    init_logger();
    let img = blank_u8(32, 24);
    let det = LineDetector::new(DetectorParams::default());
    let report = det
        .process_u8(ImageU8::packed(32, 24, &img), 1)
        .expect("valid image");

    assert!(report.lines.is_empty());
    assert_eq!(report.trace.threshold.on_pixels, 0);
    assert_eq!(report.trace.accumulator.peak, 0.0);
    assert_eq!(report.trace.maxima.count, 0);
    assert!(report.trace.clustering.centroids.is_empty());
}

#[test]
fn parallel_lines_give_two_detections_in_order() {
    init_logger();
    let (w, h) = (20usize, 20usize);
    let mut img = blank_u8(w, h);
    draw_horizontal_u8(&mut img, w, 5);
    draw_horizontal_u8(&mut img, w, 14);

    let lines = detect_lines(&raster_from_u8(&img, w, 0), &params_with_votes(15.0));

    assert_eq!(lines.len(), 2, "lines: {lines:?}");
    assert!((lines[0].r - 5.0).abs() < 1.0);
    assert!((lines[1].r - 14.0).abs() < 1.0);
    for line in &lines {
        let slant = slant_deg(line);
        assert!(slant.abs() <= 1.5, "slant {slant:.2}°");
        assert!(line.width > 19.0);
    }
}

#[test]
fn minimum_extent_excludes_only_small_lines() {
    init_logger();
    let img = cross_40();
    let input = raster_from_u8(&img, 40, 0);

    let all = detect_lines(&input, &params_with_votes(35.0));
    assert_eq!(all.len(), 2);

    let mut wide = params_with_votes(35.0);
    wide.structure.min_width = 10.0;
    let lines = detect_lines(&input, &wide);
    assert_eq!(lines.len(), 1);
    assert!(slant_deg(&lines[0]).abs() < 1.0);
    assert!((lines[0].r - 10.0).abs() < 1.0);

    let mut tall = params_with_votes(35.0);
    tall.structure.min_height = 10.0;
    let lines = detect_lines(&input, &tall);
    assert_eq!(lines.len(), 1);
    assert!((slant_deg(&lines[0]) + 90.0).abs() < 1.0);
    assert!((lines[0].r - 30.0).abs() < 1.0);
}

#[test]
fn vertical_line_is_detected_once_with_defaults() {
    init_logger();
    let mut img = blank_u8(40, 40);
    draw_vertical_u8(&mut img, 40, 30);

    let lines = detect_lines(&raster_from_u8(&img, 40, 0), &DetectorParams::default());

    assert_eq!(lines.len(), 1, "lines: {lines:?}");
    assert!((slant_deg(&lines[0]) + 90.0).abs() < 1e-6);
    assert!((lines[0].r - 30.0).abs() < 1e-6);
    assert!((lines[0].height - 40.0).abs() < 1e-6);
    assert_eq!(lines[0].weight, 40.0);
}

#[test]
fn accumulation_window_suppresses_other_orientations() {
    init_logger();
    let img = cross_40();
    let mut params = params_with_votes(35.0);
    params.hough.slant = SlantRange::new(-10.0, 10.0);

    let det = LineDetector::new(params);
    let stages = det.run_stages(&raster_from_u8(&img, 40, 0));

    assert_eq!(stages.accumulator.geometry().theta_count, 20);
    assert_eq!(stages.lines.len(), 1);
    assert!(slant_deg(&stages.lines[0]).abs() < 1.0);
}

#[test]
fn clustering_strategies_agree_on_line_images() {
    init_logger();
    let img = cross_40();
    let input = raster_from_u8(&img, 40, 0);

    let mut convex = params_with_votes(35.0);
    convex.cluster = ClusterStrategy::ConvexScan;
    let mut connected = convex.clone();
    connected.cluster = ClusterStrategy::ConnectedComponents;

    assert_eq!(
        detect_lines(&input, &convex),
        detect_lines(&input, &connected)
    );
}

#[test]
fn input_margin_does_not_move_lines() {
    init_logger();
    let img = cross_40();
    let det = LineDetector::new(params_with_votes(35.0));

    let plain = det.process(&raster_from_u8(&img, 40, 0));
    let padded = det.process(&raster_from_u8(&img, 40, 4));

    assert_eq!(plain.lines, padded.lines);
    assert!(
        padded.trace.accumulator.geometry.r_offset > plain.trace.accumulator.geometry.r_offset
    );
}

#[test]
fn report_serializes_to_camel_case_json() {
    let img = cross_40();
    let det = LineDetector::new(params_with_votes(35.0));
    let report = det.process(&raster_from_u8(&img, 40, 0));

    let json = serde_json::to_value(&report).expect("serializable report");
    assert_eq!(json["lines"].as_array().map(Vec::len), Some(2));
    assert!(json["lines"][0]["slant"].is_number());
    assert!(json["trace"]["threshold"]["onPixels"].is_number());
    assert_eq!(json["trace"]["clustering"]["strategy"], "convexScan");
    let stages = json["trace"]["timings"]["stages"].as_array();
    assert_eq!(stages.map(Vec::len), Some(5));
}
