use hough_lines::config::hough::{self as hough_config, HoughToolConfig};
use hough_lines::detector::DetectionStages;
use hough_lines::image::io::{load_raster, save_raster_png, write_json_file, Normalization};
use hough_lines::{DetectionReport, LineDetector};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = hough_config::load_config(Path::new(&config_path))?;

    let input = load_raster(&config.input, config.margin)?;
    let detector = LineDetector::new(config.detector.clone());

    let report = if config.output.wants_stage_images() {
        let stages = detector.run_stages(&input);
        dump_stages(&stages, &config)?;
        detector.report(&input, &stages)
    } else {
        detector.process(&input)
    };

    write_json_file(&config.output.lines_json, &report)?;
    print_summary(&report, &config);
    Ok(())
}

fn dump_stages(stages: &DetectionStages, config: &HoughToolConfig) -> Result<(), String> {
    if let Some(path) = &config.output.binary_image {
        save_raster_png(&stages.binary, path, Normalization::Unit)?;
        println!("Saved binary image to {}", path.display());
    }
    if let Some(path) = &config.output.accumulator_image {
        save_raster_png(stages.accumulator.raster(), path, Normalization::Peak)?;
        println!("Saved accumulator image to {}", path.display());
    }
    if let Some(path) = &config.output.maxima_image {
        save_raster_png(stages.maxima.raster(), path, Normalization::Peak)?;
        println!("Saved maxima image to {}", path.display());
    }
    Ok(())
}

fn print_summary(report: &DetectionReport, config: &HoughToolConfig) {
    let trace = &report.trace;
    println!(
        "Input {}x{} (margin {}), {} on-pixels, accumulator peak {}",
        trace.input.width,
        trace.input.height,
        trace.input.margin,
        trace.threshold.on_pixels,
        trace.accumulator.peak
    );
    println!(
        "Maxima {} -> clusters {} -> lines {} ({} rejected) in {:.3} ms",
        trace.maxima.count,
        trace.clustering.centroids.len(),
        report.lines.len(),
        trace.structure.rejected,
        trace.timings.total_ms
    );
    for (i, line) in report.lines.iter().enumerate() {
        println!(
            "  #{i}: r={:.2} slant={:.2}° extent={:.1}x{:.1} votes={}",
            line.r,
            line.slant.to_degrees(),
            line.width,
            line.height,
            line.weight
        );
    }
    println!(
        "Saved {} lines to {}",
        report.lines.len(),
        config.output.lines_json.display()
    );
}

fn usage() -> String {
    "Usage: hough_tool <config.json>".to_string()
}
