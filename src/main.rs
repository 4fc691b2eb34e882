use hough_lines::image::ImageU8;
use hough_lines::{DetectorParams, LineDetector};

fn main() {
    // Demo stub: draws a horizontal and a diagonal line into an 8-bit buffer
    // and runs the detector on it
    let w = 64usize;
    let h = 48usize;
    let mut gray = vec![0u8; w * h];
    for x in 0..w {
        gray[12 * w + x] = 255;
    }
    for i in 0..h {
        gray[i * w + i + 8] = 255;
    }
    let img = ImageU8::packed(w, h, &gray);

    let mut params = DetectorParams::default();
    params.maxima.threshold = 30.0;
    let det = LineDetector::new(params);
    match det.process_u8(img, 1) {
        Ok(report) => {
            for line in &report.lines {
                println!(
                    "r={:.2} slant={:.2}° extent={:.1}x{:.1}",
                    line.r,
                    line.slant.to_degrees(),
                    line.width,
                    line.height
                );
            }
            println!(
                "lines={} latency_ms={:.3}",
                report.lines.len(),
                report.trace.timings.total_ms
            );
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
