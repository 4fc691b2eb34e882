#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Individual pipeline stages, usable on their own.
pub mod angle;
pub mod cluster;
pub mod hough;
pub mod maxima;
pub mod structure;
pub mod threshold;

#[cfg(test)]
mod proptest_utils;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{detect_lines, DetectorParams, LineDetector};
pub use crate::error::HoughError;
pub use crate::structure::DetectedLine;

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hough_lines::prelude::*;
///
/// # fn main() -> Result<(), HoughError> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8::packed(w, h, &gray);
///
/// let det = LineDetector::new(DetectorParams::default());
/// let report = det.process_u8(img, 0)?;
/// println!("lines={} latency_ms={:.3}", report.lines.len(), report.trace.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageU8, Raster};
    pub use crate::{DetectedLine, DetectorParams, HoughError, LineDetector};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage runners.
    pub use crate::cluster::{extract_connected, extract_convex, Centroid, ClusterStrategy};
    pub use crate::detector::DetectionStages;
    pub use crate::hough::{accumulate, AccumulatorGeometry, HoughParams, HoughSpace, SlantRange};
    pub use crate::maxima::{find_maxima, MaximaMap, MaximaParams};
    pub use crate::structure::{build_lines, clip_to_rect, StructureParams};
    pub use crate::threshold::{threshold, threshold_mut};

    // Structured diagnostics types.
    pub use crate::diagnostics::{
        AccumulatorStage, ClusterStage, InputDescriptor, MaximaStage, StageTiming, StructureStage,
        ThresholdStage, TimingBreakdown,
    };
}
