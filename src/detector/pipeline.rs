//! Detector pipeline driving line detection end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use hough_lines::{DetectorParams, LineDetector};
//! use hough_lines::image::ImageU8;
//!
//! # fn example(gray: ImageU8) -> Result<(), hough_lines::HoughError> {
//! let detector = LineDetector::new(DetectorParams::default());
//! let report = detector.process_u8(gray, 0)?;
//! for line in &report.lines {
//!     println!("r={:.1} slant={:.1}°", line.r, line.slant.to_degrees());
//! }
//! # Ok(())
//! # }
//! ```
use super::params::DetectorParams;
use crate::cluster::Centroid;
use crate::diagnostics::{
    elapsed_ms, AccumulatorStage, ClusterStage, DetectionReport, InputDescriptor, MaximaStage,
    PipelineTrace, StructureStage, ThresholdStage, TimingBreakdown,
};
use crate::error::HoughError;
use crate::hough::{accumulate, HoughSpace};
use crate::image::{ImageU8, Raster};
use crate::maxima::MaximaMap;
use crate::structure::{build_lines, DetectedLine};
use crate::threshold::threshold;
use log::debug;
use std::time::Instant;

/// Every intermediate product of one detector run.
#[derive(Clone, Debug)]
pub struct DetectionStages {
    pub binary: Raster,
    pub accumulator: HoughSpace,
    pub maxima: MaximaMap,
    pub centroids: Vec<Centroid>,
    pub lines: Vec<DetectedLine>,
    pub timings: TimingBreakdown,
}

/// Line detector holding validated parameters. Stateless across frames.
#[derive(Clone, Debug)]
pub struct LineDetector {
    params: DetectorParams,
}

impl LineDetector {
    /// Create a detector, clamping out-of-range parameters (each logged).
    pub fn new(mut params: DetectorParams) -> Self {
        let clamped = params.sanitize();
        if !clamped.is_empty() {
            debug!("LineDetector::new clamped {} parameter(s)", clamped.len());
        }
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Decode an 8-bit view into a raster with `margin` and run the pipeline.
    pub fn process_u8(
        &self,
        gray: ImageU8<'_>,
        margin: usize,
    ) -> Result<DetectionReport, HoughError> {
        let raster = Raster::from_u8_view(&gray, margin)?;
        Ok(self.process(&raster))
    }

    /// Run the pipeline and return the lines with a per-stage trace.
    pub fn process(&self, input: &Raster) -> DetectionReport {
        let stages = self.run_stages(input);
        self.report(input, &stages)
    }

    /// Summarize the stages of a run over `input` into a report.
    pub fn report(&self, input: &Raster, stages: &DetectionStages) -> DetectionReport {
        let (width, height) = input.dimensions();
        let trace = PipelineTrace {
            input: InputDescriptor {
                width,
                height,
                margin: input.margin(),
            },
            timings: stages.timings.clone(),
            threshold: ThresholdStage {
                threshold: self.params.threshold,
                on_pixels: stages.binary.count_nonzero(),
            },
            accumulator: AccumulatorStage {
                geometry: *stages.accumulator.geometry(),
                peak: stages.accumulator.peak(),
            },
            maxima: MaximaStage {
                threshold: self.params.maxima.threshold,
                count: stages.maxima.count(),
            },
            clustering: ClusterStage {
                strategy: self.params.cluster,
                centroids: stages.centroids.clone(),
            },
            structure: StructureStage {
                emitted: stages.lines.len(),
                rejected: stages.centroids.len() - stages.lines.len(),
            },
        };

        DetectionReport {
            lines: stages.lines.clone(),
            trace,
        }
    }

    /// Run every stage, keeping the intermediate rasters for inspection.
    pub fn run_stages(&self, input: &Raster) -> DetectionStages {
        let (width, height) = input.dimensions();
        debug!(
            "LineDetector::process start w={} h={} margin={}",
            width,
            height,
            input.margin()
        );
        let total_start = Instant::now();

        let start = Instant::now();
        let binary = threshold(input, self.params.threshold);
        let threshold_ms = elapsed_ms(start);

        let start = Instant::now();
        let accumulator = accumulate(&binary, &self.params.hough);
        let accumulate_ms = elapsed_ms(start);
        let geometry = *accumulator.geometry();
        debug!(
            "LineDetector::process accumulator {}x{} theta0={} peak={}",
            geometry.theta_count,
            geometry.r_count(),
            geometry.first_bin,
            accumulator.peak()
        );

        let start = Instant::now();
        let maxima = accumulator.find_maxima(&self.params.maxima);
        let maxima_ms = elapsed_ms(start);

        let start = Instant::now();
        let centroids = self.params.cluster.extract(maxima.clone());
        let cluster_ms = elapsed_ms(start);

        let start = Instant::now();
        let lines = build_lines(&centroids, &geometry, &self.params.structure);
        let structure_ms = elapsed_ms(start);

        let total_ms = elapsed_ms(total_start);
        debug!(
            "LineDetector::process done maxima={} clusters={} lines={} total_ms={:.3}",
            maxima.count(),
            centroids.len(),
            lines.len(),
            total_ms
        );

        let mut timings = TimingBreakdown::with_total(total_ms);
        timings.push("threshold", threshold_ms);
        timings.push("accumulate", accumulate_ms);
        timings.push("maxima", maxima_ms);
        timings.push("cluster", cluster_ms);
        timings.push("structure", structure_ms);

        DetectionStages {
            binary,
            accumulator,
            maxima,
            centroids,
            lines,
            timings,
        }
    }
}

/// One-shot detection without diagnostics.
pub fn detect_lines(input: &Raster, params: &DetectorParams) -> Vec<DetectedLine> {
    let mut params = params.clone();
    params.sanitize();
    let binary = threshold(input, params.threshold);
    let space = accumulate(&binary, &params.hough);
    let maxima = space.find_maxima(&params.maxima);
    let (_, geometry) = space.into_parts();
    let centroids = params.cluster.extract(maxima);
    build_lines(&centroids, &geometry, &params.structure)
}
