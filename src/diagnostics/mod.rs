//! Serializable diagnostics returned by the detector.
//!
//! `DetectionReport` is the main entry point: the detected lines plus a
//! `PipelineTrace` summarizing every stage (counts, accumulator geometry,
//! cluster centroids) and a per-stage timing breakdown.

pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{DetectionReport, InputDescriptor, PipelineTrace};
pub use stages::{AccumulatorStage, ClusterStage, MaximaStage, StructureStage, ThresholdStage};
pub use timing::{StageTiming, TimingBreakdown};

pub(crate) use timing::elapsed_ms;
