use super::stages::{AccumulatorStage, ClusterStage, MaximaStage, StructureStage, ThresholdStage};
use super::TimingBreakdown;
use crate::structure::DetectedLine;
use serde::Serialize;

/// Result produced by [`LineDetector::process`](crate::LineDetector::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub lines: Vec<DetectedLine>,
    pub trace: PipelineTrace,
}

/// What each stage of one detector run saw and produced.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub threshold: ThresholdStage,
    pub accumulator: AccumulatorStage,
    pub maxima: MaximaStage,
    pub clustering: ClusterStage,
    pub structure: StructureStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub margin: usize,
}
