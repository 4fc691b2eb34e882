use crate::cluster::{Centroid, ClusterStrategy};
use crate::hough::AccumulatorGeometry;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdStage {
    pub threshold: f32,
    /// Samples set to 1 by binarization.
    pub on_pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatorStage {
    pub geometry: AccumulatorGeometry,
    /// Highest vote count in the parameter space.
    pub peak: f32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaximaStage {
    pub threshold: f32,
    pub count: usize,
}

/// Clusters found in the maxima map, in emission order.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStage {
    pub strategy: ClusterStrategy,
    pub centroids: Vec<Centroid>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureStage {
    pub emitted: usize,
    /// Centroids dropped by the slant, crossing or size filters.
    pub rejected: usize,
}
