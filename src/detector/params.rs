//! Parameter types configuring the detector stages.
//!
//! Every struct deserializes with `#[serde(default)]`, so a JSON config only
//! needs the fields it changes. Out-of-range values are not rejected: they are
//! clamped by `sanitize`, which logs a warning per offending field.

use crate::cluster::ClusterStrategy;
use crate::error::{clamp_parameter, HoughError};
use crate::hough::HoughParams;
use crate::maxima::MaximaParams;
use crate::structure::StructureParams;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters for the six-stage pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorParams {
    /// Binarization cutoff in `[0, 1]`; samples strictly above it are on.
    pub threshold: f32,
    /// Accumulator margin, θ resolution and voting slant window.
    pub hough: HoughParams,
    /// Minimum votes for a parameter-space maximum.
    pub maxima: MaximaParams,
    /// How adjacent maxima are merged.
    pub cluster: ClusterStrategy,
    /// Output slant window and minimum line extent.
    pub structure: StructureParams,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            hough: HoughParams::default(),
            maxima: MaximaParams::default(),
            cluster: ClusterStrategy::default(),
            structure: StructureParams::default(),
        }
    }
}

impl DetectorParams {
    /// Clamp every field into its domain, returning one error per change.
    pub fn sanitize(&mut self) -> Vec<HoughError> {
        let mut errs = Vec::new();
        let (t, e) = clamp_parameter("threshold", self.threshold as f64, 0.0, 1.0);
        self.threshold = t as f32;
        errs.extend(e);
        errs.extend(self.hough.sanitize());
        errs.extend(self.maxima.sanitize());
        errs.extend(self.structure.sanitize());
        errs
    }
}
