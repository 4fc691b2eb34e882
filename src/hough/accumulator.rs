use super::geometry::{AccumulatorGeometry, SlantRange};
use crate::error::{clamp_parameter, HoughError};
use crate::image::{ImageView, Raster};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

const MAX_MARGIN: usize = 64;
const MAX_THETA_BINS: usize = 3600;

/// Options for the Hough accumulation stage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoughParams {
    /// Zero padding around the parameter-space raster.
    pub margin: usize,
    /// Number of θ bins over `[0, π)`.
    pub theta_bins: usize,
    /// Line directions that receive votes.
    pub slant: SlantRange,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            margin: 1,
            theta_bins: 180,
            slant: SlantRange::default(),
        }
    }
}

impl HoughParams {
    /// Clamp every field into its domain, returning what had to change.
    pub fn sanitize(&mut self) -> Vec<HoughError> {
        let mut errs = Vec::new();
        let (margin, e) = clamp_parameter(
            "hough.margin",
            self.margin as f64,
            0.0,
            MAX_MARGIN as f64,
        );
        self.margin = margin as usize;
        errs.extend(e);
        let (bins, e) = clamp_parameter(
            "hough.thetaBins",
            self.theta_bins as f64,
            1.0,
            MAX_THETA_BINS as f64,
        );
        self.theta_bins = bins as usize;
        errs.extend(e);
        errs.extend(self.slant.sanitize());
        errs
    }
}

/// Parameter-space raster together with the geometry that produced it.
#[derive(Clone, Debug)]
pub struct HoughSpace {
    raster: Raster,
    geometry: AccumulatorGeometry,
}

impl HoughSpace {
    /// Pair an externally produced raster with its geometry.
    pub fn from_parts(raster: Raster, geometry: AccumulatorGeometry) -> Result<Self, HoughError> {
        geometry.check(&raster)?;
        Ok(Self { raster, geometry })
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn geometry(&self) -> &AccumulatorGeometry {
        &self.geometry
    }

    pub fn into_parts(self) -> (Raster, AccumulatorGeometry) {
        (self.raster, self.geometry)
    }

    /// Highest vote count.
    pub fn peak(&self) -> f32 {
        self.raster.max_value()
    }
}

/// Accumulate Hough votes for every on-pixel (sample > 0) of `binary`.
///
/// Rows are processed in parallel into per-worker partial accumulators that
/// are summed afterwards, so no cell is ever updated concurrently.
pub fn accumulate(binary: &Raster, params: &HoughParams) -> HoughSpace {
    let mut params = *params;
    params.sanitize();

    let (w, h) = binary.dimensions();
    let geometry =
        AccumulatorGeometry::new(w, h, binary.margin(), params.theta_bins, params.slant);
    let (cols, rows) = geometry.raster_dimensions();

    let trig: Vec<(f64, f64)> = (0..cols)
        .map(|c| {
            let theta = geometry.theta_at(c as f64);
            (theta.cos(), theta.sin())
        })
        .collect();

    let votes = (0..h)
        .into_par_iter()
        .fold(
            || vec![0u32; cols * rows],
            |mut acc, y| {
                let fy = y as f64;
                for (x, &v) in binary.row(y).iter().enumerate() {
                    if !(v > 0.0) {
                        continue;
                    }
                    let fx = x as f64;
                    for (c, &(cos, sin)) in trig.iter().enumerate() {
                        let row = geometry.vote_row(fx * cos + fy * sin);
                        acc[row * cols + c] += 1;
                    }
                }
                acc
            },
        )
        .reduce(
            || vec![0u32; cols * rows],
            |mut a, b| {
                for (dst, src) in a.iter_mut().zip(b) {
                    *dst += src;
                }
                a
            },
        );

    let mut raster = Raster::alloc(cols, rows, params.margin);
    for (row, counts) in votes.chunks_exact(cols).enumerate() {
        for (dst, &n) in raster.row_mut(row).iter_mut().zip(counts) {
            *dst = n as f32;
        }
    }

    HoughSpace { raster, geometry }
}
