//! Local maxima of a parameter-space raster.
//!
//! A cell survives when its value is strictly above the threshold and it is a
//! local maximum over its 8-connected neighborhood. Ties are resolved in favor
//! of the cell met first in raster order (top-to-bottom, left-to-right): a
//! cell must be strictly greater than the four neighbors preceding it and at
//! least as large as the four following it. Surviving cells keep their value,
//! everything else (including the margin) is zero.
//!
//! Neighbor reads go through [`Raster::get_padded`], so cells on the border
//! compare against zero whether or not the raster carries a margin.
//!
//! When the accumulator spans the full half turn `[0, π)` the θ axis is
//! closed: `(r, θ)` and `(−r, θ − π)` are the same line, so the neighbors left
//! of column 0 are the last column with r mirrored, and vice versa. Ties
//! across that seam go to column 0.
use crate::error::{clamp_parameter, HoughError};
use crate::hough::{AccumulatorGeometry, HoughSpace};
use crate::image::Raster;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// 8-neighborhood as `(dx, dy, precedes)`; a preceding neighbor wins ties.
const NEIGHBORS: [(isize, isize, bool); 8] = [
    (-1, -1, true),
    (0, -1, true),
    (1, -1, true),
    (-1, 0, true),
    (1, 0, false),
    (-1, 1, false),
    (0, 1, false),
    (1, 1, false),
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaximaParams {
    /// Largest vote count still rejected as background.
    pub threshold: f32,
}

impl Default for MaximaParams {
    fn default() -> Self {
        Self { threshold: 20.0 }
    }
}

impl MaximaParams {
    pub fn sanitize(&mut self) -> Vec<HoughError> {
        let (t, e) = clamp_parameter("maxima.threshold", self.threshold as f64, 0.0, f64::MAX);
        self.threshold = t as f32;
        e.into_iter().collect()
    }
}

/// Sparse map of accumulator maxima sharing the accumulator geometry.
#[derive(Clone, Debug)]
pub struct MaximaMap {
    raster: Raster,
    geometry: AccumulatorGeometry,
}

impl MaximaMap {
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

    /// Number of marked cells.
    pub fn count(&self) -> usize {
        self.raster.count_nonzero()
    }
}

impl HoughSpace {
    /// Locate the accumulator maxima above `params.threshold`.
    ///
    /// The θ axis wraps when the geometry covers the full half turn.
    pub fn find_maxima(&self, params: &MaximaParams) -> MaximaMap {
        let wrap = self.geometry().wraps_theta();
        MaximaMap {
            raster: suppress(self.raster(), params.threshold, wrap),
            geometry: *self.geometry(),
        }
    }
}

/// Returns a raster with the same layout as `acc` keeping only local maxima
/// strictly above `threshold`. Columns are not wrapped.
pub fn find_maxima(acc: &Raster, threshold: f32) -> Raster {
    suppress(acc, threshold, false)
}

fn suppress(acc: &Raster, threshold: f32, wrap_theta: bool) -> Raster {
    let (t, _) = clamp_parameter("maxima.threshold", threshold as f64, 0.0, f64::MAX);
    let t = t as f32;

    let (w, h) = acc.dimensions();
    let (wi, hi) = (w as isize, h as isize);
    let margin = acc.margin();
    let mut out = acc.zeroed_like();
    let (stride, _) = out.padded_dimensions();

    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .skip(margin)
        .take(h)
        .for_each(|(py, row)| {
            let y = (py - margin) as isize;
            for x in 0..w {
                let v = acc.get_padded(x as isize, y);
                if !(v > t) {
                    continue;
                }
                let xi = x as isize;
                let beaten = NEIGHBORS.iter().any(|&(dx, dy, precedes)| {
                    let nx = xi + dx;
                    if wrap_theta && !(0..wi).contains(&nx) {
                        // across the seam: column 0 wins ties
                        let (sx, precedes) = if nx < 0 { (wi - 1, false) } else { (0, true) };
                        let n = acc.get_padded(sx, hi - 1 - (y + dy));
                        return if precedes { n >= v } else { n > v };
                    }
                    let n = acc.get_padded(nx, y + dy);
                    if precedes { n >= v } else { n > v }
                });
                if !beaten {
                    row[margin + x] = v;
                }
            }
        });

    out
}
