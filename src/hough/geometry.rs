//! Mapping between accumulator raster indices and continuous `(r, θ)`.
//!
//! Columns index θ, rows index r:
//!
//! - `θ(col) = (first_bin + col) · Δθ` with `Δθ = π / theta_bins`.
//! - `r(row) = row − r_offset`, where votes are cast at
//!   `row = round(x·cosθ + y·sinθ) + r_offset`.
//! - `r_offset = ceil(hypot(W + 2m, H + 2m))` for an input of logical size
//!   `W × H` with margin `m`, and the raster has `2·r_offset + 1` rows, so no
//!   vote ever falls outside.
//!
//! The geometry travels with every parameter-space raster so that the maxima,
//! clustering and structure stages invert the encoding exactly.
use crate::angle::{normalize_half_turn, theta_from_slant};
use crate::error::{clamp_parameter, HoughError};
use crate::image::{ImageView, Raster};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Allowed line directions in degrees, `[min_deg, max_deg)` within `[−90, 90]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlantRange {
    pub min_deg: f64,
    pub max_deg: f64,
}

impl Default for SlantRange {
    fn default() -> Self {
        Self {
            min_deg: -90.0,
            max_deg: 90.0,
        }
    }
}

impl SlantRange {
    pub fn new(min_deg: f64, max_deg: f64) -> Self {
        Self { min_deg, max_deg }
    }

    /// Clamp both bounds into `[−90, 90]` and order them.
    pub fn sanitize(&mut self) -> Vec<HoughError> {
        let (min, e0) = clamp_parameter("slant.minDeg", self.min_deg, -90.0, 90.0);
        let (max, e1) = clamp_parameter("slant.maxDeg", self.max_deg, -90.0, 90.0);
        self.min_deg = min.min(max);
        self.max_deg = min.max(max);
        e0.into_iter().chain(e1).collect()
    }

    #[inline]
    pub fn min_rad(&self) -> f64 {
        self.min_deg.to_radians()
    }

    #[inline]
    pub fn max_rad(&self) -> f64 {
        self.max_deg.to_radians()
    }

    /// Inclusive membership test for a slant in radians.
    pub fn contains_rad(&self, slant: f64) -> bool {
        const EPS: f64 = 1e-9;
        slant >= self.min_rad() - EPS && slant <= self.max_rad() + EPS
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatorGeometry {
    /// Logical width of the spatial input.
    pub image_width: usize,
    /// Logical height of the spatial input.
    pub image_height: usize,
    /// Number of θ bins covering `[0, π)`.
    pub theta_bins: usize,
    /// Bin index of accumulator column 0.
    pub first_bin: usize,
    /// Number of accumulated θ columns.
    pub theta_count: usize,
    /// Row index of `r = 0`.
    pub r_offset: usize,
}

impl AccumulatorGeometry {
    /// Geometry for an input of logical size `w × h` with margin `margin`.
    ///
    /// `theta_bins` must be positive; callers clamp it beforehand.
    pub fn new(w: usize, h: usize, margin: usize, theta_bins: usize, slant: SlantRange) -> Self {
        let theta_bins = theta_bins.max(1);
        let step = PI / theta_bins as f64;
        let theta_min = theta_from_slant(slant.min_rad()).clamp(0.0, PI);
        let theta_max = theta_from_slant(slant.max_rad()).clamp(0.0, PI);

        let first_bin = ((theta_min / step - 1e-9).ceil().max(0.0) as usize).min(theta_bins - 1);
        let mut end_bin = ((theta_max / step - 1e-9).ceil().max(0.0) as usize).min(theta_bins);
        if end_bin <= first_bin {
            end_bin = first_bin + 1;
        }

        let padded_w = (w + 2 * margin) as f64;
        let padded_h = (h + 2 * margin) as f64;
        let r_offset = padded_w.hypot(padded_h).ceil() as usize;

        Self {
            image_width: w,
            image_height: h,
            theta_bins,
            first_bin,
            theta_count: end_bin - first_bin,
            r_offset,
        }
    }

    #[inline]
    pub fn theta_step(&self) -> f64 {
        PI / self.theta_bins as f64
    }

    #[inline]
    pub fn r_count(&self) -> usize {
        2 * self.r_offset + 1
    }

    /// Logical accumulator size `(columns, rows)` = `(θ count, r count)`.
    #[inline]
    pub fn raster_dimensions(&self) -> (usize, usize) {
        (self.theta_count, self.r_count())
    }

    /// θ in radians at a (possibly fractional) column.
    #[inline]
    pub fn theta_at(&self, col: f64) -> f64 {
        (self.first_bin as f64 + col) * self.theta_step()
    }

    /// Fractional column of θ; may fall outside the accumulated range.
    #[inline]
    pub fn col_of(&self, theta: f64) -> f64 {
        normalize_half_turn(theta) / self.theta_step() - self.first_bin as f64
    }

    /// Signed distance r at a (possibly fractional) row.
    #[inline]
    pub fn r_at(&self, row: f64) -> f64 {
        row - self.r_offset as f64
    }

    /// Fractional row of a distance r.
    #[inline]
    pub fn row_of(&self, r: f64) -> f64 {
        r + self.r_offset as f64
    }

    /// Row receiving the vote for distance `r`.
    #[inline]
    pub fn vote_row(&self, r: f64) -> usize {
        let row = r.round() as i64 + self.r_offset as i64;
        debug_assert!(row >= 0 && (row as usize) < self.r_count());
        row as usize
    }

    /// Whether the columns cover the whole half turn `[0, π)`, so that the
    /// last column is adjacent to column 0 with r mirrored.
    #[inline]
    pub fn wraps_theta(&self) -> bool {
        self.first_bin == 0 && self.theta_count == self.theta_bins && self.theta_count > 1
    }

    /// Ensure `raster` has the logical layout described by this geometry.
    pub fn check(&self, raster: &Raster) -> Result<(), HoughError> {
        let found = (raster.width(), raster.height());
        let expected = self.raster_dimensions();
        if found != expected {
            return Err(HoughError::DimensionMismatch { expected, found });
        }
        Ok(())
    }
}
