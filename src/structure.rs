//! Turning cluster centroids into line descriptors.
//!
//! Each centroid is mapped back through the accumulator geometry to a
//! continuous `(r, θ)` line, clipped against the logical image rectangle
//! `[0, W] × [0, H]`, and described by its direction (slant) and the
//! horizontal/vertical extent of the clipped segment. Lines that miss the
//! image, fall outside the slant window, or are too small are dropped; the
//! survivors keep the centroid order.
use crate::angle::slant_from_theta;
use crate::cluster::Centroid;
use crate::error::{clamp_parameter, HoughError};
use crate::hough::{AccumulatorGeometry, SlantRange};
use log::debug;
use serde::{Deserialize, Serialize};

const EPS: f64 = 1e-9;

/// Filters applied to the reconstructed lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructureParams {
    /// Directions that may be emitted. Independent from the accumulation
    /// window, so it can be narrower than the range that received votes.
    pub slant: SlantRange,
    /// Minimum horizontal extent of the clipped segment, in pixels.
    pub min_width: f64,
    /// Minimum vertical extent of the clipped segment, in pixels.
    pub min_height: f64,
}

impl Default for StructureParams {
    fn default() -> Self {
        Self {
            slant: SlantRange::default(),
            min_width: 0.0,
            min_height: 0.0,
        }
    }
}

impl StructureParams {
    pub fn sanitize(&mut self) -> Vec<HoughError> {
        let mut errs = self.slant.sanitize();
        let (w, e) = clamp_parameter("structure.minWidth", self.min_width, 0.0, f64::MAX);
        self.min_width = w;
        errs.extend(e);
        let (h, e) = clamp_parameter("structure.minHeight", self.min_height, 0.0, f64::MAX);
        self.min_height = h;
        errs.extend(e);
        errs
    }
}

/// A detected straight line in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedLine {
    /// Signed distance of the line from the image origin, in pixels.
    pub r: f64,
    /// Angle of the line normal in radians, `[0, π)`.
    pub theta: f64,
    /// Line direction in radians, `theta − π/2`.
    pub slant: f64,
    /// `|x1 − x0|` of the clipped segment.
    pub width: f64,
    /// `|y1 − y0|` of the clipped segment.
    pub height: f64,
    /// Segment endpoints where the line crosses the image border.
    pub p0: [f64; 2],
    pub p1: [f64; 2],
    /// Votes collected by the originating cluster.
    pub weight: f64,
}

/// Reconstruct and filter lines from cluster centroids, preserving order.
pub fn build_lines(
    centroids: &[Centroid],
    geometry: &AccumulatorGeometry,
    params: &StructureParams,
) -> Vec<DetectedLine> {
    let mut params = *params;
    params.sanitize();

    let w = geometry.image_width as f64;
    let h = geometry.image_height as f64;

    let mut lines = Vec::with_capacity(centroids.len());
    for c in centroids {
        let r = geometry.r_at(c.r);
        let theta = geometry.theta_at(c.theta);
        let slant = slant_from_theta(theta);
        if !params.slant.contains_rad(slant) {
            debug!(
                "drop line r={r:.2} slant={:.2}°: outside slant window",
                slant.to_degrees()
            );
            continue;
        }
        let Some((p0, p1)) = clip_to_rect(r, theta, w, h) else {
            debug!("drop line r={r:.2} theta={theta:.4}: misses the image");
            continue;
        };
        let width = (p1[0] - p0[0]).abs();
        let height = (p1[1] - p0[1]).abs();
        if width + EPS < params.min_width || height + EPS < params.min_height {
            debug!("drop line r={r:.2} extent={width:.1}x{height:.1}: below minimum size");
            continue;
        }
        lines.push(DetectedLine {
            r,
            theta,
            slant,
            width,
            height,
            p0,
            p1,
            weight: c.weight,
        });
    }
    lines
}

/// Intersect `x·cosθ + y·sinθ = r` with `[0, w] × [0, h]`.
///
/// Returns the two most distant border crossings, or `None` when the line
/// misses the rectangle or only touches a corner.
pub fn clip_to_rect(r: f64, theta: f64, w: f64, h: f64) -> Option<([f64; 2], [f64; 2])> {
    let (sin, cos) = theta.sin_cos();
    let inside = |v: f64, hi: f64| v >= -EPS && v <= hi + EPS;

    let mut points: Vec<[f64; 2]> = Vec::with_capacity(4);
    if sin.abs() > EPS {
        for x in [0.0, w] {
            let y = (r - x * cos) / sin;
            if inside(y, h) {
                points.push([x, y.clamp(0.0, h)]);
            }
        }
    }
    if cos.abs() > EPS {
        for y in [0.0, h] {
            let x = (r - y * sin) / cos;
            if inside(x, w) {
                points.push([x.clamp(0.0, w), y]);
            }
        }
    }

    let mut best: Option<([f64; 2], [f64; 2], f64)> = None;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = (a[0] - b[0]).hypot(a[1] - b[1]);
            if d > EPS && best.map_or(true, |(_, _, bd)| d > bd) {
                best = Some((*a, *b, d));
            }
        }
    }
    let (a, b, _) = best?;
    if (a[0], a[1]) <= (b[0], b[1]) {
        Some((a, b))
    } else {
        Some((b, a))
    }
}
