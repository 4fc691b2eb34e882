use serde::Serialize;

/// Weighted mean position of one cluster of maxima, in fractional
/// accumulator raster coordinates (`r` is the row, `theta` the column).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Centroid {
    pub r: f64,
    pub theta: f64,
    /// Sum of the cluster's sample values (votes).
    pub weight: f64,
    pub pixel_count: u32,
}

/// Running sums of a cluster while it is being traced.
#[derive(Clone, Debug, Default)]
pub(crate) struct Cluster {
    pub sum_r: f64,
    pub sum_theta: f64,
    pub weight: f64,
    pub pixel_count: u32,
}

impl Cluster {
    pub(crate) fn push(&mut self, row: usize, col: usize, value: f32) {
        let v = value as f64;
        self.sum_r += row as f64 * v;
        self.sum_theta += col as f64 * v;
        self.weight += v;
        self.pixel_count += 1;
    }

    /// Centroid of the accumulated pixels; `None` for an empty or weightless
    /// cluster.
    pub(crate) fn centroid(&self) -> Option<Centroid> {
        if self.pixel_count == 0 || self.weight <= 0.0 {
            return None;
        }
        Some(Centroid {
            r: self.sum_r / self.weight,
            theta: self.sum_theta / self.weight,
            weight: self.weight,
            pixel_count: self.pixel_count,
        })
    }
}
