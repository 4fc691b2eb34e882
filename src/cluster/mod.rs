//! Condensing blobs of adjacent maxima into one centroid per detected line.
//!
//! Two strategies are available:
//!
//! - [`ClusterStrategy::ConvexScan`] (default): a single top-to-bottom,
//!   left-to-right pass that traces each blob row by row and zeroes every
//!   pixel it consumes. O(pixels), no auxiliary buffers, but relies on every
//!   blob being convex. See [`scan`] for the exact assumptions.
//! - [`ClusterStrategy::ConnectedComponents`]: two-pass union-find labelling
//!   with 8-connectivity. Handles concave or touching blobs at the cost of a
//!   label buffer the size of the map.
//!
//! Both emit centroids ordered by the raster position of each cluster's first
//! pixel, and agree exactly on convex input.

mod cluster;
pub mod labelling;
pub mod scan;
mod union_find;

pub use cluster::Centroid;
pub use labelling::extract_connected;
pub use scan::extract_convex;

use crate::maxima::MaximaMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClusterStrategy {
    #[default]
    ConvexScan,
    ConnectedComponents,
}

impl ClusterStrategy {
    /// Consume a maxima map and return its cluster centroids.
    pub fn extract(self, map: MaximaMap) -> Vec<Centroid> {
        let (mut raster, _) = map.into_parts();
        match self {
            ClusterStrategy::ConvexScan => extract_convex(&mut raster),
            ClusterStrategy::ConnectedComponents => extract_connected(&raster),
        }
    }
}
