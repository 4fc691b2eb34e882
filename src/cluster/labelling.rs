//! Two-pass connected-component labelling (8-connectivity) over a maxima
//! raster. Makes no convexity assumption, at the cost of a label buffer the
//! size of the raster.
use super::cluster::{Centroid, Cluster};
use super::union_find::DisjointSetForest;
use crate::image::Raster;

/// Neighbors already labelled when the first pass reaches a pixel.
const PRECEDING: [(isize, isize); 4] = [(-1, 0), (-1, -1), (0, -1), (1, -1)];

/// Group the nonzero pixels of `map` into 8-connected components and return
/// one centroid per component, ordered by each component's first pixel in
/// raster order. `map` is left untouched.
pub fn extract_connected(map: &Raster) -> Vec<Centroid> {
    let (w, h) = map.dimensions();
    let mut labels = vec![0usize; w * h];
    let mut forest = DisjointSetForest::new(1);

    for y in 0..h {
        for x in 0..w {
            if map.get(x, y) == 0.0 {
                continue;
            }
            let mut label = 0usize;
            for &(dx, dy) in &PRECEDING {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= w as isize {
                    continue;
                }
                let neighbor = labels[ny as usize * w + nx as usize];
                if neighbor == 0 {
                    continue;
                }
                if label == 0 {
                    label = neighbor;
                } else {
                    forest.union(label, neighbor);
                }
            }
            if label == 0 {
                label = forest.push();
            }
            labels[y * w + x] = label;
        }
    }

    // slot[root] is the index of the component in emission order
    let mut slot: Vec<Option<usize>> = Vec::new();
    let mut clusters: Vec<Cluster> = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let label = labels[y * w + x];
            if label == 0 {
                continue;
            }
            let root = forest.root(label);
            if slot.len() <= root {
                slot.resize(root + 1, None);
            }
            let idx = *slot[root].get_or_insert_with(|| {
                clusters.push(Cluster::default());
                clusters.len() - 1
            });
            clusters[idx].push(y, x, map.get(x, y));
        }
    }

    clusters.iter().filter_map(Cluster::centroid).collect()
}
