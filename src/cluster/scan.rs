//! Single-pass cluster tracing over a maxima raster.
//!
//! Assumptions (not checked):
//! - every connected blob of nonzero pixels is convex, and
//! - when the cursor reaches a pixel, every pixel above it and to its left
//!   has already been examined.
//!
//! Under these assumptions a blob is fully described by one run of nonzero
//! pixels per row, each run overlapping (8-connected) the run above it. The
//! tracer consumes the run in the current row, then looks for the run in the
//! next row: first under the start of the previous run, otherwise across the
//! previous run's column span widened by one on each side. When found, it
//! backs up to the start of that run and repeats; when not, the cluster is
//! closed.
//!
//! Every traced pixel is zeroed as soon as it is added, so a pixel is never
//! counted twice and the outer raster scan only ever starts clusters at
//! unconsumed pixels. Concave or self-touching blobs can be split into
//! several clusters; use the connected-component strategy for those.
use super::cluster::{Centroid, Cluster};
use crate::image::Raster;

/// Trace and consume every cluster of `map`, returning centroids in the order
/// the clusters were closed (the raster order of their first pixel).
///
/// `map` is all zero afterwards.
pub fn extract_convex(map: &mut Raster) -> Vec<Centroid> {
    let (w, h) = map.dimensions();
    let mut centroids = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if map.get(x, y) != 0.0 {
                let cluster = trace_cluster(map, x, y);
                centroids.extend(cluster.centroid());
            }
        }
    }
    centroids
}

fn trace_cluster(map: &mut Raster, x: usize, y: usize) -> Cluster {
    let (w, h) = map.dimensions();
    let mut cluster = Cluster::default();
    let mut start = x;
    let mut row = y;

    loop {
        let mut end = start;
        while end < w {
            let v = map.get(end, row);
            if v == 0.0 {
                break;
            }
            cluster.push(row, end, v);
            map.set(end, row, 0.0);
            end += 1;
        }

        row += 1;
        if row >= h {
            break;
        }

        let continuation = if map.get(start, row) != 0.0 {
            Some(start)
        } else {
            let lo = start.saturating_sub(1);
            let hi = end.min(w - 1);
            (lo..=hi).find(|&c| map.get(c, row) != 0.0)
        };

        match continuation {
            Some(mut c) => {
                while c > 0 && map.get(c - 1, row) != 0.0 {
                    c -= 1;
                }
                start = c;
            }
            None => break,
        }
    }

    cluster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proptest_utils::{arbitrary_raster, sparse_samples};
    use proptest::prelude::*;

    fn raster_from_rows(rows: &[&[f32]]) -> Raster {
        Raster::from_fn(rows[0].len(), rows.len(), 1, |x, y| rows[y][x]).unwrap()
    }

    #[test]
    fn convex_blob_becomes_one_weighted_centroid() {
        let mut map = raster_from_rows(&[
            &[0.0, 0.0, 0.0, 0.0, 0.0],
            &[0.0, 1.0, 1.0, 0.0, 0.0],
            &[0.0, 1.0, 4.0, 1.0, 0.0],
            &[0.0, 0.0, 1.0, 0.0, 0.0],
        ]);
        let centroids = extract_convex(&mut map);
        assert_eq!(centroids.len(), 1);
        let c = centroids[0];
        assert_eq!(c.pixel_count, 6);
        assert_eq!(c.weight, 9.0);
        // rows: 1·2 + 2·6 + 3·1 = 17, cols: 1+2+1+8+3+2 = 17
        assert!((c.r - 17.0 / 9.0).abs() < 1e-12);
        assert!((c.theta - 17.0 / 9.0).abs() < 1e-12);
        assert_eq!(map.count_nonzero(), 0);
    }

    #[test]
    fn follows_runs_drifting_left_and_right() {
        let mut left = raster_from_rows(&[&[0.0, 0.0, 2.0], &[0.0, 2.0, 0.0], &[2.0, 0.0, 0.0]]);
        let got = extract_convex(&mut left);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].pixel_count, 3);

        let mut right = raster_from_rows(&[
            &[2.0, 0.0, 0.0, 0.0],
            &[0.0, 2.0, 2.0, 0.0],
            &[0.0, 0.0, 0.0, 2.0],
        ]);
        let got = extract_convex(&mut right);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].pixel_count, 4);
    }

    #[test]
    fn separated_blobs_are_emitted_in_raster_order() {
        let mut map = raster_from_rows(&[
            &[0.0, 0.0, 0.0, 5.0, 5.0],
            &[0.0, 0.0, 0.0, 5.0, 0.0],
            &[3.0, 0.0, 0.0, 0.0, 0.0],
        ]);
        let got = extract_convex(&mut map);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].pixel_count, 3);
        assert!((got[0].theta - 10.0 / 3.0).abs() < 1e-12);
        assert_eq!((got[1].r, got[1].theta), (2.0, 0.0));
    }

    #[test]
    fn concave_blob_is_split() {
        let mut map = raster_from_rows(&[&[1.0, 0.0, 1.0], &[1.0, 0.0, 1.0], &[1.0, 1.0, 1.0]]);
        let got = extract_convex(&mut map);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].pixel_count + got[1].pixel_count, 7);
    }

    #[test]
    fn empty_map_yields_nothing() {
        let mut map = Raster::new(6, 4, 2).unwrap();
        assert!(extract_convex(&mut map).is_empty());
    }

    proptest! {
        #[test]
        fn every_nonzero_pixel_lands_in_exactly_one_cluster(
            map in arbitrary_raster(1..=14, 1..=14, sparse_samples()),
        ) {
            let expected = map.count_nonzero() as u32;
            let mut work = map.clone();
            let got = extract_convex(&mut work);
            prop_assert_eq!(got.iter().map(|c| c.pixel_count).sum::<u32>(), expected);
            prop_assert_eq!(work.count_nonzero(), 0);
        }
    }
}
