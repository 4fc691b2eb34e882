//! Strategies generating rasters for property tests.
use crate::image::Raster;
use proptest::prelude::*;
use std::ops::RangeInclusive;

/// Rasters with dimensions drawn from the given ranges, a margin in `0..=2`
/// and logical samples produced by `samples`.
pub(crate) fn arbitrary_raster<S>(
    width: RangeInclusive<usize>,
    height: RangeInclusive<usize>,
    samples: S,
) -> BoxedStrategy<Raster>
where
    S: Strategy<Value = f32> + Clone + 'static,
{
    (width, height, 0usize..=2)
        .prop_flat_map(move |(w, h, margin)| {
            proptest::collection::vec(samples.clone(), w * h)
                .prop_map(move |v| fill(w, h, margin, &v))
        })
        .boxed()
}

/// Sparse binary rasters: each logical pixel is on with probability ~1/4.
pub(crate) fn binary_raster(
    width: RangeInclusive<usize>,
    height: RangeInclusive<usize>,
) -> BoxedStrategy<Raster> {
    arbitrary_raster(
        width,
        height,
        prop_oneof![3 => Just(0.0f32), 1 => Just(1.0f32)],
    )
}

/// Mostly zero samples with occasional positive values in `[1, 5)`.
pub(crate) fn sparse_samples() -> BoxedStrategy<f32> {
    prop_oneof![3 => Just(0.0f32), 1 => 1.0f32..5.0].boxed()
}

fn fill(w: usize, h: usize, margin: usize, v: &[f32]) -> Raster {
    Raster::from_fn(w, h, margin, |x, y| v[y * w + x]).expect("non-empty dimensions")
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::image::ImageView;

    proptest! {
        #[test]
        fn arbitrary_raster_respects_ranges(r in arbitrary_raster(1..=6, 2..=9, 0.0f32..1.0)) {
            prop_assert!((1..=6).contains(&r.width()));
            prop_assert!((2..=9).contains(&r.height()));
            prop_assert!(r.margin() <= 2);
        }
    }
}
