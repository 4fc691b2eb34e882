//! Global binarization of a luminance raster.
//!
//! Every sample strictly above the cutoff becomes `1.0`, everything else
//! (including NaN) becomes `0.0`. The cutoff lives in `[0, 1]`; values outside
//! are clamped with a warning. Because the cutoff is never negative the zero
//! margin stays zero, so the whole padded storage can be processed row by row
//! in parallel.
use crate::error::clamp_parameter;
use crate::image::Raster;
use rayon::prelude::*;

/// Returns a binarized copy of `image`.
pub fn threshold(image: &Raster, thresh: f32) -> Raster {
    let mut out = image.clone();
    threshold_mut(&mut out, thresh);
    out
}

/// Binarizes `image` in place.
pub fn threshold_mut(image: &mut Raster, thresh: f32) {
    let (t, _) = clamp_parameter("threshold", thresh as f64, 0.0, 1.0);
    let t = t as f32;
    let (stride, _) = image.padded_dimensions();
    image.data_mut().par_chunks_mut(stride).for_each(|row| {
        for v in row.iter_mut() {
            *v = if *v > t { 1.0 } else { 0.0 };
        }
    });
}
