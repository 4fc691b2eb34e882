//! Owned single-channel f32 raster with an optional zero margin.
//!
//! Storage is row-major over the padded extent
//! `(w + 2·margin) × (h + 2·margin)`. Logical coordinates `(x, y)` address the
//! unpadded interior; the margin ring stays zero unless a margin-aware stage
//! (Hough accumulation, maxima search) reads it through [`Raster::get_padded`].
use super::u8::ImageU8;
use super::ImageView;
use crate::error::HoughError;

#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    w: usize,
    h: usize,
    margin: usize,
    stride: usize,
    data: Vec<f32>,
}

impl Raster {
    /// Construct a zero-initialized raster of logical size `w × h`.
    pub fn new(w: usize, h: usize, margin: usize) -> Result<Self, HoughError> {
        if w == 0 || h == 0 {
            return Err(HoughError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        Ok(Self::alloc(w, h, margin))
    }

    /// Zeroed allocation for callers that already guarantee `w, h > 0`.
    pub(crate) fn alloc(w: usize, h: usize, margin: usize) -> Self {
        debug_assert!(w > 0 && h > 0);
        let stride = w + 2 * margin;
        Self {
            w,
            h,
            margin,
            stride,
            data: vec![0.0; stride * (h + 2 * margin)],
        }
    }

    /// Wrap padded sample storage. `data.len()` must equal the padded extent.
    pub fn from_vec(w: usize, h: usize, margin: usize, data: Vec<f32>) -> Result<Self, HoughError> {
        let mut raster = Self::new(w, h, margin)?;
        if data.len() != raster.data.len() {
            return Err(HoughError::MalformedBuffer {
                expected: raster.data.len(),
                found: data.len(),
            });
        }
        raster.data = data;
        Ok(raster)
    }

    /// Build a raster by evaluating `f(x, y)` for every logical pixel.
    pub fn from_fn<F>(w: usize, h: usize, margin: usize, mut f: F) -> Result<Self, HoughError>
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut raster = Self::new(w, h, margin)?;
        for y in 0..h {
            for x in 0..w {
                raster.set(x, y, f(x, y));
            }
        }
        Ok(raster)
    }

    /// Decode an 8-bit luminance view into samples normalized to `[0, 1]`.
    pub fn from_u8_view(view: &ImageU8<'_>, margin: usize) -> Result<Self, HoughError> {
        let mut raster = Self::new(view.w, view.h, margin)?;
        let needed = if view.h == 0 {
            0
        } else {
            (view.h - 1) * view.stride + view.w
        };
        if view.stride < view.w || view.data.len() < needed {
            return Err(HoughError::MalformedBuffer {
                expected: needed,
                found: view.data.len(),
            });
        }
        for y in 0..view.h {
            let src = view.row(y);
            for (dst, &px) in raster.row_mut(y).iter_mut().zip(src) {
                *dst = px as f32 / 255.0;
            }
        }
        Ok(raster)
    }

    /// A zeroed raster with the same logical size and margin.
    pub fn zeroed_like(&self) -> Self {
        Self {
            w: self.w,
            h: self.h,
            margin: self.margin,
            stride: self.stride,
            data: vec![0.0; self.data.len()],
        }
    }

    #[inline]
    pub fn margin(&self) -> usize {
        self.margin
    }

    /// Logical dimensions `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// Padded dimensions `(width + 2·margin, height + 2·margin)`.
    #[inline]
    pub fn padded_dimensions(&self) -> (usize, usize) {
        (self.stride, self.h + 2 * self.margin)
    }

    #[inline]
    /// Convert logical (x, y) to a linear index into the padded storage.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y + self.margin) * self.stride + x + self.margin
    }

    #[inline]
    /// Get the sample at logical (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        debug_assert!(x < self.w && y < self.h, "({x}, {y}) outside raster");
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the sample at logical (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        debug_assert!(x < self.w && y < self.h, "({x}, {y}) outside raster");
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Checked read.
    pub fn try_get(&self, x: usize, y: usize) -> Result<f32, HoughError> {
        self.check_bounds(x, y)?;
        Ok(self.data[self.idx(x, y)])
    }

    /// Checked write.
    pub fn try_set(&mut self, x: usize, y: usize, v: f32) -> Result<(), HoughError> {
        self.check_bounds(x, y)?;
        let i = self.idx(x, y);
        self.data[i] = v;
        Ok(())
    }

    /// Read a sample by logical coordinates that may reach into the margin.
    ///
    /// Anything beyond the padded storage reads as zero, so neighbor scans
    /// need no border special cases even with a zero margin.
    #[inline]
    pub fn get_padded(&self, x: isize, y: isize) -> f32 {
        let m = self.margin as isize;
        let px = x + m;
        let py = y + m;
        let (pw, ph) = self.padded_dimensions();
        if px < 0 || py < 0 || px >= pw as isize || py >= ph as isize {
            return 0.0;
        }
        self.data[py as usize * self.stride + px as usize]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = self.idx(0, y);
        &mut self.data[start..start + self.w]
    }

    /// Raw padded storage.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Raw padded storage. Writers must keep the margin zero.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Number of nonzero logical samples.
    pub fn count_nonzero(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&v| v != 0.0).count())
            .sum()
    }

    /// Largest logical sample, or 0 for an all-zero raster.
    pub fn max_value(&self) -> f32 {
        self.rows()
            .flat_map(|row| row.iter().copied())
            .fold(0.0f32, f32::max)
    }

    /// Sum of all logical samples.
    pub fn sum(&self) -> f64 {
        self.rows()
            .flat_map(|row| row.iter())
            .map(|&v| v as f64)
            .sum()
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), HoughError> {
        if x >= self.w || y >= self.h {
            return Err(HoughError::OutOfBounds {
                x,
                y,
                width: self.w,
                height: self.h,
            });
        }
        Ok(())
    }
}

impl ImageView for Raster {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = self.idx(0, y);
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Raster::new(0, 4, 1),
            Err(HoughError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(Raster::new(3, 0, 0).is_err());
    }

    #[test]
    fn logical_access_skips_margin() {
        let mut r = Raster::new(3, 2, 2).unwrap();
        assert_eq!(r.padded_dimensions(), (7, 6));
        assert_eq!(r.data().len(), 42);
        r.set(0, 0, 0.5);
        assert_eq!(r.data()[2 * 7 + 2], 0.5);
        assert_eq!(r.get_padded(0, 0), 0.5);
        assert_eq!(r.get_padded(-1, 0), 0.0);
        assert_eq!(r.get_padded(-5, 0), 0.0);
        assert_eq!(r.row(0), &[0.5, 0.0, 0.0]);
    }

    #[test]
    fn checked_access_reports_out_of_bounds() {
        let mut r = Raster::new(4, 4, 1).unwrap();
        assert_eq!(
            r.try_get(4, 0),
            Err(HoughError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 4
            })
        );
        assert!(r.try_set(0, 4, 1.0).is_err());
        assert!(r.try_set(3, 3, 1.0).is_ok());
        assert_eq!(r.try_get(3, 3), Ok(1.0));
    }

    #[test]
    fn from_vec_checks_padded_length() {
        assert_eq!(
            Raster::from_vec(2, 2, 1, vec![0.0; 4]),
            Err(HoughError::MalformedBuffer {
                expected: 16,
                found: 4
            })
        );
        assert!(Raster::from_vec(2, 2, 0, vec![0.0; 4]).is_ok());
    }

    #[test]
    fn from_u8_view_normalizes_and_honors_stride() {
        let data = [0u8, 255, 99, 51, 102, 99];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        let r = Raster::from_u8_view(&view, 1).unwrap();
        assert_eq!(r.get(0, 0), 0.0);
        assert_eq!(r.get(1, 0), 1.0);
        assert!((r.get(0, 1) - 0.2).abs() < 1e-6);
        assert!((r.get(1, 1) - 0.4).abs() < 1e-6);
        assert_eq!(r.count_nonzero(), 3);
    }

    #[test]
    fn summaries_ignore_margin() {
        let r = Raster::from_fn(3, 3, 2, |x, y| (x + y) as f32).unwrap();
        assert_eq!(r.max_value(), 4.0);
        assert_eq!(r.sum(), 18.0);
        assert_eq!(r.count_nonzero(), 8);
    }
}
