//! Host-side I/O: decoding images into rasters and encoding rasters back.
//!
//! - `load_grayscale_image`: read a PNG/JPEG into an owned 8-bit gray buffer.
//! - `load_raster`: read an image straight into a normalized `Raster`.
//! - `save_raster_png`: write any `Raster` (binary, accumulator, maxima) to a
//!   grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageU8, ImageView, Raster};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8::packed(self.width, self.height, &self.data)
    }
}

/// How raster samples are mapped onto 8-bit output intensities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Normalization {
    /// Samples are already in `[0, 1]` (input and binarized rasters).
    Unit,
    /// Divide by the raster maximum (accumulator and maxima rasters).
    Peak,
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayImageU8::new(width, height, img.into_raw()))
}

/// Load an image from disk as a raster normalized to `[0, 1]` with `margin`.
pub fn load_raster(path: &Path, margin: usize) -> Result<Raster, String> {
    let gray = load_grayscale_image(path)?;
    Raster::from_u8_view(&gray.as_view(), margin)
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))
}

/// Encode the logical area of a raster as a grayscale PNG.
pub fn save_raster_png(raster: &Raster, path: &Path, norm: Normalization) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let scale = match norm {
        Normalization::Unit => 255.0,
        Normalization::Peak => {
            let peak = raster.max_value();
            if peak > 0.0 {
                255.0 / peak
            } else {
                0.0
            }
        }
    };
    let (w, h) = raster.dimensions();
    let mut out = GrayImage::new(w as u32, h as u32);
    for (y, row) in raster.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = (px * scale).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hough-lines-io-{}-{name}", std::process::id()))
    }

    #[test]
    fn png_round_trip_preserves_binary_raster() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("nested/binary.png");
        let raster = Raster::from_fn(6, 4, 1, |x, y| if x == y { 1.0 } else { 0.0 }).unwrap();
        save_raster_png(&raster, &path, Normalization::Unit).unwrap();

        let loaded = load_raster(&path, 2).unwrap();
        assert_eq!(loaded.dimensions(), (6, 4));
        assert_eq!(loaded.margin(), 2);
        assert_eq!(loaded.get(2, 2), 1.0);
        assert_eq!(loaded.get(3, 2), 0.0);
        assert_eq!(loaded.count_nonzero(), 4);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn peak_normalization_maps_maximum_to_white() {
        let dir = scratch_dir("peak");
        let path = dir.join("acc.png");
        let raster = Raster::from_fn(3, 1, 0, |x, _| x as f32 * 20.0).unwrap();
        save_raster_png(&raster, &path, Normalization::Peak).unwrap();

        let gray = load_grayscale_image(&path).unwrap();
        let view = gray.as_view();
        assert_eq!(
            (view.get(0, 0), view.get(1, 0), view.get(2, 0)),
            (0, 127, 255)
        );
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_raster(Path::new("/nonexistent/input.png"), 0).unwrap_err();
        assert!(err.contains("/nonexistent/input.png"));
    }
}
