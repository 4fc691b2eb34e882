//! Line detector chaining the six pipeline stages.
//!
//! threshold → Hough accumulation → local maxima → clustering → line
//! reconstruction. [`LineDetector`] holds sanitized [`DetectorParams`] and
//! returns a [`DetectionReport`](crate::DetectionReport) per frame;
//! [`LineDetector::run_stages`] additionally exposes every intermediate
//! raster for debugging tools.

pub mod params;
mod pipeline;

pub use params::DetectorParams;
pub use pipeline::{detect_lines, DetectionStages, LineDetector};
