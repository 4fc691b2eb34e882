//! Hough accumulation of a binarized raster into `(r, θ)` parameter space.
//!
//! Every on-pixel `(x, y)` votes once per accumulated angle θ for the line
//! `r = x·cosθ + y·sinθ`. Collinear pixels pile their votes into the same
//! cell, so lines show up as local maxima of the accumulator raster (rows
//! index r, columns index θ). The exact index convention is documented in
//! [`geometry`] and shared by every downstream stage.
//!
//! Restricting the allowed slant narrows the θ columns that receive votes,
//! which both speeds up accumulation and suppresses unwanted orientations.

mod accumulator;
pub mod geometry;

pub use accumulator::{accumulate, HoughParams, HoughSpace};
pub use geometry::{AccumulatorGeometry, SlantRange};
