//! Angle conventions shared by the accumulator and the structure builder.
//!
//! `theta` is the angle of a line's normal in `[0, π)`, measured from the
//! x-axis with y pointing down. `slant` is the direction of the line itself,
//! `slant = theta − π/2 ∈ [−π/2, π/2)`: horizontal lines have slant 0, the
//! line `y = x` has slant π/4 and vertical lines have slant −π/2.
use std::f64::consts::{FRAC_PI_2, PI};

/// Normalizes an angle into the range [0, π).
#[inline]
pub fn normalize_half_turn(angle: f64) -> f64 {
    let norm = angle.rem_euclid(PI);
    if norm >= PI - 1e-12 {
        0.0
    } else {
        norm
    }
}

/// Line direction for a Hough normal angle.
#[inline]
pub fn slant_from_theta(theta: f64) -> f64 {
    theta - FRAC_PI_2
}

/// Hough normal angle for a line direction in `[−π/2, π/2)`.
#[inline]
pub fn theta_from_slant(slant: f64) -> f64 {
    slant + FRAC_PI_2
}
