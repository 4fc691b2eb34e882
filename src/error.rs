//! Error taxonomy shared by the pipeline stages.

/// Reasons why building or chaining pipeline buffers may fail.
#[derive(Clone, Debug, PartialEq)]
pub enum HoughError {
    /// A raster was requested with a zero width or height.
    InvalidDimensions { width: usize, height: usize },
    /// A logical coordinate lies outside the raster extent.
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// A tunable parameter was outside its documented domain and got clamped.
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Sample storage does not match the declared raster layout.
    MalformedBuffer { expected: usize, found: usize },
    /// Two chained stages disagree on the parameter-space dimensions.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl std::fmt::Display for HoughError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoughError::InvalidDimensions { width, height } => {
                write!(f, "invalid raster dimensions {width}x{height}")
            }
            HoughError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "coordinate ({x}, {y}) outside {width}x{height} raster"),
            HoughError::ParameterOutOfRange {
                name,
                value,
                min,
                max,
            } => write!(
                f,
                "parameter `{name}` = {value} outside [{min}, {max}], clamped"
            ),
            HoughError::MalformedBuffer { expected, found } => {
                write!(f, "malformed buffer ({found} samples, expected {expected})")
            }
            HoughError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch (found {}x{}, expected {}x{})",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for HoughError {}

/// Clamp `value` into `[min, max]`, logging the out-of-range condition.
///
/// NaN is mapped to `min`. Returns the clamped value and, when clamping took
/// place, the corresponding [`HoughError::ParameterOutOfRange`].
pub fn clamp_parameter(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> (f64, Option<HoughError>) {
    if value >= min && value <= max {
        return (value, None);
    }
    let clamped = if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    };
    let err = HoughError::ParameterOutOfRange {
        name,
        value,
        min,
        max,
    };
    log::warn!("{err}");
    (clamped, Some(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_parameter_passes_values_in_range() {
        let (v, err) = clamp_parameter("threshold", 0.25, 0.0, 1.0);
        assert_eq!(v, 0.25);
        assert!(err.is_none());
    }

    #[test]
    fn clamp_parameter_reports_and_clamps() {
        let (v, err) = clamp_parameter("threshold", 1.5, 0.0, 1.0);
        assert_eq!(v, 1.0);
        assert!(matches!(
            err,
            Some(HoughError::ParameterOutOfRange {
                name: "threshold",
                ..
            })
        ));

        let (v, _) = clamp_parameter("threshold", f64::NAN, 0.0, 1.0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn display_mentions_dimensions() {
        let msg = HoughError::InvalidDimensions {
            width: 0,
            height: 4,
        }
        .to_string();
        assert!(msg.contains("0x4"), "{msg}");
    }
}
