//! Error types for element construction and layout flattening.

use thiserror::Error;

/// Errors that can occur while building or placing layout elements.
///
/// Every variant is raised at construction time; placement itself never fails
/// once an element exists.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// A constructor received out-of-domain values.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A path turn has a magnitude of half a turn or more.
    #[error(
        "unsupported turn angle {angle} rad at turn {index}; \
         split half turns into two quarter turns"
    )]
    UnsupportedTurnAngle {
        /// Zero-based index of the turn in the shape string.
        index: usize,
        /// The offending signed angle in radians.
        angle: f64,
    },

    /// Corner rounding consumed more than the available straight run.
    #[error("straight segment {segment} has negative corrected length {length}")]
    IncompatiblePathGeometry {
        /// Zero-based index of the straight segment.
        segment: usize,
        /// Length remaining after the tangent-line correction.
        length: f64,
    },

    /// An input array disagrees with the symbol counts of the shape string.
    #[error("{what}: expected {expected} entries, got {actual}")]
    DimensionMismatch {
        /// Which input array is mismatched.
        what: &'static str,
        /// Count implied by the shape string.
        expected: usize,
        /// Count actually supplied.
        actual: usize,
    },

    /// A logical region name is not exposed by any element of the tree.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// A connection name is not exposed by the element.
    #[error("unknown connection: {0}")]
    UnknownConnection(String),

    /// Triangle buffer emission failed.
    #[error("triangulation error: {0}")]
    Triangulation(String),
}

/// Checks that `value` is finite and not negative.
pub(crate) fn non_negative(value: f64, label: &str) -> Result<f64, LayoutError> {
    if !value.is_finite() || value < 0.0 {
        return Err(LayoutError::InvalidParameters(format!(
            "{label} must be finite and non-negative, got {value}"
        )));
    }
    Ok(value)
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn positive(value: f64, label: &str) -> Result<f64, LayoutError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LayoutError::InvalidParameters(format!(
            "{label} must be finite and positive, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ut_err_001_messages_name_the_offender() {
        let err = LayoutError::IncompatiblePathGeometry {
            segment: 2,
            length: -5.0,
        };
        assert_eq!(
            err.to_string(),
            "straight segment 2 has negative corrected length -5"
        );

        let err = LayoutError::DimensionMismatch {
            what: "turn radii",
            expected: 3,
            actual: 1,
        };
        assert_eq!(err.to_string(), "turn radii: expected 3 entries, got 1");
    }

    #[test]
    fn ut_err_002_domain_checks() {
        assert!(non_negative(0.0, "gap").is_ok());
        assert!(non_negative(-1.0, "gap").is_err());
        assert!(non_negative(f64::NAN, "gap").is_err());
        assert!(positive(0.0, "length").is_err());
        assert!(positive(f64::INFINITY, "length").is_err());
        assert!(positive(3.0, "length").is_ok());
    }
}
