//! Symbolic path description.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::primitives::CrossSection;

/// One symbol of a path shape string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// `L`: a straight run.
    Straight,
    /// `R`: a rounded turn.
    Turn,
}

/// Parses a shape string over `L` (straight) and `R` (turn).
///
/// # Errors
///
/// Returns [`LayoutError::InvalidParameters`] for an empty string or any
/// other character.
pub fn parse_shape(shape: &str) -> Result<Vec<Symbol>, LayoutError> {
    if shape.is_empty() {
        return Err(LayoutError::InvalidParameters(
            "path shape string is empty".to_string(),
        ));
    }
    shape
        .chars()
        .enumerate()
        .map(|(i, c)| match c {
            'L' => Ok(Symbol::Straight),
            'R' => Ok(Symbol::Turn),
            other => Err(LayoutError::InvalidParameters(format!(
                "unexpected symbol {other:?} at position {i} of path shape"
            ))),
        })
        .collect()
}

/// A parameter given once for all items or once per item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spread<T> {
    /// The same value for every item.
    Shared(T),
    /// One value per item.
    Each(Vec<T>),
}

impl<T: Clone> Spread<T> {
    /// Expands to exactly `count` values.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DimensionMismatch`] when a per-item list has
    /// the wrong length.
    pub fn resolve(&self, count: usize, what: &'static str) -> Result<Vec<T>, LayoutError> {
        match self {
            Self::Shared(value) => Ok(vec![value.clone(); count]),
            Self::Each(values) if values.len() == count => Ok(values.clone()),
            Self::Each(values) => Err(LayoutError::DimensionMismatch {
                what,
                expected: count,
                actual: values.len(),
            }),
        }
    }
}

/// Input of the path builder.
///
/// `segment_lengths` are the straight lengths of the equivalent polyline
/// with sharp corners. Turn radii are magnitudes; each turn bends toward
/// the sign of its angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSpec {
    /// Shape string over `L` and `R`.
    pub shape: String,
    /// Cross-section shared or per symbol.
    pub cross_section: Spread<CrossSection>,
    /// Turn radius shared or per turn.
    pub turn_radius: Spread<f64>,
    /// Nominal length per straight.
    pub segment_lengths: Vec<f64>,
    /// Signed turn angle (radians) shared or per turn.
    pub turn_angles: Spread<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ut_spec_001_parse_shape() {
        assert_eq!(
            parse_shape("LRL"),
            Ok(vec![Symbol::Straight, Symbol::Turn, Symbol::Straight])
        );
        assert!(matches!(
            parse_shape("LXL"),
            Err(LayoutError::InvalidParameters(_))
        ));
        assert!(parse_shape("").is_err());
    }

    #[test]
    fn ut_spec_002_spread_resolve() {
        assert_eq!(Spread::Shared(2.0).resolve(3, "turn radii"), Ok(vec![2.0; 3]));
        assert_eq!(
            Spread::Each(vec![1.0, 2.0]).resolve(2, "turn radii"),
            Ok(vec![1.0, 2.0])
        );
        assert_eq!(
            Spread::Each(vec![1.0]).resolve(2, "turn angles"),
            Err(LayoutError::DimensionMismatch {
                what: "turn angles",
                expected: 2,
                actual: 1,
            })
        );
    }
}
