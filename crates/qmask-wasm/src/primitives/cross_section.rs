//! Coplanar waveguide cross-section parameters.

use serde::{Deserialize, Serialize};

use crate::error::{non_negative, LayoutError};

/// Conductor width and the symmetric gap to ground on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCrossSection")]
pub struct CrossSection {
    width: f64,
    gap: f64,
}

#[derive(Deserialize)]
struct RawCrossSection {
    width: f64,
    gap: f64,
}

impl TryFrom<RawCrossSection> for CrossSection {
    type Error = LayoutError;

    fn try_from(raw: RawCrossSection) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.gap)
    }
}

impl CrossSection {
    /// Creates a cross-section.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] if either value is negative
    /// or not finite.
    pub fn new(width: f64, gap: f64) -> Result<Self, LayoutError> {
        Ok(Self {
            width: non_negative(width, "cross-section width")?,
            gap: non_negative(gap, "cross-section gap")?,
        })
    }

    /// Conductor width.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Gap to ground on each side.
    pub const fn gap(&self) -> f64 {
        self.gap
    }

    /// Total footprint `width + 2 * gap`.
    pub fn b(&self) -> f64 {
        self.gap.mul_add(2.0, self.width)
    }

    /// Half of [`Self::b`].
    pub fn half_b(&self) -> f64 {
        self.b() / 2.0
    }
}
