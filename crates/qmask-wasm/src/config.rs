//! Numeric tolerances and tessellation settings.
//!
//! Every constructor that samples curves or compares angles takes a
//! [`GeometryConfig`], so tests can probe boundary sensitivity without
//! touching literals buried in the shape code.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Samples per arc boundary (inner and outer edge each).
pub const DEFAULT_ARC_POINTS: u32 = 200;
/// Angle added at both ends of a sampled arc so neighbours overlap at the seam.
pub const DEFAULT_ARC_ANGULAR_INSET: f64 = 1e-3;
/// Distance from π under which a turn counts as a half turn.
pub const DEFAULT_TURN_ANGLE_TOLERANCE: f64 = 1e-12;
/// Turn magnitude above which path construction logs a warning (170°).
pub const DEFAULT_SHARP_TURN_WARNING: f64 = PI * 170.0 / 180.0;
/// Corrected straight lengths within this distance of zero are not drawn.
pub const DEFAULT_LENGTH_TOLERANCE: f64 = 1e-9;
/// Vertices on a full circle.
pub const DEFAULT_CIRCLE_POINTS: u32 = 200;
/// Offset from a polygon vertex to its interior selection point (10 nm in µm).
pub const DEFAULT_SELECTION_INSET: f64 = 0.01;
/// Shrink factor keeping a selection ball inside its corner.
pub const DEFAULT_SELECTION_RADIUS_FACTOR: f64 = 0.9;
/// Radius of a fine-mesh selection ball (10 nm in µm).
pub const DEFAULT_FINE_MESH_RADIUS: f64 = 0.01;
/// Where fine-mesh points too close to the chip border are moved to (12 nm in µm).
pub const DEFAULT_CHIP_EDGE_MARGIN: f64 = 0.012;

/// Tessellation counts and tolerances shared by element constructors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Samples per arc boundary.
    pub arc_points: u32,
    /// Radians added at both ends of every sampled arc.
    pub arc_angular_inset: f64,
    /// How close to π a turn angle must be to count as a half turn.
    pub turn_angle_tolerance: f64,
    /// Turn magnitude above which a warning is logged.
    pub sharp_turn_warning: f64,
    /// Corrected straight lengths at or below this value are skipped.
    pub length_tolerance: f64,
    /// Vertices on a full circle.
    pub circle_points: u32,
    /// Offset from a polygon vertex to its interior selection point.
    pub selection_inset: f64,
    /// Shrink factor applied to interior selection radii.
    pub selection_radius_factor: f64,
    /// Radius of fine-mesh selection balls.
    pub fine_mesh_radius: f64,
    /// Inward position for fine-mesh points near the chip border.
    pub chip_edge_margin: f64,
}

impl GeometryConfig {
    /// Checks that sample counts and tolerances are usable.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] when a sample count is too
    /// small or a tolerance is negative or not finite.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.arc_points < 2 {
            return Err(LayoutError::InvalidParameters(format!(
                "arc_points must be at least 2, got {}",
                self.arc_points
            )));
        }
        if self.circle_points < 3 {
            return Err(LayoutError::InvalidParameters(format!(
                "circle_points must be at least 3, got {}",
                self.circle_points
            )));
        }
        let tolerances = [
            (self.arc_angular_inset, "arc_angular_inset"),
            (self.turn_angle_tolerance, "turn_angle_tolerance"),
            (self.sharp_turn_warning, "sharp_turn_warning"),
            (self.length_tolerance, "length_tolerance"),
            (self.selection_inset, "selection_inset"),
            (self.selection_radius_factor, "selection_radius_factor"),
            (self.fine_mesh_radius, "fine_mesh_radius"),
            (self.chip_edge_margin, "chip_edge_margin"),
        ];
        for (value, label) in tolerances {
            crate::error::non_negative(value, label)?;
        }
        Ok(())
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            arc_points: DEFAULT_ARC_POINTS,
            arc_angular_inset: DEFAULT_ARC_ANGULAR_INSET,
            turn_angle_tolerance: DEFAULT_TURN_ANGLE_TOLERANCE,
            sharp_turn_warning: DEFAULT_SHARP_TURN_WARNING,
            length_tolerance: DEFAULT_LENGTH_TOLERANCE,
            circle_points: DEFAULT_CIRCLE_POINTS,
            selection_inset: DEFAULT_SELECTION_INSET,
            selection_radius_factor: DEFAULT_SELECTION_RADIUS_FACTOR,
            fine_mesh_radius: DEFAULT_FINE_MESH_RADIUS,
            chip_edge_margin: DEFAULT_CHIP_EDGE_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ut_cfg_001_defaults_validate() {
        assert!(GeometryConfig::default().validate().is_ok());
    }

    #[test]
    fn ut_cfg_002_rejects_single_arc_sample() {
        let config = GeometryConfig {
            arc_points: 1,
            ..GeometryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidParameters(_))
        ));
    }

    #[test]
    fn ut_cfg_003_rejects_negative_inset() {
        let config = GeometryConfig {
            arc_angular_inset: -1e-3,
            ..GeometryConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
