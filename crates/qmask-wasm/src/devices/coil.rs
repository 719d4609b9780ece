//! One serpentine period built directly from straights and half turns.

use std::f64::consts::PI;

use crate::config::GeometryConfig;
use crate::element::{Composite, CompositeBuilder, Primitive};
use crate::error::LayoutError;
use crate::primitives::{AirBridges, Arc, BridgeParams, CrossSection, Straight};

/// Parameters of a [`build_coil`] period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilParams {
    /// Cross-section of the whole coil.
    pub cross_section: CrossSection,
    /// Length of the outgoing straight.
    pub first_length: f64,
    /// Radius of both half turns.
    pub radius: f64,
    /// Length of the returning straight.
    pub second_length: f64,
    /// Air bridges per straight; zero draws plain straights.
    pub bridges_per_straight: u32,
    /// Bridge dimensions, used when `bridges_per_straight > 0`.
    pub bridge: BridgeParams,
}

/// Builds straight, right half turn, straight back, left half turn.
///
/// Starting at the origin heading +x, the period ends at
/// `(first_length - second_length, -4 * radius)` heading +x again.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidParameters`] for non-positive lengths or a
/// radius smaller than half the footprint.
pub fn build_coil(params: &CoilParams, cfg: &GeometryConfig) -> Result<Composite, LayoutError> {
    let r = params.radius;
    let mut builder = CompositeBuilder::new("coil");
    builder.chain("cop1", straight(params, params.first_length, cfg)?)?;
    builder.chain(
        "arc1",
        Primitive::build(&Arc::new(params.cross_section, -r, -PI)?, cfg)?,
    )?;
    builder.chain("cop2", straight(params, params.second_length, cfg)?)?;
    builder.chain(
        "arc2",
        Primitive::build(&Arc::new(params.cross_section, r, PI)?, cfg)?,
    )?;
    builder.finish()
}

fn straight(
    params: &CoilParams,
    length: f64,
    cfg: &GeometryConfig,
) -> Result<Primitive, LayoutError> {
    if params.bridges_per_straight == 0 {
        Primitive::build(&Straight::new(params.cross_section, length)?, cfg)
    } else {
        let bridged = AirBridges::new(
            params.cross_section,
            length,
            params.bridges_per_straight,
            params.bridge,
        )?;
        Primitive::build(&bridged, cfg)
    }
}
