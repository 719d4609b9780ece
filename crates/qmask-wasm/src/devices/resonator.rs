//! Quarter- and half-wave meander resonators.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::GeometryConfig;
use crate::element::{Composite, CompositeBuilder, Connection, Element, Primitive, END};
use crate::error::{positive, LayoutError};
use crate::geometry::Transform;
use crate::path::{Path, PathSpec, Spread};
use crate::primitives::{CrossSection, Straight};

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Layout units per metre when lengths are in micrometres.
pub const MICROMETRES_PER_METRE: f64 = 1e6;

/// Physical length of a resonator of `wavelength_fraction` wavelengths at
/// `frequency_hz` on a substrate of relative permittivity `permittivity`.
///
/// The effective permittivity of a coplanar line is `(ε + 1) / 2`.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidParameters`] for non-positive inputs.
pub fn resonator_length(
    frequency_hz: f64,
    permittivity: f64,
    wavelength_fraction: f64,
    units_per_metre: f64,
) -> Result<f64, LayoutError> {
    let f = positive(frequency_hz, "frequency")?;
    let eps = positive(permittivity, "permittivity")?;
    let fraction = positive(wavelength_fraction, "wavelength fraction")?;
    let units = positive(units_per_metre, "units per metre")?;
    Ok(SPEED_OF_LIGHT / f / (eps / 2.0 + 0.5).sqrt() * fraction * units)
}

/// Inputs of a [`MeanderResonator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResonatorParams {
    /// Cross-section of the line.
    pub cross_section: CrossSection,
    /// Radius of the quarter turns forming each U-turn.
    pub turn_radius: f64,
    /// Resonance frequency in hertz.
    pub frequency_hz: f64,
    /// Substrate relative permittivity.
    pub permittivity: f64,
    /// 0.25 for a quarter-wave, 0.5 for a half-wave resonator.
    pub wavelength_fraction: f64,
    /// Length of the first straight, parallel to the feedline.
    pub coupling_length: f64,
    /// Number of U-turns.
    pub periods: u32,
    /// Draw a clearance-only stub beyond the far end.
    pub open_end: bool,
    /// Layout units per metre.
    pub units_per_metre: f64,
}

/// A meandered line whose drawn centerline matches the target length.
#[derive(Debug, Clone)]
pub struct MeanderResonator {
    composite: Composite,
    target_length: f64,
    meander_length: f64,
    centerline_length: f64,
}

impl MeanderResonator {
    /// Solves the straight length and builds the meander.
    ///
    /// The line is a coupling straight followed by `periods` U-turns, each
    /// made of two quarter turns and followed by a straight. U-turns
    /// alternate left and right so the meander advances along +y.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] for out-of-domain inputs
    /// and [`LayoutError::IncompatiblePathGeometry`] when the target is too
    /// short for the requested periods and radius.
    pub fn build(params: &ResonatorParams, cfg: &GeometryConfig) -> Result<Self, LayoutError> {
        if params.periods == 0 {
            return Err(LayoutError::InvalidParameters(
                "meander resonator needs at least one period".to_string(),
            ));
        }
        let target_length = resonator_length(
            params.frequency_hz,
            params.permittivity,
            params.wavelength_fraction,
            params.units_per_metre,
        )?;
        let n = f64::from(params.periods);
        let r = positive(params.turn_radius, "turn radius")?;
        let meander_length =
            (target_length - params.coupling_length + 2.0 * n * r - n * PI * r) / n;

        let mut shape = String::from("L");
        let mut segment_lengths = vec![params.coupling_length];
        let mut turn_angles = Vec::new();
        for period in 0..params.periods {
            let side = if period % 2 == 0 { 1.0 } else { -1.0 };
            shape.push_str("RRL");
            segment_lengths.push(meander_length);
            turn_angles.extend([side * FRAC_PI_2, side * FRAC_PI_2]);
        }

        let spec = PathSpec {
            shape,
            cross_section: Spread::Shared(params.cross_section),
            turn_radius: Spread::Shared(r),
            segment_lengths,
            turn_angles: Spread::Each(turn_angles),
        };
        let path = Path::build(&spec, cfg)?;
        let centerline_length = path.centerline_length();
        let line_end = path.end()?;

        let mut builder = CompositeBuilder::new("meander_resonator");
        builder.add("line", path, Transform::IDENTITY)?;
        if params.open_end {
            let b = params.cross_section.b();
            let stub = Straight::new(CrossSection::new(0.0, b / 2.0)?, b)?;
            builder.chain("open_end", Primitive::build(&stub, cfg)?)?;
        }
        builder.expose(END, line_end);
        let composite = builder.finish()?;

        log::debug!(
            "meander resonator: target {target_length}, straight {meander_length}, \
             drawn {centerline_length}"
        );
        Ok(Self {
            composite,
            target_length,
            meander_length,
            centerline_length,
        })
    }

    /// Target centerline length from the frequency.
    pub const fn target_length(&self) -> f64 {
        self.target_length
    }

    /// Nominal length of each meander straight.
    pub const fn meander_length(&self) -> f64 {
        self.meander_length
    }

    /// Drawn centerline length.
    pub const fn centerline_length(&self) -> f64 {
        self.centerline_length
    }

    /// The assembled resonator.
    pub const fn composite(&self) -> &Composite {
        &self.composite
    }

    /// The far end of the line, before any open-end stub.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownConnection`] if `end` is missing.
    pub fn end(&self) -> Result<Connection, LayoutError> {
        self.composite.connections().end()
    }
}

impl From<MeanderResonator> for Element {
    fn from(r: MeanderResonator) -> Self {
        Self::Composite(r.composite)
    }
}
