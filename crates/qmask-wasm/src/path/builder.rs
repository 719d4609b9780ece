//! Piecewise-linear paths with rounded turns.
//!
//! Each turn of radius `r` and angle `a` is tangent to both neighbouring
//! straights, so it consumes `r * |tan(a / 2)|` from each of them. The
//! builder subtracts that from the nominal lengths, which keeps the end
//! point of the path where the sharp-cornered polyline would put it.

use std::f64::consts::PI;

use crate::config::GeometryConfig;
use crate::element::{Composite, CompositeBuilder, Connection, Element, Primitive};
use crate::error::{non_negative, LayoutError};
use crate::primitives::{Arc, CrossSection, Straight};

use super::spec::{parse_shape, PathSpec, Symbol};

/// A built path and the lengths it was built from.
#[derive(Debug, Clone)]
pub struct Path {
    composite: Composite,
    nominal_lengths: Vec<f64>,
    corrected_lengths: Vec<f64>,
    radii: Vec<f64>,
    angles: Vec<f64>,
}

impl Path {
    /// Builds the straight and arc chain described by `spec`.
    ///
    /// Straights are named `cpw_<k>` and turns `arc_<t>`, counted
    /// separately. A straight whose corrected length is zero (within
    /// `cfg.length_tolerance`) is left out.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::DimensionMismatch`] when an array disagrees with the
    ///   symbol counts.
    /// - [`LayoutError::UnsupportedTurnAngle`] for a turn of half a turn or
    ///   more.
    /// - [`LayoutError::IncompatiblePathGeometry`] when corner rounding makes
    ///   a straight negative.
    /// - [`LayoutError::InvalidParameters`] for malformed shapes, negative
    ///   lengths or radii, zero turn angles, and radii too small for the
    ///   cross-section.
    pub fn build(spec: &PathSpec, cfg: &GeometryConfig) -> Result<Self, LayoutError> {
        cfg.validate()?;
        let symbols = parse_shape(&spec.shape)?;
        let n_turns = symbols.iter().filter(|s| **s == Symbol::Turn).count();
        let n_straights = symbols.len() - n_turns;

        let cross_sections = spec
            .cross_section
            .resolve(symbols.len(), "cross-section parameters")?;
        let radii = spec.turn_radius.resolve(n_turns, "turn radii")?;
        let angles = spec.turn_angles.resolve(n_turns, "turn angles")?;
        if spec.segment_lengths.len() != n_straights {
            return Err(LayoutError::DimensionMismatch {
                what: "segment lengths",
                expected: n_straights,
                actual: spec.segment_lengths.len(),
            });
        }

        for length in &spec.segment_lengths {
            non_negative(*length, "segment length")?;
        }
        for radius in &radii {
            non_negative(*radius, "turn radius")?;
        }
        for (index, angle) in angles.iter().enumerate() {
            check_turn_angle(index, *angle, cfg)?;
        }

        let corrected_lengths =
            corrected_lengths(&symbols, &spec.segment_lengths, &radii, &angles, cfg)?;

        let mut builder = CompositeBuilder::new("path");
        let mut straight_index = 0;
        let mut turn_index = 0;
        for (symbol, cross_section) in symbols.iter().zip(&cross_sections) {
            match symbol {
                Symbol::Straight => {
                    let length = corrected_lengths.get(straight_index).copied().unwrap_or(0.0);
                    if length > cfg.length_tolerance {
                        let straight = Straight::new(*cross_section, length)?;
                        builder.chain(
                            &format!("cpw_{straight_index}"),
                            Primitive::build(&straight, cfg)?,
                        )?;
                    }
                    straight_index += 1;
                }
                Symbol::Turn => {
                    let arc = turn_arc(*cross_section, &radii, &angles, turn_index)?;
                    builder.chain(&format!("arc_{turn_index}"), Primitive::build(&arc, cfg)?)?;
                    turn_index += 1;
                }
            }
        }

        let composite = builder.finish()?;
        log::debug!(
            "built path {:?}: {} straight(s), {} turn(s), {} child(ren)",
            spec.shape,
            n_straights,
            n_turns,
            composite.len()
        );
        Ok(Self {
            composite,
            nominal_lengths: spec.segment_lengths.clone(),
            corrected_lengths,
            radii,
            angles,
        })
    }

    /// The chained straights and arcs.
    pub const fn composite(&self) -> &Composite {
        &self.composite
    }

    /// Converts into an element for placement.
    pub fn into_element(self) -> Element {
        Element::Composite(self.composite)
    }

    /// Straight lengths as given.
    pub fn nominal_lengths(&self) -> &[f64] {
        &self.nominal_lengths
    }

    /// Straight lengths after corner rounding.
    pub fn corrected_lengths(&self) -> &[f64] {
        &self.corrected_lengths
    }

    /// Sum of the nominal straight lengths and the turn arc lengths.
    ///
    /// Independent of how much corner rounding trimmed the straights.
    pub fn nominal_length(&self) -> f64 {
        self.nominal_lengths.iter().sum::<f64>() + self.arc_length()
    }

    /// Length of the drawn centerline: corrected straights plus arcs.
    pub fn centerline_length(&self) -> f64 {
        self.corrected_lengths.iter().sum::<f64>() + self.arc_length()
    }

    /// Start connection.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownConnection`] if the path exposes none.
    pub fn start(&self) -> Result<Connection, LayoutError> {
        self.composite.connections().start()
    }

    /// End connection.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownConnection`] if the path exposes none.
    pub fn end(&self) -> Result<Connection, LayoutError> {
        self.composite.connections().end()
    }

    fn arc_length(&self) -> f64 {
        self.radii
            .iter()
            .zip(&self.angles)
            .map(|(r, a)| (r * a).abs())
            .sum()
    }
}

impl From<Path> for Element {
    fn from(path: Path) -> Self {
        path.into_element()
    }
}

fn check_turn_angle(index: usize, angle: f64, cfg: &GeometryConfig) -> Result<(), LayoutError> {
    if !angle.is_finite() || angle == 0.0 {
        return Err(LayoutError::InvalidParameters(format!(
            "turn {index} needs a finite non-zero angle, got {angle}"
        )));
    }
    if angle.abs() >= PI - cfg.turn_angle_tolerance {
        return Err(LayoutError::UnsupportedTurnAngle { index, angle });
    }
    if angle.abs() > cfg.sharp_turn_warning {
        log::warn!("turn {index} of {angle} rad is close to a half turn");
    }
    Ok(())
}

/// Length trimmed from a straight by the turn at `turn_index`.
fn rounding(radii: &[f64], angles: &[f64], turn_index: usize) -> f64 {
    match (radii.get(turn_index), angles.get(turn_index)) {
        (Some(r), Some(a)) => r * (a / 2.0).tan().abs(),
        _ => 0.0,
    }
}

fn corrected_lengths(
    symbols: &[Symbol],
    nominal: &[f64],
    radii: &[f64],
    angles: &[f64],
    cfg: &GeometryConfig,
) -> Result<Vec<f64>, LayoutError> {
    let mut out = Vec::with_capacity(nominal.len());
    let mut turns_seen = 0;
    for (i, symbol) in symbols.iter().enumerate() {
        if *symbol == Symbol::Turn {
            turns_seen += 1;
            continue;
        }
        let segment = out.len();
        let mut length = nominal.get(segment).copied().unwrap_or(0.0);
        if symbols.get(i + 1) == Some(&Symbol::Turn) {
            length -= rounding(radii, angles, turns_seen);
        }
        if i > 0 && symbols.get(i - 1) == Some(&Symbol::Turn) {
            length -= rounding(radii, angles, turns_seen - 1);
        }
        if length < -cfg.length_tolerance {
            return Err(LayoutError::IncompatiblePathGeometry { segment, length });
        }
        out.push(length.max(0.0));
    }
    Ok(out)
}

fn turn_arc(
    cross_section: CrossSection,
    radii: &[f64],
    angles: &[f64],
    turn_index: usize,
) -> Result<Arc, LayoutError> {
    let (Some(radius), Some(angle)) = (radii.get(turn_index), angles.get(turn_index)) else {
        return Err(LayoutError::DimensionMismatch {
            what: "turn radii",
            expected: turn_index + 1,
            actual: radii.len().min(angles.len()),
        });
    };
    Arc::new(cross_section, radius.copysign(*angle), *angle)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::path::Spread;

    fn spec(shape: &str, lengths: Vec<f64>, radius: f64, angles: Vec<f64>) -> PathSpec {
        PathSpec {
            shape: shape.to_string(),
            cross_section: Spread::Shared(
                CrossSection::new(10.0, 5.0).expect("valid cross-section"),
            ),
            turn_radius: Spread::Shared(radius),
            segment_lengths: lengths,
            turn_angles: Spread::Each(angles),
        }
    }

    fn build(spec: &PathSpec) -> Result<Path, LayoutError> {
        Path::build(spec, &GeometryConfig::default())
    }

    // --- UT-PATH-001: Quarter turn trims both neighbours ---

    #[test]
    fn ut_path_001_lrl_quarter_turn() {
        let path = build(&spec("LRL", vec![100.0, 100.0], 50.0, vec![FRAC_PI_2]))
            .expect("path builds");
        let corrected = path.corrected_lengths();
        assert_eq!(corrected.len(), 2);
        assert!(corrected.iter().all(|l| (l - 50.0).abs() < 1e-9));
        let end = path.end().expect("end");
        assert!(end.point.approx_eq(crate::geometry::Point::new(100.0, 100.0), 1e-9));
        assert!((end.heading() - FRAC_PI_2).abs() < 1e-12);
        let names = path.composite().children().map(|(n, _)| n).collect::<Vec<_>>();
        assert_eq!(names, vec!["cpw_0", "arc_0", "cpw_1"]);
    }

    // --- UT-PATH-002: Straight before the first turn is trimmed ---

    #[test]
    fn ut_path_002_first_straight_is_corrected() {
        let lengths = vec![100.0, 200.0, 100.0];
        let path = build(&spec("LRLRL", lengths, 20.0, vec![FRAC_PI_2, -FRAC_PI_2]))
            .expect("path builds");
        let c = path.corrected_lengths();
        assert!((c.first().copied().unwrap_or_default() - 80.0).abs() < 1e-9);
        assert!((c.get(1).copied().unwrap_or_default() - 160.0).abs() < 1e-9);
        assert!((c.get(2).copied().unwrap_or_default() - 80.0).abs() < 1e-9);
    }

    // --- UT-PATH-003: Half turn is rejected ---

    #[test]
    fn ut_path_003_half_turn_rejected() {
        let err = build(&spec("LRL", vec![100.0, 100.0], 10.0, vec![PI])).err();
        assert_eq!(err, Some(LayoutError::UnsupportedTurnAngle { index: 0, angle: PI }));
        assert!(build(&spec("LRL", vec![100.0, 100.0], 10.0, vec![-PI])).is_err());
    }

    // --- UT-PATH-004: Oversized radius is reported on the right segment ---

    #[test]
    fn ut_path_004_radius_too_large() {
        let err = build(&spec("LRL", vec![100.0, 30.0], 50.0, vec![FRAC_PI_2])).err();
        assert!(
            matches!(
                err,
                Some(LayoutError::IncompatiblePathGeometry { segment: 1, length })
                    if (length + 20.0).abs() < 1e-9
            ),
            "unexpected result {err:?}"
        );
    }

    // --- UT-PATH-005: Array length mismatches ---

    #[test]
    fn ut_path_005_dimension_mismatch() {
        assert_eq!(
            build(&spec("LRL", vec![100.0], 10.0, vec![FRAC_PI_2])).err(),
            Some(LayoutError::DimensionMismatch {
                what: "segment lengths",
                expected: 2,
                actual: 1,
            })
        );
        assert!(matches!(
            build(&spec("LRL", vec![100.0, 100.0], 10.0, vec![1.0, 1.0])),
            Err(LayoutError::DimensionMismatch { .. })
        ));
    }

    // --- UT-PATH-006: Nominal length ignores rounding ---

    #[test]
    fn ut_path_006_nominal_length_round_trip() {
        for radius in [10.0, 25.0, 50.0] {
            let path = build(&spec("LRL", vec![100.0, 100.0], radius, vec![FRAC_PI_2]))
                .expect("path builds");
            let expected = 200.0 + radius * FRAC_PI_2;
            assert!((path.nominal_length() - expected).abs() < 1e-9);
            let drawn = 200.0 - 2.0 * radius + radius * FRAC_PI_2;
            assert!((path.centerline_length() - drawn).abs() < 1e-9);
        }
    }

    // --- UT-PATH-007: Zero corrected length skips the straight ---

    #[test]
    fn ut_path_007_zero_length_straight_is_skipped() {
        let path = build(&spec("LRL", vec![50.0, 60.0], 50.0, vec![-FRAC_PI_2]))
            .expect("path builds");
        assert!(path.composite().child("cpw_0").is_none());
        assert!(path.composite().child("cpw_1").is_some());
        let end = path.end().expect("end");
        assert!(end.point.approx_eq(crate::geometry::Point::new(50.0, -60.0), 1e-9));
    }

    // --- UT-PATH-008: Negative radius and zero angle are invalid ---

    #[test]
    fn ut_path_008_invalid_turn_parameters() {
        assert!(matches!(
            build(&spec("LRL", vec![100.0, 100.0], -10.0, vec![FRAC_PI_2])),
            Err(LayoutError::InvalidParameters(_))
        ));
        assert!(matches!(
            build(&spec("LRL", vec![100.0, 100.0], 10.0, vec![0.0])),
            Err(LayoutError::InvalidParameters(_))
        ));
        assert!(matches!(
            build(&spec("LRL", vec![100.0, 100.0], 5.0, vec![FRAC_PI_2])),
            Err(LayoutError::InvalidParameters(_))
        ));
    }

    // --- UT-PATH-009: Sharp turns warn but still build ---

    #[test]
    fn ut_path_009_sharp_turn_builds() {
        let cfg = GeometryConfig::default();
        let angle = 175.0_f64.to_radians();
        assert!(angle > cfg.sharp_turn_warning);
        assert!(check_turn_angle(0, angle, &cfg).is_ok());

        let path = build(&spec("LRL", vec![500.0, 500.0], 20.0, vec![angle]))
            .expect("path builds");
        let trim = 20.0 * (angle / 2.0).tan();
        assert!(path
            .corrected_lengths()
            .iter()
            .all(|l| (l - (500.0 - trim)).abs() < 1e-9));

        // rounding keeps the end of the sharp-cornered polyline
        let corner = crate::geometry::Point::new(500.0, 0.0);
        let expected = corner + crate::geometry::Point::from_angle(angle) * 500.0;
        let end = path.end().expect("end");
        assert!(end.point.approx_eq(expected, 1e-9), "end at {:?}", end.point);
        assert!((end.heading() - angle).abs() < 1e-12);
    }
}
