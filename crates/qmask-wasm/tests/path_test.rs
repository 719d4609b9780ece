//! Integration tests for the path builder and the devices built on it.

use std::f64::consts::{FRAC_PI_2, PI};

use qmask_wasm::config::GeometryConfig;
use qmask_wasm::devices::{MeanderResonator, ResonatorParams, MICROMETRES_PER_METRE};
use qmask_wasm::element::{flatten_region, Element};
use qmask_wasm::error::LayoutError;
use qmask_wasm::geometry::{Point, Transform, DEFAULT_REGION};
use qmask_wasm::path::{Path, PathSpec, Spread};
use qmask_wasm::primitives::CrossSection;

fn cs(width: f64, gap: f64) -> CrossSection {
    CrossSection::new(width, gap).expect("valid cross-section")
}

fn spec(shape: &str, lengths: Vec<f64>, radius: f64, angles: Vec<f64>) -> PathSpec {
    PathSpec {
        shape: shape.to_string(),
        cross_section: Spread::Shared(cs(10.0, 5.0)),
        turn_radius: Spread::Shared(radius),
        segment_lengths: lengths,
        turn_angles: Spread::Each(angles),
    }
}

/// LRL with a quarter turn lands where the trigonometry says.
#[test]
#[allow(clippy::expect_used)]
fn quarter_turn_endpoint_and_area() {
    let cfg = GeometryConfig::default();
    let path = Path::build(&spec("LRL", vec![100.0, 100.0], 50.0, vec![FRAC_PI_2]), &cfg)
        .expect("path builds");

    let r = 50.0;
    let after_first = Point::new(100.0 - r * (FRAC_PI_2 / 2.0).tan(), 0.0);
    let center = after_first + Point::new(0.0, r);
    let arc_end = center + Point::from_angle(-FRAC_PI_2 + FRAC_PI_2) * r;
    let expected = arc_end + Point::new(0.0, 50.0);
    let end = path.end().expect("end");
    assert!(end.point.approx_eq(expected, 1e-9), "end at {:?}", end.point);

    let nominal = path.nominal_length();
    assert!((nominal - (200.0 + r * FRAC_PI_2)).abs() < 1e-9);
    let centerline = path.centerline_length();
    assert!((centerline - (100.0 + r * FRAC_PI_2)).abs() < 1e-9);

    // metal is width x centerline up to arc sampling and boolean snapping
    let element = Element::from(path);
    let pair = flatten_region(&element, DEFAULT_REGION, &Transform::IDENTITY);
    let expected_metal = 10.0 * centerline;
    assert!((pair.metal.area() - expected_metal).abs() < 5e-3 * expected_metal);
}

#[test]
fn half_turn_is_rejected() {
    let cfg = GeometryConfig::default();
    let result = Path::build(&spec("LRL", vec![100.0, 100.0], 20.0, vec![PI]), &cfg);
    assert!(matches!(
        result,
        Err(LayoutError::UnsupportedTurnAngle { index: 0, .. })
    ));
}

#[test]
fn oversized_radius_is_incompatible() {
    let cfg = GeometryConfig::default();
    let result = Path::build(&spec("LRL", vec![30.0, 100.0], 50.0, vec![FRAC_PI_2]), &cfg);
    assert!(matches!(
        result,
        Err(LayoutError::IncompatiblePathGeometry { segment: 0, .. })
    ));
}

#[test]
fn count_mismatch_is_reported() {
    let cfg = GeometryConfig::default();
    let result = Path::build(&spec("LRL", vec![100.0], 20.0, vec![FRAC_PI_2]), &cfg);
    assert!(matches!(
        result,
        Err(LayoutError::DimensionMismatch {
            expected: 2,
            actual: 1,
            ..
        })
    ));
}

/// Each symbol may carry its own cross-section.
#[test]
#[allow(clippy::expect_used)]
fn per_symbol_cross_sections() {
    let cfg = GeometryConfig::default();
    let path_spec = PathSpec {
        shape: "LRL".to_string(),
        cross_section: Spread::Each(vec![cs(10.0, 5.0), cs(10.0, 5.0), cs(20.0, 5.0)]),
        turn_radius: Spread::Shared(40.0),
        segment_lengths: vec![100.0, 100.0],
        turn_angles: Spread::Shared(-FRAC_PI_2),
    };
    let path = Path::build(&path_spec, &cfg).expect("path builds");
    let end = path.end().expect("end");
    assert!(end.point.approx_eq(Point::new(100.0, -100.0), 1e-9));

    let wide = path.composite().child("cpw_1").expect("second straight");
    let pair = flatten_region(&wide.element, DEFAULT_REGION, &Transform::IDENTITY);
    assert!((pair.metal.area() - 20.0 * 60.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::expect_used)]
fn resonator_centerline_hits_target() {
    let params = ResonatorParams {
        cross_section: cs(10.0, 6.0),
        turn_radius: 40.0,
        frequency_hz: 7e9,
        permittivity: 11.45,
        wavelength_fraction: 0.25,
        coupling_length: 300.0,
        periods: 6,
        open_end: true,
        units_per_metre: MICROMETRES_PER_METRE,
    };
    let cfg = GeometryConfig {
        arc_points: 32,
        ..GeometryConfig::default()
    };
    let resonator = MeanderResonator::build(&params, &cfg).expect("resonator builds");
    let target = resonator.target_length();
    assert!((resonator.centerline_length() - target).abs() < 1e-6 * target);
    assert!(Element::from(resonator).connection("end").is_ok());
}
