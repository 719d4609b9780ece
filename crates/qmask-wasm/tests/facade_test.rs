//! Integration tests for the native entry points behind the wasm exports.

use std::f64::consts::FRAC_PI_2;

use qmask_wasm::config::GeometryConfig;
use qmask_wasm::path::{PathSpec, Spread};
use qmask_wasm::primitives::CrossSection;
use qmask_wasm::{build_path_internal, get_clear_ranges, get_indices, get_positions};

fn lrl() -> PathSpec {
    PathSpec {
        shape: "LRL".to_string(),
        cross_section: Spread::Shared(CrossSection::new(10.0, 5.0).expect("valid cross-section")),
        turn_radius: Spread::Shared(50.0),
        segment_lengths: vec![100.0, 100.0],
        turn_angles: Spread::Shared(FRAC_PI_2),
    }
}

/// Built buffers are consistent: positions match vertex_count, indices in range.
#[test]
#[allow(clippy::expect_used)]
fn built_path_buffers_are_consistent() {
    let cfg = GeometryConfig {
        arc_points: 48,
        ..GeometryConfig::default()
    };
    let meta = build_path_internal(&lrl(), &cfg).expect("build should succeed");
    assert!(meta.vertex_count > 0, "should produce geometry");

    let positions = get_positions();
    let indices = get_indices();
    assert_eq!(
        positions.len(),
        meta.vertex_count as usize * 2,
        "positions length should match vertex_count * 2"
    );
    assert_eq!(indices.len(), meta.index_count as usize);
    assert_eq!(indices.len() % 3, 0, "triangle list");

    let max_idx = positions.len() / 2;
    for idx in &indices {
        assert!(
            (*idx as usize) < max_idx,
            "index {} out of bounds for {} vertices",
            idx,
            max_idx
        );
    }

    let ranges = get_clear_ranges();
    assert_eq!(ranges.len(), 2, "one clearance span after the metal");
    assert_eq!(ranges.get(1).copied(), Some(meta.index_count));
    assert!(meta.bounds.max_x >= 100.0 && meta.bounds.max_y >= 100.0);
}

#[test]
fn failed_build_reports_error() {
    let mut spec = lrl();
    spec.shape = "LXL".to_string();
    let result = build_path_internal(&spec, &GeometryConfig::default());
    assert!(result.is_err(), "unknown symbol should fail");
}
