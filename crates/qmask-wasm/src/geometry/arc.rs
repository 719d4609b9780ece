//! Arc and annular-sector tessellation.
//!
//! Arcs are parametrized around their center by a signed radius `r` and a
//! polar angle `phi`: `center + r * (cos phi, sin phi)`. A negative radius
//! mirrors the sample through the center, which lets left and right turns
//! share one parametrization.

use std::f64::consts::TAU;

use super::types::Point;

const MIN_ARC_SAMPLES: u32 = 2;
const MIN_CIRCLE_SAMPLES: u32 = 3;

/// Point on a circle of signed radius `radius` at polar angle `phi`.
pub fn arc_point(center: Point, radius: f64, phi: f64) -> Point {
    center + Point::from_angle(phi) * radius
}

/// Samples `samples` points from `phi_start` to `phi_end` inclusive.
pub fn arc_samples(
    center: Point,
    radius: f64,
    phi_start: f64,
    phi_end: f64,
    samples: u32,
) -> Vec<Point> {
    let n = samples.max(MIN_ARC_SAMPLES);
    let step = (phi_end - phi_start) / f64::from(n - 1);
    (0..n)
        .map(|i| arc_point(center, radius, step.mul_add(f64::from(i), phi_start)))
        .collect()
}

/// Closed outline of the annular sector between two signed radii.
///
/// The sweep is widened by `inset` radians at both ends, in the direction of
/// travel, so adjacent pieces overlap at their seams. The inner boundary is
/// emitted first, then the outer boundary in reverse.
pub fn annular_sector(
    center: Point,
    radius_a: f64,
    radius_b: f64,
    phi_start: f64,
    phi_end: f64,
    samples: u32,
    inset: f64,
) -> Vec<Point> {
    let direction: f64 = if phi_end >= phi_start { 1.0 } else { -1.0 };
    let from = direction.mul_add(-inset, phi_start);
    let to = direction.mul_add(inset, phi_end);

    let mut ring = arc_samples(center, radius_a, from, to, samples);
    let mut outer = arc_samples(center, radius_b, from, to, samples);
    outer.reverse();
    ring.append(&mut outer);
    ring
}

/// Regular polygon approximating a full circle.
pub fn circle_ring(center: Point, radius: f64, samples: u32) -> Vec<Point> {
    let n = samples.max(MIN_CIRCLE_SAMPLES);
    let step = TAU / f64::from(n);
    (0..n)
        .map(|i| arc_point(center, radius, step * f64::from(i)))
        .collect()
}
