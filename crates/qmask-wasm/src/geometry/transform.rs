//! Rigid placement transforms: optional mirror, rotation, translation.

use geo::Coord;
use serde::{Deserialize, Serialize};

use super::types::Point;

/// A rigid map applied as: mirror about the local x-axis (if set), then
/// rotate counter-clockwise by `rotation`, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Rotation angle in radians.
    pub rotation: f64,
    /// Mirror about the local x-axis before rotating.
    pub mirror: bool,
    /// Translation applied last.
    pub translation: Point,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        mirror: false,
        translation: Point::ORIGIN,
    };

    /// Creates a transform from its parts.
    pub const fn new(rotation: f64, mirror: bool, translation: Point) -> Self {
        Self {
            rotation,
            mirror,
            translation,
        }
    }

    /// A pure translation.
    pub const fn translation(offset: Point) -> Self {
        Self::new(0.0, false, offset)
    }

    /// A pure rotation about the origin.
    pub const fn rotation(angle: f64) -> Self {
        Self::new(angle, false, Point::ORIGIN)
    }

    /// Rotation about the origin followed by a translation to `origin`.
    ///
    /// This is the frame of a child whose local start lands on `origin`
    /// heading along `angle`.
    pub const fn at(origin: Point, angle: f64) -> Self {
        Self::new(angle, false, origin)
    }

    /// Returns `self ∘ inner`: the map that applies `inner` first.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        let inner_rotation = if self.mirror {
            -inner.rotation
        } else {
            inner.rotation
        };
        Self {
            rotation: self.rotation + inner_rotation,
            mirror: self.mirror ^ inner.mirror,
            translation: self.apply_point(inner.translation),
        }
    }

    /// Maps a vector (no translation).
    pub fn apply_vector(&self, v: Point) -> Point {
        let mirrored = if self.mirror { Point::new(v.x, -v.y) } else { v };
        mirrored.rotate(self.rotation)
    }

    /// Maps a point.
    pub fn apply_point(&self, p: Point) -> Point {
        self.apply_vector(p) + self.translation
    }

    /// Maps a heading angle.
    pub fn apply_angle(&self, angle: f64) -> f64 {
        if self.mirror {
            self.rotation - angle
        } else {
            self.rotation + angle
        }
    }

    /// Maps a `geo` coordinate; used with `MapCoords`.
    pub fn apply_coord(&self, c: Coord<f64>) -> Coord<f64> {
        self.apply_point(Point::from(c)).into()
    }

    /// The inverse map, so that `t.inverse().compose(&t)` is the identity.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let rotation = if self.mirror {
            self.rotation
        } else {
            -self.rotation
        };
        let linear = Self::new(rotation, self.mirror, Point::ORIGIN);
        Self {
            translation: -linear.apply_vector(self.translation),
            ..linear
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn sample() -> [Transform; 4] {
        [
            Transform::new(0.7, false, Point::new(3.0, -2.0)),
            Transform::new(-1.3, true, Point::new(-5.0, 11.0)),
            Transform::new(PI, true, Point::ORIGIN),
            Transform::translation(Point::new(0.5, 0.25)),
        ]
    }

    #[test]
    fn ut_tf_001_mirror_then_rotate_then_translate() {
        let t = Transform::new(FRAC_PI_2, true, Point::new(10.0, 0.0));
        let p = t.apply_point(Point::new(1.0, 2.0));
        // mirror -> (1, -2); rotate +90 -> (2, 1); translate -> (12, 1)
        assert!(p.approx_eq(Point::new(12.0, 1.0), EPSILON));
    }

    #[test]
    fn ut_tf_002_compose_matches_sequential_application() {
        let p = Point::new(1.5, -0.75);
        for outer in sample() {
            for inner in sample() {
                let composed = outer.compose(&inner);
                let expected = outer.apply_point(inner.apply_point(p));
                assert!(composed.apply_point(p).approx_eq(expected, EPSILON));
                let angle = 0.4;
                let expected_angle = outer.apply_angle(inner.apply_angle(angle));
                assert!((composed.apply_angle(angle) - expected_angle).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn ut_tf_003_inverse_round_trips() {
        let p = Point::new(-4.0, 9.0);
        for t in sample() {
            let back = t.inverse().apply_point(t.apply_point(p));
            assert!(back.approx_eq(p, EPSILON));
            let id = t.inverse().compose(&t);
            assert!(id.apply_point(p).approx_eq(p, EPSILON));
            assert!(!id.mirror);
        }
    }

    #[test]
    fn ut_tf_004_mirrored_heading_flips_sign() {
        let t = Transform::new(0.0, true, Point::ORIGIN);
        assert!((t.apply_angle(0.3) + 0.3).abs() < EPSILON);
        let heading = t.apply_vector(Point::from_angle(0.3));
        assert!((heading.angle() - t.apply_angle(0.3)).abs() < EPSILON);
    }
}
