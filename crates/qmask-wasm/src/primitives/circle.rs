//! Disc drawn as metal or as a ground-plane cut-out.

use crate::config::GeometryConfig;
use crate::element::{Connection, Connections, LocalGeometry, Shape, START};
use crate::error::{positive, LayoutError};
use crate::geometry::{circle_ring, Point, Region, RegionPair};

use super::arc::CENTER;

/// A disc centered on the origin.
///
/// A solid disc is metal; a hollow one is clearance only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
    solid: bool,
}

impl Circle {
    /// Creates a disc.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] unless `radius > 0`.
    pub fn new(radius: f64, solid: bool) -> Result<Self, LayoutError> {
        Ok(Self {
            radius: positive(radius, "circle radius")?,
            solid,
        })
    }

    /// Disc radius.
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }

    fn build_local_geometry(&self, cfg: &GeometryConfig) -> Result<LocalGeometry, LayoutError> {
        let disc = Region::from_points(&circle_ring(Point::ORIGIN, self.radius, cfg.circle_points));
        let pair = if self.solid {
            RegionPair::new(disc, Region::new())
        } else {
            RegionPair::new(Region::new(), disc)
        };
        Ok(LocalGeometry::single(
            Connections::new()
                .with(START, Connection::new(Point::ORIGIN, 0.0))
                .with(CENTER, Connection::anchor(Point::ORIGIN)),
            pair,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::element::Primitive;
    use crate::geometry::DEFAULT_REGION;

    #[test]
    fn ut_circ_001_solid_and_hollow() {
        let cfg = GeometryConfig::default();
        let solid = Primitive::build(&Circle::new(10.0, true).expect("valid"), &cfg)
            .expect("circle builds");
        let pair = solid.regions().get(DEFAULT_REGION).expect("main region");
        assert!((pair.metal.area() - PI * 100.0).abs() / (PI * 100.0) < 1e-3);
        assert!(pair.clearance.is_empty());

        let hollow = Primitive::build(&Circle::new(10.0, false).expect("valid"), &cfg)
            .expect("circle builds");
        let pair = hollow.regions().get(DEFAULT_REGION).expect("main region");
        assert!(pair.metal.is_empty());
        assert!(!pair.clearance.is_empty());
    }

    #[test]
    fn ut_circ_002_rejects_zero_radius() {
        assert!(Circle::new(0.0, true).is_err());
    }
}
