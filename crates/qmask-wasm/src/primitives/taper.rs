//! Linear adapter between two cross-sections.

use crate::config::GeometryConfig;
use crate::element::{Connection, Connections, LocalGeometry, Shape};
use crate::error::{positive, LayoutError};
use crate::geometry::{Point, Region, RegionPair};

use super::cross_section::CrossSection;

/// A straight run whose width and gap interpolate linearly from `from` at
/// the origin to `to` at `(length, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Taper {
    from: CrossSection,
    to: CrossSection,
    length: f64,
}

impl Taper {
    /// Creates a taper.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] unless `length > 0`.
    pub fn new(from: CrossSection, to: CrossSection, length: f64) -> Result<Self, LayoutError> {
        Ok(Self {
            from,
            to,
            length: positive(length, "taper length")?,
        })
    }

    /// Taper length.
    pub const fn length(&self) -> f64 {
        self.length
    }
}

impl Shape for Taper {
    fn kind(&self) -> &'static str {
        "taper"
    }

    fn build_local_geometry(&self, _cfg: &GeometryConfig) -> Result<LocalGeometry, LayoutError> {
        let l = self.length;
        let (w0, w1) = (self.from.width() / 2.0, self.to.width() / 2.0);
        let (b0, b1) = (self.from.half_b(), self.to.half_b());

        let metal = Region::from_points(&[
            Point::new(0.0, -w0),
            Point::new(l, -w1),
            Point::new(l, w1),
            Point::new(0.0, w0),
        ]);
        let clearance = Region::from_disjoint(vec![
            vec![
                Point::new(0.0, -b0),
                Point::new(l, -b1),
                Point::new(l, -w1),
                Point::new(0.0, -w0),
            ],
            vec![
                Point::new(0.0, w0),
                Point::new(l, w1),
                Point::new(l, b1),
                Point::new(0.0, b0),
            ],
        ]);

        Ok(LocalGeometry::single(
            Connections::endpoints(
                Connection::new(Point::ORIGIN, 0.0),
                Connection::new(Point::new(l, 0.0), 0.0),
            ),
            RegionPair::new(metal, clearance),
        ))
    }
}
