//! Metal polygon from an explicit point list.

use crate::config::GeometryConfig;
use crate::element::{Connection, Connections, LocalGeometry, Shape, START};
use crate::error::LayoutError;
use crate::geometry::{Point, Region, RegionPair};

/// A closed outline drawn as metal, with no implicit clearance.
///
/// Points are in the local frame. `start` is the origin heading +x; further
/// connections can be attached with [`PolygonShape::with_connection`].
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    points: Vec<Point>,
    connections: Connections,
}

impl PolygonShape {
    /// Creates a polygon shape.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] for fewer than three points,
    /// non-finite coordinates, or a zero-area outline.
    pub fn new(points: Vec<Point>) -> Result<Self, LayoutError> {
        if points.len() < 3 {
            return Err(LayoutError::InvalidParameters(format!(
                "polygon needs at least 3 points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(LayoutError::InvalidParameters(
                "polygon coordinates must be finite".to_string(),
            ));
        }
        if Region::from_points(&points).is_empty() {
            return Err(LayoutError::InvalidParameters(
                "polygon outline has zero area".to_string(),
            ));
        }
        Ok(Self {
            points,
            connections: Connections::new().with(START, Connection::new(Point::ORIGIN, 0.0)),
        })
    }

    /// Adds or replaces a named connection.
    #[must_use]
    pub fn with_connection(mut self, name: &str, connection: Connection) -> Self {
        self.connections.insert(name, connection);
        self
    }

    /// Outline points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Shape for PolygonShape {
    fn kind(&self) -> &'static str {
        "polygon"
    }

    fn build_local_geometry(&self, _cfg: &GeometryConfig) -> Result<LocalGeometry, LayoutError> {
        Ok(LocalGeometry::single(
            self.connections.clone(),
            RegionPair::new(Region::from_points(&self.points), Region::new()),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::element::{Primitive, END};
    use crate::geometry::DEFAULT_REGION;

    #[test]
    fn ut_poly_001_metal_only() {
        let shape = PolygonShape::new(vec![
            Point::ORIGIN,
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
        ])
        .expect("valid triangle")
        .with_connection(END, Connection::new(Point::new(4.0, 1.5), 0.0));
        let p = Primitive::build(&shape, &GeometryConfig::default()).expect("polygon builds");
        let pair = p.regions().get(DEFAULT_REGION).expect("main region");
        assert!((pair.metal.area() - 6.0).abs() < 1e-12);
        assert!(pair.clearance.is_empty());
        assert_eq!(p.connections().len(), 2);
    }

    #[test]
    fn ut_poly_002_rejects_degenerate_outlines() {
        assert!(PolygonShape::new(vec![Point::ORIGIN, Point::new(1.0, 0.0)]).is_err());
        assert!(PolygonShape::new(vec![
            Point::ORIGIN,
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ])
        .is_err());
        assert!(PolygonShape::new(vec![
            Point::ORIGIN,
            Point::new(f64::NAN, 1.0),
            Point::new(2.0, 0.0),
        ])
        .is_err());
    }
}
