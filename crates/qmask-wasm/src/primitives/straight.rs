//! Straight coplanar segment.

use crate::config::GeometryConfig;
use crate::element::{Connection, Connections, LocalGeometry, Shape};
use crate::error::{positive, LayoutError};
use crate::geometry::{rectangle_ring, Point, Region, RegionPair};

use super::cross_section::CrossSection;

/// A straight run along local +x from the origin.
///
/// Metal is the centered conductor strip; clearance is one strip of width
/// `gap` on each side. A zero width or zero gap omits the corresponding
/// region; a zero-width segment is an open end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Straight {
    cross_section: CrossSection,
    length: f64,
}

impl Straight {
    /// Creates a straight segment.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] unless `length > 0`.
    pub fn new(cross_section: CrossSection, length: f64) -> Result<Self, LayoutError> {
        Ok(Self {
            cross_section,
            length: positive(length, "straight length")?,
        })
    }

    /// Segment length.
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Cross-section.
    pub const fn cross_section(&self) -> CrossSection {
        self.cross_section
    }
}

impl Shape for Straight {
    fn kind(&self) -> &'static str {
        "straight"
    }

    fn build_local_geometry(&self, _cfg: &GeometryConfig) -> Result<LocalGeometry, LayoutError> {
        let half_w = self.cross_section.width() / 2.0;
        let gap = self.cross_section.gap();
        let l = self.length;

        let metal = if half_w > 0.0 {
            Region::rectangle(Point::new(0.0, -half_w), Point::new(l, half_w))
        } else {
            Region::new()
        };
        let clearance = if gap > 0.0 {
            Region::from_disjoint(vec![
                rectangle_ring(Point::new(0.0, half_w), Point::new(l, half_w + gap)),
                rectangle_ring(Point::new(0.0, -half_w - gap), Point::new(l, -half_w)),
            ])
        } else {
            Region::new()
        };

        Ok(LocalGeometry::single(
            Connections::endpoints(
                Connection::new(Point::ORIGIN, 0.0),
                Connection::new(Point::new(l, 0.0), 0.0),
            ),
            RegionPair::new(metal, clearance),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::element::{Element, Primitive, END};
    use crate::geometry::{Transform, DEFAULT_REGION};

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    fn build(width: f64, gap: f64, length: f64) -> Primitive {
        let cs = CrossSection::new(width, gap).expect("valid cross-section");
        let s = Straight::new(cs, length).expect("valid straight");
        Primitive::build(&s, &GeometryConfig::default()).expect("straight builds")
    }

    // --- UT-STR-001: width 10, gap 5, length 100 ---

    #[test]
    fn ut_str_001_areas_are_exact() {
        let p = build(10.0, 5.0, 100.0);
        let pair = p.regions().get(DEFAULT_REGION).expect("main region");
        assert_close(pair.metal.area(), 1000.0, 1e-9);
        assert_close(pair.clearance.area(), 1000.0, 1e-9);
        assert_eq!(pair.clearance.polygon_count(), 2);
        let end = p.connections().require(END).expect("end");
        assert!(end.point.approx_eq(Point::new(100.0, 0.0), 1e-12));
        assert_eq!(end.angle, Some(0.0));
    }

    // --- UT-STR-002: Zero gap omits clearance entirely ---

    #[test]
    fn ut_str_002_zero_gap_omits_clearance() {
        let p = build(10.0, 0.0, 50.0);
        let pair = p.regions().get(DEFAULT_REGION).expect("main region");
        assert!(pair.clearance.is_empty());
        assert_close(pair.metal.area(), 500.0, 1e-9);
    }

    // --- UT-STR-003: Zero width is an open end ---

    #[test]
    fn ut_str_003_zero_width_is_open_end() {
        let p = build(0.0, 5.0, 10.0);
        let pair = p.regions().get(DEFAULT_REGION).expect("main region");
        assert!(pair.metal.is_empty());
        assert_close(pair.clearance.area(), 100.0, 1e-9);
        assert_eq!(pair.clearance.polygon_count(), 1);
    }

    // --- UT-STR-004: Non-positive length is rejected ---

    #[test]
    fn ut_str_004_rejects_zero_length() {
        let cs = CrossSection::new(10.0, 5.0).expect("valid cross-section");
        assert!(matches!(
            Straight::new(cs, 0.0),
            Err(LayoutError::InvalidParameters(_))
        ));
        assert!(Straight::new(cs, -3.0).is_err());
    }

    // --- UT-STR-005: Metal and clearance do not overlap ---

    #[test]
    fn ut_str_005_clearance_surrounds_metal() {
        let element = Element::from(build(10.0, 5.0, 100.0));
        let pair = element.local_regions(DEFAULT_REGION);
        assert!(pair.metal.intersect(&pair.clearance).area() < 1e-9);
        let placed = crate::element::flatten_region(
            &element,
            DEFAULT_REGION,
            &Transform::new(0.3, true, Point::new(5.0, 7.0)),
        );
        assert_close(placed.metal.area(), 1000.0, 1e-6);
    }
}
