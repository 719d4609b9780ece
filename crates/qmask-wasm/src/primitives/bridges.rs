//! Straight waveguide crossed by air bridges.

use crate::config::GeometryConfig;
use crate::element::{Connection, Connections, LocalGeometry, Shape};
use crate::error::{non_negative, positive, LayoutError};
use crate::geometry::{rectangle_ring, Point, Region, RegionPair, BRIDGE_REGION, DEFAULT_REGION};

use super::cross_section::CrossSection;
use super::straight::Straight;

/// Dimensions of one air bridge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BridgeParams {
    /// Extent of the bridge strip along the waveguide.
    pub bridge_width: f64,
    /// How far the strip reaches past the footprint on each side.
    pub overhang: f64,
    /// Size of the landing pads beyond the strip ends.
    pub pad_height: f64,
}

impl Default for BridgeParams {
    fn default() -> Self {
        Self {
            bridge_width: 2.0,
            overhang: 2.0,
            pad_height: 2.0,
        }
    }
}

/// A straight run with `count` bridges at equal spacing.
///
/// The waveguide goes to the default region, the bridges to
/// [`BRIDGE_REGION`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirBridges {
    straight: Straight,
    count: u32,
    bridge: BridgeParams,
}

impl AirBridges {
    /// Creates a bridged straight.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] for a non-positive length
    /// or bridge width, negative overhang or pad height, or more bridges
    /// than fit side by side along the run.
    pub fn new(
        cross_section: CrossSection,
        length: f64,
        count: u32,
        bridge: BridgeParams,
    ) -> Result<Self, LayoutError> {
        positive(bridge.bridge_width, "bridge width")?;
        non_negative(bridge.overhang, "bridge overhang")?;
        non_negative(bridge.pad_height, "bridge pad height")?;
        let straight = Straight::new(cross_section, length)?;
        if f64::from(count) * bridge.bridge_width >= length {
            return Err(LayoutError::InvalidParameters(format!(
                "{count} bridges of width {} do not fit on a run of {length}",
                bridge.bridge_width
            )));
        }
        Ok(Self {
            straight,
            count,
            bridge,
        })
    }

    /// Start of each bridge strip along the run.
    pub fn positions(&self) -> Vec<f64> {
        let spacing = self.straight.length() / (f64::from(self.count) + 1.0);
        (1..=self.count).map(|i| spacing * f64::from(i)).collect()
    }
}

impl Shape for AirBridges {
    fn kind(&self) -> &'static str {
        "air_bridges"
    }

    fn build_local_geometry(&self, cfg: &GeometryConfig) -> Result<LocalGeometry, LayoutError> {
        let line = self.straight.build_local_geometry(cfg)?;
        let b = self.straight.cross_section().b();
        let BridgeParams {
            bridge_width,
            overhang,
            pad_height,
        } = self.bridge;
        let reach = b / 2.0 + overhang;

        let mut footprints = Region::new();
        for x in self.positions() {
            let mid = x + bridge_width / 2.0;
            footprints.insert(&Region::rectangle(
                Point::new(x, -reach),
                Point::new(x + bridge_width, reach),
            ));
            if pad_height > 0.0 {
                footprints.insert(&Region::from_disjoint(vec![
                    rectangle_ring(
                        Point::new(mid - b / 4.0, -reach - pad_height),
                        Point::new(mid + b / 4.0, -reach),
                    ),
                    rectangle_ring(
                        Point::new(mid - b / 4.0, reach),
                        Point::new(mid + b / 4.0, reach + pad_height),
                    ),
                ]));
            }
        }

        let connections = Connections::endpoints(
            Connection::new(Point::ORIGIN, 0.0),
            Connection::new(Point::new(self.straight.length(), 0.0), 0.0),
        );
        let main = line.regions.get(DEFAULT_REGION).cloned().unwrap_or_default();
        Ok(LocalGeometry::single(connections, main)
            .with_region(BRIDGE_REGION, RegionPair::new(footprints, Region::new())))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::element::{Element, Primitive};

    #[test]
    fn ut_ab_001_bridges_evenly_spaced() {
        let cs = CrossSection::new(10.0, 5.0).expect("valid cross-section");
        let ab = AirBridges::new(cs, 100.0, 3, BridgeParams::default()).expect("valid bridges");
        assert_eq!(ab.positions(), vec![25.0, 50.0, 75.0]);

        let element = Element::from(
            Primitive::build(&ab, &GeometryConfig::default()).expect("bridges build"),
        );
        let bridges = element.local_regions(BRIDGE_REGION);
        // strip 2 x 24 plus two pads 10 x 2, per bridge
        assert!((bridges.metal.area() - 3.0 * (48.0 + 40.0)).abs() < 1e-6);
        assert_eq!(bridges.metal.polygon_count(), 3);
        let line = element.local_regions(DEFAULT_REGION);
        assert!((line.metal.area() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn ut_ab_002_zero_bridges_is_a_plain_line() {
        let cs = CrossSection::new(10.0, 5.0).expect("valid cross-section");
        let ab = AirBridges::new(cs, 40.0, 0, BridgeParams::default()).expect("valid bridges");
        let p = Primitive::build(&ab, &GeometryConfig::default()).expect("bridges build");
        assert!(p
            .regions()
            .get(BRIDGE_REGION)
            .is_some_and(|pair| pair.is_empty()));
    }

    #[test]
    fn ut_ab_003_too_many_bridges_rejected() {
        let cs = CrossSection::new(10.0, 5.0).expect("valid cross-section");
        let bridge = BridgeParams::default();
        for count in [50, u32::MAX] {
            assert!(matches!(
                AirBridges::new(cs, 100.0, count, bridge),
                Err(LayoutError::InvalidParameters(_))
            ));
        }
        let ab = AirBridges::new(cs, 100.0, 49, bridge).expect("49 bridges fit");
        assert_eq!(ab.positions().len(), 49);
        assert!((ab.positions().first().copied().unwrap_or_default() - 2.0).abs() < 1e-12);
    }
}
