//! Two-layer test pad.

use crate::config::GeometryConfig;
use crate::element::{Connection, Connections, LocalGeometry, Shape};
use crate::error::{positive, LayoutError};
use crate::geometry::{Point, Region, RegionPair, EL_REGION, PHOTO_REGION};

/// A square pad drawn by photolithography with a thin lead drawn by
/// electron-beam lithography.
///
/// The pad spans `x` in `[0, size]`, centered on the x-axis. The lead
/// overlaps the pad by `min(lead_width, size)` and ends at the `end`
/// connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualLayerPad {
    size: f64,
    lead_length: f64,
    lead_width: f64,
}

impl DualLayerPad {
    /// Creates a pad.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] unless every dimension is
    /// positive.
    pub fn new(size: f64, lead_length: f64, lead_width: f64) -> Result<Self, LayoutError> {
        Ok(Self {
            size: positive(size, "pad size")?,
            lead_length: positive(lead_length, "lead length")?,
            lead_width: positive(lead_width, "lead width")?,
        })
    }
}

impl Shape for DualLayerPad {
    fn kind(&self) -> &'static str {
        "dual_layer_pad"
    }

    fn build_local_geometry(&self, _cfg: &GeometryConfig) -> Result<LocalGeometry, LayoutError> {
        let half = self.size / 2.0;
        let half_lead = self.lead_width / 2.0;
        let end_x = self.size + self.lead_length;
        let overlap = self.lead_width.min(self.size);

        let pad = Region::rectangle(Point::new(0.0, -half), Point::new(self.size, half));
        let lead = Region::rectangle(
            Point::new(self.size - overlap, -half_lead),
            Point::new(end_x, half_lead),
        );

        let connections = Connections::endpoints(
            Connection::new(Point::ORIGIN, 0.0),
            Connection::new(Point::new(end_x, 0.0), 0.0),
        );
        Ok(LocalGeometry {
            connections,
            ..LocalGeometry::default()
        }
        .with_region(PHOTO_REGION, RegionPair::new(pad, Region::new()))
        .with_region(EL_REGION, RegionPair::new(lead, Region::new())))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::element::{Element, Primitive};

    #[test]
    fn ut_pad_001_two_regions() {
        let pad = DualLayerPad::new(20.0, 30.0, 2.0).expect("valid pad");
        let element = Element::from(
            Primitive::build(&pad, &GeometryConfig::default()).expect("pad builds"),
        );
        assert_eq!(element.region_names(), vec![PHOTO_REGION, EL_REGION]);
        assert!((element.local_regions(PHOTO_REGION).metal.area() - 400.0).abs() < 1e-9);
        assert!((element.local_regions(EL_REGION).metal.area() - 64.0).abs() < 1e-9);
        assert!(element.local_regions("main").is_empty());
    }
}
