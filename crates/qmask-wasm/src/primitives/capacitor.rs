//! Gap and interdigitated capacitors.
//!
//! Both are laid out along local +x so they chain like a waveguide segment.

use std::f64::consts::FRAC_PI_2;

use crate::config::GeometryConfig;
use crate::element::{Connection, Connections, LocalGeometry, Shape};
use crate::error::{non_negative, positive, LayoutError};
use crate::geometry::{Point, Region, RegionPair, Transform};

use super::cross_section::CrossSection;

/// An interruption of a waveguide: a clearance box of length `gap_size`
/// spanning the full footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapCapacitor {
    cross_section: CrossSection,
    gap_size: f64,
}

impl GapCapacitor {
    /// Creates a gap capacitor.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] unless `gap_size > 0`.
    pub fn new(cross_section: CrossSection, gap_size: f64) -> Result<Self, LayoutError> {
        Ok(Self {
            cross_section,
            gap_size: positive(gap_size, "gap capacitor size")?,
        })
    }

    /// Cross-section of the waveguide it joins.
    pub const fn cross_section(&self) -> CrossSection {
        self.cross_section
    }
}

impl Shape for GapCapacitor {
    fn kind(&self) -> &'static str {
        "gap_capacitor"
    }

    fn build_local_geometry(&self, _cfg: &GeometryConfig) -> Result<LocalGeometry, LayoutError> {
        let half_b = self.cross_section.half_b();
        let clearance = Region::rectangle(
            Point::new(0.0, -half_b),
            Point::new(self.gap_size, half_b),
        );
        Ok(LocalGeometry::single(
            Connections::endpoints(
                Connection::new(Point::ORIGIN, 0.0),
                Connection::new(Point::new(self.gap_size, 0.0), 0.0),
            ),
            RegionPair::new(Region::new(), clearance),
        ))
    }
}

/// Which pad carries which fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FingerConfig {
    /// `N` fingers on the start pad, `N - 1` on the end pad.
    #[default]
    DiffNStart,
    /// `N - 1` fingers on the start pad, `N` on the end pad.
    DiffNEnd,
    /// `N` fingers on both pads, the outermost left finger on the start pad.
    SameNLeft,
    /// `N` fingers on both pads, the outermost left finger on the end pad.
    SameNRight,
}

impl FingerConfig {
    const fn is_odd(self) -> bool {
        matches!(self, Self::DiffNStart | Self::DiffNEnd)
    }

    const fn starts_on_first_pad(self) -> bool {
        matches!(self, Self::DiffNStart | Self::SameNLeft)
    }
}

/// Finger geometry of an [`InterdigitatedCapacitor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerParams {
    /// Width of one finger.
    pub finger_width: f64,
    /// Spacing between adjacent fingers.
    pub finger_gap: f64,
    /// Finger length measured from its pad.
    pub finger_length: f64,
    /// Gap between a finger tip and the opposite pad.
    pub interdigit_gap: f64,
    /// Thickness of each pad along the signal direction.
    pub pad_width: f64,
    /// Clearance beside the capacitor on both sides.
    pub side_gap: f64,
    /// Fingers per pad (see [`FingerConfig`]).
    pub count: u32,
}

/// Two pads with interleaved fingers between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterdigitatedCapacitor {
    params: FingerParams,
    config: FingerConfig,
}

impl InterdigitatedCapacitor {
    /// Creates an interdigitated capacitor.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] for non-positive finger
    /// dimensions, a negative side gap, or a zero finger count.
    pub fn new(params: FingerParams, config: FingerConfig) -> Result<Self, LayoutError> {
        positive(params.finger_width, "finger width")?;
        positive(params.finger_gap, "finger gap")?;
        positive(params.finger_length, "finger length")?;
        positive(params.interdigit_gap, "interdigit gap")?;
        positive(params.pad_width, "pad width")?;
        non_negative(params.side_gap, "side gap")?;
        if params.count == 0 {
            return Err(LayoutError::InvalidParameters(
                "interdigitated capacitor needs at least one finger".to_string(),
            ));
        }
        Ok(Self { params, config })
    }

    /// Width of the pads across the signal direction.
    pub fn capacitor_width(&self) -> f64 {
        let p = &self.params;
        let n = f64::from(p.count);
        if self.config.is_odd() {
            2.0 * (n - 1.0) * (p.finger_gap + p.finger_width) + p.finger_width
        } else {
            2.0 * n * (p.finger_gap + p.finger_width) - p.finger_gap
        }
    }

    /// Distance between the two connection points.
    pub fn length(&self) -> f64 {
        let p = &self.params;
        2.0f64.mul_add(p.pad_width, p.finger_length + p.interdigit_gap)
    }

    /// Cross-section of a waveguide that joins the pads flush.
    ///
    /// # Errors
    ///
    /// Never fails for a validated capacitor; kept fallible because it goes
    /// through [`CrossSection::new`].
    pub fn cross_section(&self) -> Result<CrossSection, LayoutError> {
        CrossSection::new(self.capacitor_width(), self.params.side_gap)
    }

    /// Draws the capacitor with pads stacked along +y, then the fingers.
    fn draw_upright(&self) -> RegionPair {
        let p = &self.params;
        let half = self.capacitor_width() / 2.0;
        let y_upper = p.pad_width + p.finger_length + p.interdigit_gap;
        let top = y_upper + p.pad_width;

        let mut metal = Region::rectangle(Point::new(-half, 0.0), Point::new(half, p.pad_width));
        metal.insert(&Region::rectangle(
            Point::new(-half, y_upper),
            Point::new(half, top),
        ));
        let mut clearance = Region::new();

        let (y1, y2, cy1, cy2) = if self.config.starts_on_first_pad() {
            (
                p.pad_width,
                y_upper,
                p.pad_width + p.finger_length,
                p.pad_width + p.interdigit_gap,
            )
        } else {
            (
                y_upper,
                p.pad_width,
                y_upper - p.finger_length,
                y_upper - p.interdigit_gap,
            )
        };

        let cell = 2.0 * (p.finger_width + p.finger_gap);
        for i in 0..p.count {
            let x0 = cell.mul_add(f64::from(i), -half);
            let p1 = Point::new(x0 + p.finger_width, y1);
            let p2 = Point::new(x0, cy1);
            let p3 = Point::new(p1.x, y2);
            let p4 = Point::new(p1.x + p.finger_gap, y1);
            let p5 = Point::new(p4.x + p.finger_width, cy2);
            let p6 = Point::new(p4.x, p3.y);
            let p7 = Point::new(p5.x, p4.y);
            let p8 = Point::new(p7.x + p.finger_gap, p6.y);

            metal.insert(&Region::rectangle(p1, p2));
            clearance.insert(&Region::rectangle(p2, p3));
            clearance.insert(&Region::rectangle(p1, p6));

            let last = i + 1 == p.count;
            if !self.config.is_odd() || !last {
                metal.insert(&Region::rectangle(p5, p6));
                clearance.insert(&Region::rectangle(p4, p5));
                if !last {
                    clearance.insert(&Region::rectangle(p7, p8));
                }
            }
        }

        if p.side_gap > 0.0 {
            clearance.insert(&Region::rectangle(
                Point::new(-half - p.side_gap, 0.0),
                Point::new(-half, top),
            ));
            clearance.insert(&Region::rectangle(
                Point::new(half, 0.0),
                Point::new(half + p.side_gap, top),
            ));
        }
        // Clearance never covers metal.
        let clearance = clearance.subtract(&metal);
        RegionPair::new(metal, clearance)
    }
}

impl Shape for InterdigitatedCapacitor {
    fn kind(&self) -> &'static str {
        "interdigitated_capacitor"
    }

    fn build_local_geometry(&self, _cfg: &GeometryConfig) -> Result<LocalGeometry, LayoutError> {
        let upright = self.draw_upright();
        let to_x = Transform::rotation(-FRAC_PI_2);
        Ok(LocalGeometry::single(
            Connections::endpoints(
                Connection::new(Point::ORIGIN, 0.0),
                Connection::new(Point::new(self.length(), 0.0), 0.0),
            ),
            RegionPair::new(
                upright.metal.transformed(&to_x),
                upright.clearance.transformed(&to_x),
            ),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::element::Primitive;
    use crate::geometry::DEFAULT_REGION;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    fn params(count: u32) -> FingerParams {
        FingerParams {
            finger_width: 2.0,
            finger_gap: 1.0,
            finger_length: 10.0,
            interdigit_gap: 1.0,
            pad_width: 3.0,
            side_gap: 4.0,
            count,
        }
    }

    fn regions(cap: &InterdigitatedCapacitor) -> RegionPair {
        let p = Primitive::build(cap, &GeometryConfig::default()).expect("capacitor builds");
        p.regions().get(DEFAULT_REGION).cloned().unwrap_or_default()
    }

    #[test]
    fn ut_cap_001_gap_capacitor_box() {
        let cs = CrossSection::new(10.0, 5.0).expect("valid cross-section");
        let gap = GapCapacitor::new(cs, 4.0).expect("valid gap");
        let p = Primitive::build(&gap, &GeometryConfig::default()).expect("gap builds");
        let pair = p.regions().get(DEFAULT_REGION).expect("main region");
        assert!(pair.metal.is_empty());
        assert_close(pair.clearance.area(), 80.0, 1e-12);
    }

    #[test]
    fn ut_cap_002_odd_config_metal_area() {
        let cap = InterdigitatedCapacitor::new(params(2), FingerConfig::DiffNStart)
            .expect("valid capacitor");
        assert_close(cap.capacitor_width(), 8.0, 1e-12);
        assert_close(cap.length(), 17.0, 1e-12);
        let pair = regions(&cap);
        // two pads 8x3, three fingers 2x10
        assert_close(pair.metal.area(), 108.0, 1e-6);
        assert!(pair.metal.intersect(&pair.clearance).area() < 1e-6);
        let bounds = pair.metal.bounds().expect("metal bounds");
        assert_close(bounds.min_x, 0.0, 1e-9);
        assert_close(bounds.max_x, 17.0, 1e-9);
        assert_close(bounds.max_y - bounds.min_y, 8.0, 1e-9);
    }

    #[test]
    fn ut_cap_003_even_config_metal_area() {
        let cap = InterdigitatedCapacitor::new(params(2), FingerConfig::SameNRight)
            .expect("valid capacitor");
        assert_close(cap.capacitor_width(), 11.0, 1e-12);
        let pair = regions(&cap);
        // two pads 11x3, four fingers 2x10
        assert_close(pair.metal.area(), 146.0, 1e-6);
        let cs = cap.cross_section().expect("valid cross-section");
        assert_close(cs.width(), 11.0, 1e-12);
        assert_close(cs.gap(), 4.0, 1e-12);
    }

    #[test]
    fn ut_cap_004_rejects_zero_fingers() {
        assert!(InterdigitatedCapacitor::new(params(0), FingerConfig::SameNLeft).is_err());
        let mut bad = params(2);
        bad.finger_gap = 0.0;
        assert!(InterdigitatedCapacitor::new(bad, FingerConfig::DiffNEnd).is_err());
    }
}
