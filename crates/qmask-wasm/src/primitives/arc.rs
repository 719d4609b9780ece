//! Circular coplanar bend.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::config::GeometryConfig;
use crate::element::{Connection, Connections, LocalGeometry, Shape};
use crate::error::LayoutError;
use crate::geometry::{annular_sector, arc_point, Point, Region, RegionPair};

use super::cross_section::CrossSection;

/// Name of the connection at the bend's center of curvature.
pub const CENTER: &str = "center";

/// A bend of signed radius `radius` sweeping `delta_alpha` radians.
///
/// Positive values turn left (counter-clockwise), negative values turn
/// right. The bend starts at the origin heading `start_angle`, which is 0
/// unless built with [`Arc::with_start_angle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    cross_section: CrossSection,
    radius: f64,
    delta_alpha: f64,
    start_angle: f64,
}

impl Arc {
    /// Creates a bend starting along +x.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] if the radius or sweep is
    /// zero or not finite, if their signs differ, if the sweep exceeds a full
    /// turn, or if `|radius|` is smaller than half the footprint.
    pub fn new(
        cross_section: CrossSection,
        radius: f64,
        delta_alpha: f64,
    ) -> Result<Self, LayoutError> {
        Self::with_start_angle(cross_section, radius, delta_alpha, 0.0)
    }

    /// Creates a bend whose start heading is `start_angle`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Arc::new`], plus a non-finite `start_angle`.
    pub fn with_start_angle(
        cross_section: CrossSection,
        radius: f64,
        delta_alpha: f64,
        start_angle: f64,
    ) -> Result<Self, LayoutError> {
        if !radius.is_finite() || radius == 0.0 {
            return Err(LayoutError::InvalidParameters(format!(
                "arc radius must be finite and non-zero, got {radius}"
            )));
        }
        if !delta_alpha.is_finite() || delta_alpha == 0.0 || delta_alpha.abs() > TAU {
            return Err(LayoutError::InvalidParameters(format!(
                "arc sweep must be non-zero and at most a full turn, got {delta_alpha}"
            )));
        }
        if radius.signum() != delta_alpha.signum() {
            return Err(LayoutError::InvalidParameters(format!(
                "arc radius {radius} and sweep {delta_alpha} must share a sign"
            )));
        }
        if radius.abs() < cross_section.half_b() {
            return Err(LayoutError::InvalidParameters(format!(
                "arc radius {} is smaller than half the footprint {}",
                radius.abs(),
                cross_section.half_b()
            )));
        }
        if !start_angle.is_finite() {
            return Err(LayoutError::InvalidParameters(format!(
                "arc start angle must be finite, got {start_angle}"
            )));
        }
        Ok(Self {
            cross_section,
            radius,
            delta_alpha,
            start_angle,
        })
    }

    /// Signed radius.
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed sweep.
    pub const fn delta_alpha(&self) -> f64 {
        self.delta_alpha
    }

    /// Centerline length `|radius * delta_alpha|`.
    pub fn length(&self) -> f64 {
        (self.radius * self.delta_alpha).abs()
    }

    /// Center of curvature in the local frame.
    pub fn center(&self) -> Point {
        Point::new(-self.start_angle.sin(), self.start_angle.cos()) * self.radius
    }

    /// End point of the centerline in the local frame.
    pub fn end_point(&self) -> Point {
        arc_point(self.center(), self.radius, self.phi_end())
    }

    /// Heading at the end of the bend.
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.delta_alpha
    }

    fn phi_start(&self) -> f64 {
        self.start_angle - FRAC_PI_2
    }

    fn phi_end(&self) -> f64 {
        self.end_angle() - FRAC_PI_2
    }

    fn sector(&self, inner: f64, outer: f64, cfg: &GeometryConfig) -> Region {
        Region::from_points(&annular_sector(
            self.center(),
            inner,
            outer,
            self.phi_start(),
            self.phi_end(),
            cfg.arc_points,
            cfg.arc_angular_inset,
        ))
    }
}

impl Shape for Arc {
    fn kind(&self) -> &'static str {
        "arc"
    }

    fn build_local_geometry(&self, cfg: &GeometryConfig) -> Result<LocalGeometry, LayoutError> {
        let half_w = self.cross_section.width() / 2.0;
        let gap = self.cross_section.gap();
        let r = self.radius;

        let metal = if half_w > 0.0 {
            self.sector(r - half_w, r + half_w, cfg)
        } else {
            Region::new()
        };
        let mut clearance = Region::new();
        if gap > 0.0 {
            clearance.insert(&self.sector(r + half_w, r + half_w + gap, cfg));
            clearance.insert(&self.sector(r - half_w - gap, r - half_w, cfg));
        }

        let connections = Connections::endpoints(
            Connection::new(Point::ORIGIN, self.start_angle),
            Connection::new(self.end_point(), self.end_angle()),
        )
        .with(CENTER, Connection::anchor(self.center()));

        Ok(LocalGeometry::single(connections, RegionPair::new(metal, clearance)))
    }
}
