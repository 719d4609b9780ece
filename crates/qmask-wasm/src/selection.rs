//! Point-and-radius selections handed to a field solver.
//!
//! A solver tags boundaries by asking which edges fall inside a small ball.
//! These helpers pick ball centers from conductor outlines and waveguide
//! ends so that each ball touches exactly the intended boundary.

use serde::Serialize;

use crate::config::GeometryConfig;
use crate::element::{Element, START};
use crate::error::{positive, LayoutError};
use crate::geometry::{BoundingBox, Point, Region};
use crate::primitives::CrossSection;

/// Cosine of 179°: vertices straighter than this count as flat.
const FLAT_VERTEX_COS: f64 = -0.999_847_695;

/// A ball used to select boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundarySelection {
    /// Ball center.
    pub center: Point,
    /// Ball radius.
    pub radius: f64,
}

/// A ball just inside `ring`, next to its lowest vertex.
///
/// The center sits `cfg.selection_inset` along the bisector of the lowest
/// vertex, but no further than half the shorter adjacent edge, and the
/// radius is small enough that the ball touches neither adjacent edge.
/// Returns `None` for rings with fewer than three distinct points around
/// the lowest vertex.
pub fn interior_selection(ring: &[Point], cfg: &GeometryConfig) -> Option<BoundarySelection> {
    let ring = open_ring(ring);
    if ring.len() < 3 {
        return None;
    }
    let (lowest, vertex) = ring
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, Point)>, (i, p)| match best {
            Some((_, b)) if p.y > b.y => best,
            _ => Some((i, *p)),
        })?;
    let next = ring.get((lowest + 1) % ring.len())?;
    let prev = ring.get((lowest + ring.len() - 1) % ring.len())?;

    let v1 = (*next - vertex).normalized()?;
    let v2 = (*prev - vertex).normalized()?;
    let inset = cfg
        .selection_inset
        .min(vertex.distance(*next) / 2.0)
        .min(vertex.distance(*prev) / 2.0);
    let bisector = if v1.dot(v2) < FLAT_VERTEX_COS {
        Point::new(0.0, 1.0)
    } else {
        (v1 + v2).normalized()?
    };

    let clearance = (1.0 - v1.dot(bisector).powi(2))
        .min(1.0 - v2.dot(bisector).powi(2))
        .max(0.0)
        .sqrt();
    Some(BoundarySelection {
        center: vertex + bisector * inset,
        radius: clearance * cfg.selection_radius_factor * inset,
    })
}

/// One interior selection per polygon of a flattened metal region.
pub fn conductor_selections(region: &Region, cfg: &GeometryConfig) -> Vec<BoundarySelection> {
    region
        .polygons()
        .iter()
        .filter_map(|polygon| {
            let ring = polygon
                .exterior()
                .coords()
                .map(|c| Point::from(*c))
                .collect::<Vec<_>>();
            interior_selection(&ring, cfg)
        })
        .collect()
}

/// A small ball at `point`, pulled inward where it would touch the chip edge.
pub fn fine_mesh_selection(
    point: Point,
    chip: &BoundingBox,
    cfg: &GeometryConfig,
) -> BoundarySelection {
    let threshold = cfg.fine_mesh_radius;
    let margin = cfg.chip_edge_margin;
    let pull = |v: f64, lo: f64, hi: f64| {
        if v <= lo + threshold {
            lo + margin
        } else if v >= hi - threshold {
            hi - margin
        } else {
            v
        }
    };
    BoundarySelection {
        center: Point::new(
            pull(point.x, chip.min_x, chip.max_x),
            pull(point.y, chip.min_y, chip.max_y),
        ),
        radius: threshold,
    }
}

/// A lumped port across both gaps at the end of a waveguide.
///
/// Each fin bridges the conductor edge to the ground edge over
/// `launch_length` into the line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortLaunch {
    /// Fin on the right of the launch direction.
    pub fin_a: Vec<Point>,
    /// Fin on the left of the launch direction.
    pub fin_b: Vec<Point>,
    /// Boundary selection inside `fin_a`.
    pub selection_a: BoundarySelection,
    /// Boundary selection inside `fin_b`.
    pub selection_b: BoundarySelection,
    /// Unit vector from the conductor toward the ground for `fin_a`.
    pub ground_direction: Point,
}

impl PortLaunch {
    /// Builds the fins at `origin`, reaching along `inward` into the line.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] for a zero direction, a
    /// non-positive launch length, or a cross-section without a gap.
    pub fn new(
        origin: Point,
        inward: Point,
        cross_section: CrossSection,
        launch_length: f64,
        cfg: &GeometryConfig,
    ) -> Result<Self, LayoutError> {
        let launch_length = positive(launch_length, "launch length")?;
        positive(cross_section.gap(), "port gap")?;
        let along = inward.normalized().ok_or_else(|| {
            LayoutError::InvalidParameters("port launch direction is zero".to_string())
        })?;
        let perp = Point::new(along.y, -along.x);
        let inner = cross_section.width() / 2.0;
        let outer = cross_section.half_b();
        let reach = along * launch_length;

        let fin = |side: f64| {
            vec![
                origin + perp * (side * inner),
                origin + perp * (side * outer),
                origin + reach + perp * (side * outer),
                origin + reach + perp * (side * inner),
            ]
        };
        let fin_a = fin(1.0);
        let fin_b = fin(-1.0);
        let select = |ring: &[Point]| {
            interior_selection(ring, cfg).ok_or_else(|| {
                LayoutError::InvalidParameters("port fin is degenerate".to_string())
            })
        };
        Ok(Self {
            selection_a: select(&fin_a)?,
            selection_b: select(&fin_b)?,
            fin_a,
            fin_b,
            ground_direction: perp,
        })
    }

    /// Builds the port at a named connection of `element`.
    ///
    /// At `start` the fins reach along the heading; at any other connection
    /// they reach against it, back into the line.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownConnection`] for an unknown name, plus
    /// the conditions of [`PortLaunch::new`].
    pub fn on_connection(
        element: &Element,
        connection: &str,
        cross_section: CrossSection,
        launch_length: f64,
        cfg: &GeometryConfig,
    ) -> Result<Self, LayoutError> {
        let c = element.connection(connection)?;
        let heading = Point::from_angle(c.heading());
        let inward = if connection == START { heading } else { -heading };
        Self::new(c.point, inward, cross_section, launch_length, cfg)
    }
}

fn open_ring(ring: &[Point]) -> &[Point] {
    match ring {
        [first, .., last] if ring.len() > 3 && first.approx_eq(*last, f64::EPSILON) => {
            ring.get(..ring.len() - 1).unwrap_or(ring)
        }
        _ => ring,
    }
}
