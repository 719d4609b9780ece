//! Polygon regions with boolean union/subtraction.
//!
//! A [`Region`] is a `geo::MultiPolygon` whose exterior rings are kept
//! counter-clockwise. Boolean work is delegated to `geo::BooleanOps`.

use geo::orient::{Direction, Orient};
use geo::{Area, BooleanOps, BoundingRect, Coord, LineString, MapCoords, MultiPolygon, Polygon};

use super::transform::Transform;
use super::types::{BoundingBox, Point};

/// A set of polygons (with holes) in one coordinate frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    polygons: MultiPolygon<f64>,
}

impl Region {
    /// Creates an empty region.
    pub fn new() -> Self {
        Self {
            polygons: MultiPolygon::new(Vec::new()),
        }
    }

    /// Wraps an existing multipolygon.
    pub fn from_multi_polygon(polygons: MultiPolygon<f64>) -> Self {
        Self {
            polygons: polygons.orient(Direction::Default),
        }
    }

    /// Builds a single-polygon region from a ring of points.
    ///
    /// The ring is closed automatically. Rings with fewer than three points
    /// or with zero area give an empty region.
    pub fn from_points(points: &[Point]) -> Self {
        ring_polygon(points).map_or_else(Self::new, |polygon| Self {
            polygons: MultiPolygon::new(vec![polygon]),
        })
    }

    /// Builds a region from rings that are known not to overlap.
    ///
    /// No boolean operation runs, so local areas stay exact.
    pub fn from_disjoint<I>(rings: I) -> Self
    where
        I: IntoIterator<Item = Vec<Point>>,
    {
        let polygons = rings
            .into_iter()
            .filter_map(|ring| ring_polygon(&ring))
            .collect::<Vec<_>>();
        Self {
            polygons: MultiPolygon::new(polygons),
        }
    }

    /// Axis-aligned rectangle spanning two corners.
    pub fn rectangle(a: Point, b: Point) -> Self {
        Self::from_points(&rectangle_ring(a, b))
    }

    /// Unions `other` into this region.
    pub fn insert(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.polygons = other.polygons.clone();
            return;
        }
        self.polygons = self.polygons.union(&other.polygons);
    }

    /// Returns `self \ other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        Self {
            polygons: self.polygons.difference(&other.polygons),
        }
    }

    /// Returns `self ∩ other`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::new();
        }
        Self {
            polygons: self.polygons.intersection(&other.polygons),
        }
    }

    /// Area of the points in exactly one of the two regions.
    ///
    /// Zero (within tolerance) means the regions are set-equal.
    pub fn symmetric_difference_area(&self, other: &Self) -> f64 {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => 0.0,
            (true, false) => other.area(),
            (false, true) => self.area(),
            (false, false) => self.polygons.xor(&other.polygons).unsigned_area(),
        }
    }

    /// Applies `transform` to every vertex.
    #[must_use]
    pub fn transformed(&self, transform: &Transform) -> Self {
        let mapped = self.polygons.map_coords(|c| transform.apply_coord(c));
        if transform.mirror {
            Self::from_multi_polygon(mapped)
        } else {
            Self { polygons: mapped }
        }
    }

    /// Total enclosed area (holes excluded).
    pub fn area(&self) -> f64 {
        self.polygons.unsigned_area()
    }

    /// Bounding box, or `None` for an empty region.
    pub fn bounds(&self) -> Option<BoundingBox> {
        let rect = self.polygons.bounding_rect()?;
        Some(BoundingBox {
            min_x: rect.min().x,
            min_y: rect.min().y,
            max_x: rect.max().x,
            max_y: rect.max().y,
        })
    }

    /// Returns `true` when the region holds no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.0.is_empty()
    }

    /// The underlying polygons.
    pub const fn polygons(&self) -> &MultiPolygon<f64> {
        &self.polygons
    }

    /// Number of polygons.
    pub fn polygon_count(&self) -> usize {
        self.polygons.0.len()
    }

    /// Number of stored ring vertices, closing coordinates included.
    pub fn vertex_count(&self) -> usize {
        self.polygons
            .iter()
            .map(|p| {
                p.exterior().0.len() + p.interiors().iter().map(|r| r.0.len()).sum::<usize>()
            })
            .sum()
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

/// The four corners of the axis-aligned rectangle spanned by `a` and `b`.
pub fn rectangle_ring(a: Point, b: Point) -> Vec<Point> {
    vec![
        Point::new(a.x, a.y),
        Point::new(b.x, a.y),
        Point::new(b.x, b.y),
        Point::new(a.x, b.y),
    ]
}

fn ring_polygon(points: &[Point]) -> Option<Polygon<f64>> {
    if points.len() < 3 {
        log::debug!("dropping ring with {} point(s)", points.len());
        return None;
    }
    let coords = points.iter().copied().map(Coord::from).collect::<Vec<_>>();
    let polygon = Polygon::new(LineString::from(coords), Vec::new());
    if polygon.unsigned_area() <= f64::EPSILON {
        log::debug!("dropping zero-area ring");
        return None;
    }
    Some(polygon.orient(Direction::Default))
}
