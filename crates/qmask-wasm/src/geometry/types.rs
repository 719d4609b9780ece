//! Core geometry value types and the `GeometryBuilder` triangle accumulator.

use std::ops::{Add, Mul, Neg, Sub};

use geo::Coord;
use serde::{Deserialize, Serialize};

/// 2D point (or displacement) in layout length units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// The origin of the local frame.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` (radians, counter-clockwise from +x).
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: cos, y: sin }
    }

    /// Euclidean length of the vector from the origin.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Self> {
        let length = self.length();
        if length <= f64::EPSILON || !length.is_finite() {
            return None;
        }
        Some(self * (1.0 / length))
    }

    /// Rotates the vector counter-clockwise by `angle` radians about the origin.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x.mul_add(cos, -(self.y * sin)),
            y: self.x.mul_add(sin, self.y * cos),
        }
    }

    /// The vector rotated by +90°.
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    /// Direction angle of the vector in radians.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Component-wise comparison within `epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<Point> for Coord<f64> {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Coord<f64>> for Point {
    fn from(c: Coord<f64>) -> Self {
        Self { x: c.x, y: c.y }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum X coordinate.
    pub min_x: f64,
    /// Minimum Y coordinate.
    pub min_y: f64,
    /// Maximum X coordinate.
    pub max_x: f64,
    /// Maximum Y coordinate.
    pub max_y: f64,
}

impl BoundingBox {
    /// Creates an empty bounding box that will expand with the first `update` call.
    pub const fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Expands the bounding box to include the given point.
    pub fn update(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Returns `true` until the first `update`.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

/// Triangulated output of one flattened layer.
///
/// Positions are interleaved `[x0, y0, x1, y1, ...]` as `f32` for WebGL.
/// Indices reference into the positions array as a triangle list.
#[derive(Debug, Clone)]
pub struct LayerGeometry {
    /// Interleaved vertex positions `[x0, y0, x1, y1, ...]`.
    pub positions: Vec<f32>,
    /// Triangle-list indices into the positions array.
    pub indices: Vec<u32>,
    /// Axis-aligned bounding box of all vertices.
    pub bounds: BoundingBox,
    /// Number of polygons triangulated.
    pub polygon_count: u32,
    /// Number of vertices (`positions.len() / 2`).
    pub vertex_count: u32,
    /// Warning messages generated during triangulation.
    pub warnings: Vec<String>,
    /// Index ranges of clearance triangles as `(start, end)` pairs.
    pub clear_ranges: Vec<(u32, u32)>,
}

/// Summary returned to JavaScript for a built path.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutMeta {
    /// Axis-aligned bounding box of the triangulated geometry.
    pub bounds: BoundingBox,
    /// Number of vertices.
    pub vertex_count: u32,
    /// Number of triangle indices.
    pub index_count: u32,
    /// Number of polygons in the flattened metal and clearance regions.
    pub polygon_count: u32,
    /// Area of the flattened metal region.
    pub metal_area: f64,
    /// Area of the flattened clearance region.
    pub clearance_area: f64,
    /// Sum of nominal straight lengths and turn arc lengths.
    pub nominal_length: f64,
    /// Drawn centerline length after corner rounding.
    pub centerline_length: f64,
    /// Path start point.
    pub start: Point,
    /// Path end point.
    pub end: Point,
    /// Heading at the path end, in radians.
    pub end_angle: f64,
    /// Number of warnings.
    pub warning_count: u32,
    /// Warning messages.
    pub warnings: Vec<String>,
}

/// Converts a count to `u32`, saturating at `u32::MAX`.
pub fn saturate_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Accumulator for building layer geometry incrementally.
///
/// Passed by mutable reference to the triangulation functions.
/// Vertices and indices are collected in flat `Vec`s to minimize allocations.
#[derive(Debug)]
pub struct GeometryBuilder {
    positions: Vec<f32>,
    indices: Vec<u32>,
    bounds: BoundingBox,
    warnings: Vec<String>,
    clear_ranges: Vec<(u32, u32)>,
    polygon_count: u32,
}

impl GeometryBuilder {
    /// Creates an empty builder.
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            indices: Vec::new(),
            bounds: BoundingBox::new(),
            warnings: Vec::new(),
            clear_ranges: Vec::new(),
            polygon_count: 0,
        }
    }

    /// Adds a vertex and returns its index.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn push_vertex(&mut self, x: f64, y: f64) -> u32 {
        let idx = self.positions.len() / 2;
        self.positions.push(x as f32);
        self.positions.push(y as f32);
        self.bounds.update(x, y);
        idx as u32
    }

    /// Adds a triangle from three vertex indices.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.push(a);
        self.indices.push(b);
        self.indices.push(c);
    }

    /// Counts one more triangulated polygon.
    pub fn count_polygon(&mut self) {
        self.polygon_count = self.polygon_count.saturating_add(1);
    }

    /// Records a warning message.
    pub fn warn(&mut self, msg: String) {
        self.warnings.push(msg);
    }

    /// Records an index range of clearance triangles.
    pub fn record_clear_range(&mut self, start: u32, end: u32) {
        if end > start {
            self.clear_ranges.push((start, end));
        }
    }

    /// Returns the current number of triangle indices.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        saturate_u32(self.indices.len())
    }

    /// Returns the current number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        saturate_u32(self.positions.len() / 2)
    }

    /// Consumes the builder and produces a [`LayerGeometry`].
    pub fn build(self) -> LayerGeometry {
        let vertex_count = saturate_u32(self.positions.len() / 2);
        LayerGeometry {
            positions: self.positions,
            indices: self.indices,
            bounds: self.bounds,
            polygon_count: self.polygon_count,
            vertex_count,
            warnings: self.warnings,
            clear_ranges: self.clear_ranges,
        }
    }
}

impl Default for GeometryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
