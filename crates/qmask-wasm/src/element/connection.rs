//! Named attachment points and their tangent headings.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::LayoutError;
use crate::geometry::{Point, Transform};

/// Name of the entry connection.
pub const START: &str = "start";
/// Name of the exit connection.
pub const END: &str = "end";

/// An attachment point with an optional heading in radians.
///
/// Points such as an arc's center carry no heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connection {
    /// Location in the owning frame.
    pub point: Point,
    /// Tangent direction, if the point has one.
    pub angle: Option<f64>,
}

impl Connection {
    /// A connection with a heading.
    pub const fn new(point: Point, angle: f64) -> Self {
        Self {
            point,
            angle: Some(angle),
        }
    }

    /// A connection without a heading.
    pub const fn anchor(point: Point) -> Self {
        Self { point, angle: None }
    }

    /// Heading, defaulting to `0` for anchors.
    pub fn heading(&self) -> f64 {
        self.angle.unwrap_or(0.0)
    }

    /// The same connection in the parent frame of `transform`.
    #[must_use]
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            point: transform.apply_point(self.point),
            angle: self.angle.map(|a| transform.apply_angle(a)),
        }
    }

    /// The frame whose origin is this point and whose x-axis is the heading.
    pub fn frame(&self) -> Transform {
        Transform::at(self.point, self.heading())
    }
}

/// Connections by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Connections {
    entries: IndexMap<String, Connection>,
}

impl Connections {
    /// No connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard `start`/`end` pair.
    pub fn endpoints(start: Connection, end: Connection) -> Self {
        Self::new().with(START, start).with(END, end)
    }

    /// Adds or replaces `name`.
    pub fn insert(&mut self, name: &str, connection: Connection) {
        self.entries.insert(name.to_string(), connection);
    }

    /// Builder-style [`Self::insert`].
    #[must_use]
    pub fn with(mut self, name: &str, connection: Connection) -> Self {
        self.insert(name, connection);
        self
    }

    /// Looks up a connection by name.
    pub fn get(&self, name: &str) -> Option<&Connection> {
        self.entries.get(name)
    }

    /// Looks up a connection by name.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownConnection`] if `name` is not exposed.
    pub fn require(&self, name: &str) -> Result<Connection, LayoutError> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| LayoutError::UnknownConnection(name.to_string()))
    }

    /// The `start` connection.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownConnection`] if there is none.
    pub fn start(&self) -> Result<Connection, LayoutError> {
        self.require(START)
    }

    /// The `end` connection.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownConnection`] if there is none.
    pub fn end(&self) -> Result<Connection, LayoutError> {
        self.require(END)
    }

    /// Looks up a connection by insertion position.
    pub fn by_index(&self, index: usize) -> Option<(&str, &Connection)> {
        self.entries.get_index(index).map(|(k, v)| (k.as_str(), v))
    }

    /// Number of connections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is exposed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates connections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Connection)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All connections mapped into the parent frame of `transform`.
    #[must_use]
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.transformed(transform)))
                .collect(),
        }
    }
}
