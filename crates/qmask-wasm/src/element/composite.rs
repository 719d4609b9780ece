//! Composite elements: ordered named children placed by relative transforms.

use indexmap::IndexMap;

use crate::error::LayoutError;
use crate::geometry::{Point, RegionPair, Transform};

use super::connection::{Connection, Connections, END, START};
use super::Element;

/// A child element together with its placement in the parent frame.
#[derive(Debug, Clone)]
pub struct Child {
    /// The child element.
    pub element: Element,
    /// Child frame to parent frame.
    pub placement: Transform,
}

impl Child {
    /// A connection of the child, expressed in the parent frame.
    pub fn connection(&self, name: &str) -> Option<Connection> {
        self.element
            .connections()
            .get(name)
            .map(|c| c.transformed(&self.placement))
    }
}

/// A read-only assembly of child elements.
#[derive(Debug, Clone)]
pub struct Composite {
    kind: &'static str,
    children: IndexMap<String, Child>,
    connections: Connections,
    region_names: Vec<String>,
}

impl Composite {
    /// Composite kind.
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Exposed connections in the local frame.
    pub const fn connections(&self) -> &Connections {
        &self.connections
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Child)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up a child by name.
    pub fn child(&self, name: &str) -> Option<&Child> {
        self.children.get(name)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`: a composite has at least one child.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Logical region names drawn anywhere in the subtree.
    pub fn region_names(&self) -> &[String] {
        &self.region_names
    }

    /// Returns `true` when each child's `end` meets the next child's `start`
    /// within `tolerance`. Children without these connections are skipped.
    pub fn is_continuous(&self, tolerance: f64) -> bool {
        let chain = self
            .children
            .values()
            .filter_map(|c| Some((c.connection(START)?, c.connection(END)?)))
            .collect::<Vec<_>>();
        chain.windows(2).all(|pair| match pair {
            [(_, end), (start, _)] => end.point.distance(start.point) <= tolerance,
            _ => true,
        })
    }

    /// Unions `region` of every descendant into `target`.
    pub fn place_region(&self, region: &str, target: &mut RegionPair, transform: &Transform) {
        for child in self.children.values() {
            child
                .element
                .place_region(region, target, &transform.compose(&child.placement));
        }
    }
}

/// Assembles a [`Composite`] child by child.
#[derive(Debug)]
pub struct CompositeBuilder {
    kind: &'static str,
    children: IndexMap<String, Child>,
    exposed: Connections,
    cursor: Connection,
}

impl CompositeBuilder {
    /// Starts an empty assembly with the cursor at the origin heading +x.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            children: IndexMap::new(),
            exposed: Connections::new(),
            cursor: Connection::new(Point::ORIGIN, 0.0),
        }
    }

    /// Adds `element` at an explicit placement.
    ///
    /// The cursor moves to the child's `end`, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] for a duplicate name.
    pub fn add(
        &mut self,
        name: &str,
        element: impl Into<Element>,
        placement: Transform,
    ) -> Result<&mut Self, LayoutError> {
        if self.children.contains_key(name) {
            return Err(LayoutError::InvalidParameters(format!(
                "duplicate child name {name:?} in {}",
                self.kind
            )));
        }
        let child = Child {
            element: element.into(),
            placement,
        };
        if let Some(end) = child.connection(END) {
            self.cursor = end;
        }
        self.children.insert(name.to_string(), child);
        Ok(self)
    }

    /// Adds `element` with its `start` on the cursor, aligned to the cursor
    /// heading.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownConnection`] if the element has no
    /// `start`, or [`LayoutError::InvalidParameters`] for a duplicate name.
    pub fn chain(
        &mut self,
        name: &str,
        element: impl Into<Element>,
    ) -> Result<&mut Self, LayoutError> {
        let element = element.into();
        let start = element.connections().start()?;
        let placement = self.cursor.frame().compose(&start.frame().inverse());
        self.add(name, element, placement)
    }

    /// Current chaining point and heading.
    pub const fn cursor(&self) -> Connection {
        self.cursor
    }

    /// Exposes a named connection on the finished composite.
    ///
    /// `start` and `end` given here override the derived ones.
    pub fn expose(&mut self, name: &str, connection: Connection) -> &mut Self {
        self.exposed.insert(name, connection);
        self
    }

    /// Freezes the assembly.
    ///
    /// `start` is the first child's start and `end` the last child's end
    /// unless exposed explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] when no child was added.
    pub fn finish(self) -> Result<Composite, LayoutError> {
        let (Some((_, first)), Some((_, last))) = (self.children.first(), self.children.last())
        else {
            return Err(LayoutError::InvalidParameters(format!(
                "{} has no children",
                self.kind
            )));
        };

        let mut connections = Connections::new();
        let start = self.exposed.get(START).copied();
        if let Some(start) = start.or_else(|| first.connection(START)) {
            connections.insert(START, start);
        }
        let end = self.exposed.get(END).copied();
        if let Some(end) = end.or_else(|| last.connection(END)) {
            connections.insert(END, end);
        }
        for (name, connection) in self.exposed.iter() {
            connections.insert(name, *connection);
        }

        let mut region_names: Vec<String> = Vec::new();
        for child in self.children.values() {
            for name in child.element.region_names() {
                if !region_names.contains(&name) {
                    region_names.push(name);
                }
            }
        }

        log::debug!(
            "assembled {} from {} child(ren)",
            self.kind,
            self.children.len()
        );
        Ok(Composite {
            kind: self.kind,
            children: self.children,
            connections,
            region_names,
        })
    }
}
