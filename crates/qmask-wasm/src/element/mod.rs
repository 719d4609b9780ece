//! The element tree: primitives, composites, and their placement.
//!
//! Every element is built once in its local frame. Placing it maps the
//! local regions through a [`Transform`] and unions them into a caller's
//! [`RegionPair`]; the element itself never changes.

pub mod composite;
pub mod connection;
pub mod flatten;
pub mod primitive;

pub use composite::*;
pub use connection::*;
pub use flatten::*;
pub use primitive::*;

use crate::error::LayoutError;
use crate::geometry::{LayerMap, Layout, RegionPair, Transform, DEFAULT_REGION};

/// A node of the element tree.
#[derive(Debug, Clone)]
pub enum Element {
    /// A leaf shape.
    Primitive(Primitive),
    /// An assembly of children.
    Composite(Composite),
}

impl Element {
    /// Kind name of the node.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Primitive(p) => p.kind(),
            Self::Composite(c) => c.kind(),
        }
    }

    /// Local-frame connections.
    pub const fn connections(&self) -> &Connections {
        match self {
            Self::Primitive(p) => p.connections(),
            Self::Composite(c) => c.connections(),
        }
    }

    /// Looks up one connection.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownConnection`] if `name` is not exposed.
    pub fn connection(&self, name: &str) -> Result<Connection, LayoutError> {
        self.connections().require(name)
    }

    /// Logical region names drawn by this subtree.
    pub fn region_names(&self) -> Vec<String> {
        match self {
            Self::Primitive(p) => p.regions().keys().cloned().collect(),
            Self::Composite(c) => c.region_names().to_vec(),
        }
    }

    /// Returns `true` if the subtree draws `region`.
    pub fn has_region(&self, region: &str) -> bool {
        match self {
            Self::Primitive(p) => p.regions().contains_key(region),
            Self::Composite(c) => c.region_names().iter().any(|n| n == region),
        }
    }

    /// Places the default region into `target`.
    pub fn place(&self, target: &mut RegionPair, transform: &Transform) {
        self.place_region(DEFAULT_REGION, target, transform);
    }

    /// Places one logical region into `target`.
    ///
    /// Descendants that do not draw `region` contribute nothing.
    pub fn place_region(&self, region: &str, target: &mut RegionPair, transform: &Transform) {
        match self {
            Self::Primitive(p) => p.place_region(region, target, transform),
            Self::Composite(c) => c.place_region(region, target, transform),
        }
    }

    /// Places every region named in `layer_map` onto its mapped layer.
    ///
    /// Regions of the subtree missing from the map are not placed, so a
    /// two-region element can go to two layouts in two calls.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownRegion`] if the map names a region the
    /// subtree does not draw.
    pub fn place_layers(
        &self,
        layout: &mut Layout,
        layer_map: &LayerMap,
        transform: &Transform,
    ) -> Result<(), LayoutError> {
        if let Some(missing) = layer_map.keys().find(|r| !self.has_region(r)) {
            return Err(LayoutError::UnknownRegion(missing.clone()));
        }
        for (region, layer) in layer_map {
            self.place_region(region, layout.layer_mut(layer), transform);
        }
        Ok(())
    }

    /// One region of the subtree flattened in the element's own frame.
    pub fn local_regions(&self, region: &str) -> RegionPair {
        let mut out = RegionPair::default();
        self.place_region(region, &mut out, &Transform::IDENTITY);
        out
    }
}

impl From<Primitive> for Element {
    fn from(p: Primitive) -> Self {
        Self::Primitive(p)
    }
}

impl From<Composite> for Element {
    fn from(c: Composite) -> Self {
        Self::Composite(c)
    }
}
