//! Leaf elements: a shape built once in its canonical local frame.

use crate::config::GeometryConfig;
use crate::error::LayoutError;
use crate::geometry::{RegionPair, RegionSet, Transform, DEFAULT_REGION};

use super::connection::Connections;

/// Output of [`Shape::build_local_geometry`].
#[derive(Debug, Clone, Default)]
pub struct LocalGeometry {
    /// Attachment points in the local frame.
    pub connections: Connections,
    /// Region pairs by logical region name.
    pub regions: RegionSet,
}

impl LocalGeometry {
    /// Geometry with one pair in the default region.
    pub fn single(connections: Connections, pair: RegionPair) -> Self {
        let mut regions = RegionSet::new();
        regions.insert(DEFAULT_REGION.to_string(), pair);
        Self {
            connections,
            regions,
        }
    }

    /// Adds a pair under `region`, unioning with anything already there.
    #[must_use]
    pub fn with_region(mut self, region: &str, pair: RegionPair) -> Self {
        self.regions
            .entry(region.to_string())
            .or_default()
            .insert(&pair);
        self
    }
}

/// A parametrized shape that can draw itself in its local frame.
///
/// The local frame puts the `start` connection at the origin heading along
/// +x, unless the shape documents otherwise.
pub trait Shape {
    /// Short name of the shape kind, used in diagnostics.
    fn kind(&self) -> &'static str;

    /// Builds connections and regions from the shape's own parameters.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] for out-of-domain values.
    fn build_local_geometry(&self, cfg: &GeometryConfig) -> Result<LocalGeometry, LayoutError>;
}

/// An indivisible element with precomputed local geometry.
#[derive(Debug, Clone)]
pub struct Primitive {
    kind: &'static str,
    geometry: LocalGeometry,
}

impl Primitive {
    /// Builds the local geometry of `shape` once.
    ///
    /// # Errors
    ///
    /// Propagates the shape's construction error.
    pub fn build<S: Shape + ?Sized>(shape: &S, cfg: &GeometryConfig) -> Result<Self, LayoutError> {
        let geometry = shape.build_local_geometry(cfg)?;
        log::debug!(
            "built {} with {} region(s)",
            shape.kind(),
            geometry.regions.len()
        );
        Ok(Self {
            kind: shape.kind(),
            geometry,
        })
    }

    /// Shape kind.
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Local-frame connections.
    pub const fn connections(&self) -> &Connections {
        &self.geometry.connections
    }

    /// Local-frame regions.
    pub const fn regions(&self) -> &RegionSet {
        &self.geometry.regions
    }

    /// Unions `region` of this primitive, mapped by `transform`, into `target`.
    ///
    /// A region the primitive does not draw contributes nothing.
    pub fn place_region(&self, region: &str, target: &mut RegionPair, transform: &Transform) {
        let Some(pair) = self.geometry.regions.get(region) else {
            return;
        };
        target.metal.insert(&pair.metal.transformed(transform));
        target.clearance.insert(&pair.clearance.transformed(transform));
    }
}
