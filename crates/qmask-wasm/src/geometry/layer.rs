//! Metal/clearance region pairs and their named collections.

use indexmap::IndexMap;

use super::region::Region;

/// Region name used by single-region elements.
pub const DEFAULT_REGION: &str = "main";
/// Region rendered by optical lithography on two-layer elements.
pub const PHOTO_REGION: &str = "photo";
/// Region rendered by electron-beam lithography on two-layer elements.
pub const EL_REGION: &str = "el";
/// Region holding air-bridge footprints.
pub const BRIDGE_REGION: &str = "bridges";

/// Conductive material and the ground-plane cut-out around it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionPair {
    /// Conductive (patterned) material.
    pub metal: Region,
    /// Material removed around conductors.
    pub clearance: Region,
}

impl RegionPair {
    /// Creates a pair from its parts.
    pub const fn new(metal: Region, clearance: Region) -> Self {
        Self { metal, clearance }
    }

    /// Unions both regions of `other` into this pair.
    pub fn insert(&mut self, other: &Self) {
        self.metal.insert(&other.metal);
        self.clearance.insert(&other.clearance);
    }

    /// Returns `true` when both regions are empty.
    pub fn is_empty(&self) -> bool {
        self.metal.is_empty() && self.clearance.is_empty()
    }
}

/// Logical region name to region pair, in insertion order.
pub type RegionSet = IndexMap<String, RegionPair>;

/// Logical region name to output layer name.
pub type LayerMap = IndexMap<String, String>;

/// A flattened layout: output layer name to unioned region pair.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    layers: IndexMap<String, RegionPair>,
}

impl Layout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulation target for `layer`, created on first use.
    pub fn layer_mut(&mut self, layer: &str) -> &mut RegionPair {
        self.layers.entry(layer.to_string()).or_default()
    }

    /// Region pair of `layer`, if anything was placed on it.
    pub fn layer(&self, layer: &str) -> Option<&RegionPair> {
        self.layers.get(layer)
    }

    /// Iterates layers in first-use order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionPair)> {
        self.layers.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` when no layer exists.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Maps every region name to the layer of the same name.
pub fn identity_layer_map<'a, I>(regions: I) -> LayerMap
where
    I: IntoIterator<Item = &'a str>,
{
    regions
        .into_iter()
        .map(|name| (name.to_string(), name.to_string()))
        .collect()
}
