//! Flattening an element tree into per-layer regions.

use crate::error::LayoutError;
use crate::geometry::{identity_layer_map, LayerMap, Layout, RegionPair, Transform};

use super::Element;

/// Flattens `element` at the identity transform onto the layers of
/// `layer_map`.
///
/// # Errors
///
/// Returns [`LayoutError::UnknownRegion`] if the map names a region the tree
/// does not draw.
pub fn flatten(element: &Element, layer_map: &LayerMap) -> Result<Layout, LayoutError> {
    let mut layout = Layout::new();
    element.place_layers(&mut layout, layer_map, &Transform::IDENTITY)?;
    Ok(layout)
}

/// Flattens one logical region of `element` under `transform`.
pub fn flatten_region(element: &Element, region: &str, transform: &Transform) -> RegionPair {
    let mut out = RegionPair::default();
    element.place_region(region, &mut out, transform);
    out
}

/// Maps each region the tree draws to a layer of the same name.
pub fn default_layer_map(element: &Element) -> LayerMap {
    let names = element.region_names();
    identity_layer_map(names.iter().map(String::as_str))
}
