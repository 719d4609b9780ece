#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::indexing_slicing)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! `QMask` WASM module: composable photomask geometry for coplanar-waveguide
//! quantum chip layouts.
//!
//! Elements carry metal and clearance regions in their own local frame and
//! are placed into a target layout through a chain of rigid transforms. The
//! wasm surface builds a routed waveguide from a path description and hands
//! back triangle buffers for rendering.

pub mod config;
pub mod devices;
pub mod element;
pub mod error;
pub mod geometry;
pub mod path;
pub mod primitives;
pub mod selection;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::GeometryConfig;
use crate::element::{flatten_region, Element};
use crate::geometry::{
    saturate_u32, triangulate_pair, LayerGeometry, LayoutMeta, Transform, DEFAULT_REGION,
};
use crate::path::{Path, PathSpec};

thread_local! {
    static LAST_GEOMETRY: RefCell<Option<LayerGeometry>> = const { RefCell::new(None) };
}

fn store_geometry(geom: LayerGeometry) {
    LAST_GEOMETRY.with(|g| {
        *g.borrow_mut() = Some(geom);
    });
}

/// Initialize the WASM module. Sets up the panic hook for debugging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Smoke-test export. Returns 42.
#[allow(clippy::missing_const_for_fn)]
#[wasm_bindgen]
pub fn ping() -> u32 {
    42
}

/// Build a waveguide path from a `PathSpec` object with default tolerances.
///
/// Returns `LayoutMeta` as a `JsValue` via `serde-wasm-bindgen`.
/// Geometry buffers are stored internally; retrieve with
/// [`get_positions`], [`get_indices`] and [`get_clear_ranges`].
///
/// # Errors
///
/// Returns a descriptive error string if the path description cannot be
/// decoded or the path cannot be built.
#[wasm_bindgen]
pub fn build_path(spec: JsValue) -> Result<JsValue, JsValue> {
    build_path_with_config(spec, JsValue::UNDEFINED)
}

/// Build a waveguide path with explicit tolerances.
///
/// `config` may be `undefined`, in which case defaults apply; missing fields
/// also fall back to their defaults.
///
/// # Errors
///
/// Returns a descriptive error string if either argument cannot be decoded
/// or the path cannot be built.
#[wasm_bindgen]
pub fn build_path_with_config(spec: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let spec: PathSpec =
        serde_wasm_bindgen::from_value(spec).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let cfg = if config.is_undefined() || config.is_null() {
        GeometryConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    let meta = build_path_internal(&spec, &cfg).map_err(|e| JsValue::from_str(&e))?;
    serde_wasm_bindgen::to_value(&meta).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Internal build logic shared between the wasm export and native tests.
#[doc(hidden)]
pub fn build_path_internal(spec: &PathSpec, cfg: &GeometryConfig) -> Result<LayoutMeta, String> {
    let path = Path::build(spec, cfg).map_err(|e| e.to_string())?;
    let start = path.start().map_err(|e| e.to_string())?;
    let end = path.end().map_err(|e| e.to_string())?;
    let nominal_length = path.nominal_length();
    let centerline_length = path.centerline_length();

    let element = Element::from(path);
    let pair = flatten_region(&element, DEFAULT_REGION, &Transform::IDENTITY);
    let geom = triangulate_pair(&pair).map_err(|e| e.to_string())?;

    let meta = LayoutMeta {
        bounds: geom.bounds,
        vertex_count: geom.vertex_count,
        index_count: saturate_u32(geom.indices.len()),
        polygon_count: saturate_u32(pair.metal.polygon_count() + pair.clearance.polygon_count()),
        metal_area: pair.metal.area(),
        clearance_area: pair.clearance.area(),
        nominal_length,
        centerline_length,
        start: start.point,
        end: end.point,
        end_angle: end.heading(),
        warning_count: saturate_u32(geom.warnings.len()),
        warnings: geom.warnings.clone(),
    };

    store_geometry(geom);

    Ok(meta)
}

/// Retrieve the position buffer for the last built path.
///
/// Returns a copy of the interleaved `[x0, y0, x1, y1, ...]` positions.
/// Returns an empty array if nothing has been built yet.
#[wasm_bindgen]
pub fn get_positions() -> Vec<f32> {
    LAST_GEOMETRY.with(|g| {
        g.borrow()
            .as_ref()
            .map_or_else(Vec::new, |geom| geom.positions.clone())
    })
}

/// Retrieve the index buffer for the last built path.
///
/// Metal triangles come first, clearance triangles after.
#[wasm_bindgen]
pub fn get_indices() -> Vec<u32> {
    LAST_GEOMETRY.with(|g| {
        g.borrow()
            .as_ref()
            .map_or_else(Vec::new, |geom| geom.indices.clone())
    })
}

/// Retrieve the clearance index ranges for the last built path.
///
/// Returns a flattened `[start0, end0, start1, end1, ...]` array of index
/// ranges that belong to etched-away clearance rather than metal.
#[wasm_bindgen]
pub fn get_clear_ranges() -> Vec<u32> {
    LAST_GEOMETRY.with(|g| {
        g.borrow().as_ref().map_or_else(Vec::new, |geom| {
            let mut flat = Vec::with_capacity(geom.clear_ranges.len() * 2);
            for &(start, end) in &geom.clear_ranges {
                flat.push(start);
                flat.push(end);
            }
            flat
        })
    })
}
