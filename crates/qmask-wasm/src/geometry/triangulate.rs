//! Triangulation of flattened regions into WebGL buffers.
//!
//! Each polygon (exterior ring plus holes) is handed to the `earclip`
//! ear-clipping triangulator and appended to a [`GeometryBuilder`].

use geo::{LineString, Polygon};

use crate::error::LayoutError;

use super::layer::RegionPair;
use super::region::Region;
use super::types::{GeometryBuilder, LayerGeometry};

/// Triangulates every polygon of `region` into `builder`.
///
/// # Errors
///
/// Returns [`LayoutError::Triangulation`] if vertex index arithmetic overflows.
/// Polygons that earclip cannot triangulate are skipped with a warning.
pub fn fill_region(builder: &mut GeometryBuilder, region: &Region) -> Result<(), LayoutError> {
    for polygon in region.polygons() {
        fill_polygon(builder, polygon)?;
    }
    Ok(())
}

/// Triangulates metal first, then clearance, recording the clearance index
/// range so a renderer can draw it separately.
///
/// # Errors
///
/// Returns [`LayoutError::Triangulation`] on index overflow.
pub fn triangulate_pair(pair: &RegionPair) -> Result<LayerGeometry, LayoutError> {
    let mut builder = GeometryBuilder::new();
    fill_region(&mut builder, &pair.metal)?;
    let clear_start = builder.index_count();
    fill_region(&mut builder, &pair.clearance)?;
    let clear_end = builder.index_count();
    builder.record_clear_range(clear_start, clear_end);
    Ok(builder.build())
}

fn fill_polygon(builder: &mut GeometryBuilder, polygon: &Polygon<f64>) -> Result<(), LayoutError> {
    let mut flat = Vec::new();
    let mut holes = Vec::with_capacity(polygon.interiors().len());
    push_ring(&mut flat, polygon.exterior());
    for interior in polygon.interiors() {
        holes.push(flat.len() / 2);
        push_ring(&mut flat, interior);
    }

    if flat.len() < 6 {
        builder.warn(format!(
            "polygon has {} vertex(es); need at least 3; skipping",
            flat.len() / 2
        ));
        return Ok(());
    }

    let indices = earclip::earcut::earcut(&flat, &holes, 2);
    if indices.is_empty() {
        builder.warn("earclip produced no triangles for polygon; skipping".to_string());
        return Ok(());
    }

    let base_vertex = emit_vertices(builder, &flat);
    emit_triangles(builder, &indices, base_vertex)?;
    builder.count_polygon();
    Ok(())
}

/// Appends a ring without its closing coordinate.
fn push_ring(flat: &mut Vec<f64>, ring: &LineString<f64>) {
    let coords = &ring.0;
    let open_len = match (coords.first(), coords.last()) {
        (Some(first), Some(last)) if coords.len() > 1 && first == last => coords.len() - 1,
        _ => coords.len(),
    };
    for c in coords.iter().take(open_len) {
        flat.push(c.x);
        flat.push(c.y);
    }
}

/// Push all vertices from the flat coordinate buffer and return the first vertex index.
fn emit_vertices(builder: &mut GeometryBuilder, flat: &[f64]) -> u32 {
    let mut first: Option<u32> = None;
    for pair in flat.chunks_exact(2) {
        if let [x, y] = *pair {
            let idx = builder.push_vertex(x, y);
            if first.is_none() {
                first = Some(idx);
            }
        }
    }
    first.unwrap_or(0)
}

fn emit_triangles(
    builder: &mut GeometryBuilder,
    indices: &[usize],
    base_vertex: u32,
) -> Result<(), LayoutError> {
    for tri in indices.chunks_exact(3) {
        if let [ia, ib, ic] = *tri {
            let a = offset_index(base_vertex, ia)?;
            let b = offset_index(base_vertex, ib)?;
            let c = offset_index(base_vertex, ic)?;
            builder.push_triangle(a, b, c);
        }
    }
    Ok(())
}

fn offset_index(base: u32, offset: usize) -> Result<u32, LayoutError> {
    let offset_u32 =
        u32::try_from(offset).map_err(|_| LayoutError::Triangulation("index overflow".into()))?;
    base.checked_add(offset_u32)
        .ok_or_else(|| LayoutError::Triangulation("vertex index overflow".into()))
}
