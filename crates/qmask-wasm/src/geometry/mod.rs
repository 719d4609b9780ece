//! Geometric value types, regions, and the triangulation pipeline.

pub mod arc;
pub mod layer;
pub mod region;
pub mod transform;
pub mod triangulate;
pub mod types;

pub use arc::*;
pub use layer::*;
pub use region::*;
pub use transform::*;
pub use triangulate::*;
pub use types::*;
