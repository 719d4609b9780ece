//! Devices assembled from primitives and paths.

pub mod coil;
pub mod resonator;

pub use coil::*;
pub use resonator::*;
