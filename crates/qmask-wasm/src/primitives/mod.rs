//! Concrete shapes: waveguide pieces, capacitors, pads, and outlines.

pub mod arc;
pub mod bridges;
pub mod capacitor;
pub mod circle;
pub mod cross_section;
pub mod pad;
pub mod polygon;
pub mod straight;
pub mod taper;

pub use arc::*;
pub use bridges::*;
pub use capacitor::*;
pub use circle::*;
pub use cross_section::*;
pub use pad::*;
pub use polygon::*;
pub use straight::*;
pub use taper::*;
