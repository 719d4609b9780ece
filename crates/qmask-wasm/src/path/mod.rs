//! The path builder: shape strings to chained straights and turns.

pub mod builder;
pub mod spec;

pub use builder::*;
pub use spec::*;
