//! Pure math for dragkit
//!
//! This crate contains the geometry primitives (positions, displacements and
//! velocities) and the density-independent unit types that the gesture
//! recognizers are written against.

mod geometry;
mod unit;
mod velocity;

pub use geometry::*;
pub use unit::*;
pub use velocity::*;

pub mod prelude {
    pub use crate::geometry::{Offset, Point};
    pub use crate::unit::Dp;
    pub use crate::velocity::Velocity;
}
