//! **hillwalk-core** — elevation grids and geometry primitives.
//!
//! This crate provides the data types shared by the *hillwalk* crates:
//! integer [`Point`]s and half-open [`Range`]s, the [`Elevation`] value
//! stored per cell, and the rectangular [`HeightMap`] the pathfinders read.

pub mod error;
pub mod geom;
pub mod heightmap;

pub use error::GridError;
pub use geom::{Point, Range};
pub use heightmap::{Elevation, HeightMap};
