//! **gridsearch-core**: geometry shared by the gridsearch crates.
//!
//! Cells are addressed by [`Point`] and grids are bounded by a half-open
//! [`Range`].

pub mod geom;

pub use geom::{Point, Range};
