//! **orienteer-core**: core types shared by the *orienteer* crates.
//!
//! This crate provides the foundational types used across the workspace:
//! geometry primitives, a dense row-major grid, and packed RGB colours used
//! as terrain classification keys.

pub mod color;
pub mod geom;
pub mod grid;

pub use color::Color;
pub use geom::{Point, Range};
pub use grid::{Grid, GridError};
