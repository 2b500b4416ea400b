//! **gridmove-core** — geometry and grid container for movement-range search.
//!
//! Foundational types used across the gridmove crates: an integer [`Point`]
//! in screen coordinates, the four orthogonal [`Dir`] unit moves, and the
//! owned rectangular [`Grid`] container with bounds-checked access and
//! fixed-width text rendering.

pub mod geom;
pub mod grid;

pub use geom::{Dir, Point};
pub use grid::{Grid, GridError};
