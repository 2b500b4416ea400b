//! Movement-range pathfinding on orthogonal grids.
//!
//! This crate computes which tiles a unit can reach on a 2D grid under a
//! movement-point budget, and reconstructs a concrete path to any reachable
//! destination:
//!
//! - **Cost maps** — budgeted uniform-cost propagation ([`CostMap::compute`])
//! - **Path reconstruction** — backward walk over a cost map ([`CostMap::path_to`])
//! - **Stateful driver** — terrain plus current result in one owner ([`GridSearch`])
//!
//! Terrain is a `Grid<i32>` where each cell is the cost to enter that tile.
//! A [`CostMap`] is an independently owned query result, so several results
//! over one terrain can coexist; [`GridSearch`] bundles one terrain with one
//! current result for the common single-owner case.
//!
//! ```
//! use gridmove_core::{Dir, Grid, Point};
//! use gridmove_paths::GridSearch;
//!
//! let mut search = GridSearch::new();
//! search.set_terrain(Grid::new(5, 5, 1))?;
//! search.compute_cost_map(Point::new(2, 2), 2)?;
//! assert_eq!(search.compute_path(Point::new(2, 0))?, vec![Dir::Up, Dir::Up]);
//! # Ok::<(), gridmove_paths::SearchError>(())
//! ```

mod costmap;
mod distance;
mod path;
mod search;

pub use costmap::{CostMap, UNREACHABLE};
pub use distance::{adjacent, manhattan};
pub use search::{GridSearch, SearchError};
