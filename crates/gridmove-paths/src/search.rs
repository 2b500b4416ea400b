//! The stateful [`GridSearch`] component and its error type.

use std::fmt;

use gridmove_core::{Dir, Grid, Point};

use crate::costmap::CostMap;

/// Errors from movement-range computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `set_terrain` was given an empty grid.
    InvalidTerrain,
    /// A cost map was requested before any terrain was set.
    EmptyTerrain,
    /// The backward walk exceeded the grid area: the cost map's values no
    /// longer descend toward its start.
    PathReconstruction { dest: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTerrain => write!(f, "terrain grid is empty"),
            Self::EmptyTerrain => write!(f, "no terrain has been set"),
            Self::PathReconstruction { dest } => {
                write!(f, "inconsistent cost map: reconstruction toward {dest} exceeded the grid area")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Movement-range search over one terrain grid.
///
/// Owns the terrain and at most one computed [`CostMap`]. Operations are
/// called in sequence: [`set_terrain`](Self::set_terrain), then
/// [`compute_cost_map`](Self::compute_cost_map) per query, then
/// [`compute_path`](Self::compute_path) against the current map.
///
/// A `GridSearch` belongs to a single logical owner; mutators take
/// `&mut self`. Callers that want several concurrent queries over one
/// terrain should use [`CostMap::compute`] directly, which returns an
/// independently owned result.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSearch {
    terrain: Grid<i32>,
    cost_map: Option<CostMap>,
}

impl GridSearch {
    /// A search with no terrain and no cost map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `terrain` as the grid to search over.
    ///
    /// Each cell is the cost to enter that tile. Any previously computed
    /// cost map is discarded, since it may no longer match the new
    /// dimensions. Fails with [`SearchError::InvalidTerrain`] for an
    /// empty grid; ragged grids are unrepresentable, [`Grid`] enforces
    /// rectangularity at construction.
    pub fn set_terrain(&mut self, terrain: Grid<i32>) -> Result<(), SearchError> {
        if terrain.is_empty() {
            return Err(SearchError::InvalidTerrain);
        }
        self.terrain = terrain;
        self.cost_map = None;
        Ok(())
    }

    /// Compute and store the cost map from `start` under `budget`,
    /// replacing any previous one.
    pub fn compute_cost_map(&mut self, start: Point, budget: i32) -> Result<(), SearchError> {
        self.cost_map = Some(CostMap::compute(&self.terrain, start, budget)?);
        Ok(())
    }

    /// Reconstruct the path from the current map's start to `destination`.
    ///
    /// Empty when no cost map has been computed, or when the destination
    /// is unreachable; see [`CostMap::path_to`].
    pub fn compute_path(&self, destination: Point) -> Result<Vec<Dir>, SearchError> {
        match &self.cost_map {
            Some(map) => map.path_to(destination),
            None => Ok(Vec::new()),
        }
    }

    /// The stored terrain grid (empty before `set_terrain`).
    pub fn terrain(&self) -> &Grid<i32> {
        &self.terrain
    }

    /// The current cost map, if one has been computed.
    pub fn cost_map(&self) -> Option<&CostMap> {
        self.cost_map.as_ref()
    }

    /// The start coordinate of the current cost map.
    pub fn start(&self) -> Option<Point> {
        self.cost_map.as_ref().map(CostMap::start)
    }

    /// Adopt `other`'s full state: terrain, cost map, start and budget.
    pub fn copy_from(&mut self, other: &GridSearch) {
        self.terrain = other.terrain.clone();
        self.cost_map = other.cost_map.clone();
    }

    /// Render the terrain as a fixed-width text block.
    pub fn render_terrain(&self) -> String {
        self.terrain.render()
    }

    /// Render the current cost map, if any, with `#` standing in for
    /// unreachable tiles.
    pub fn render_cost_map(&self) -> Option<String> {
        self.cost_map.as_ref().map(CostMap::render)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_search_round_trip() {
        let mut s = GridSearch::new();
        s.set_terrain(Grid::new(4, 3, 1)).unwrap();
        s.compute_cost_map(Point::new(1, 1), 3).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: GridSearch = serde_json::from_str(&json).unwrap();
        assert_eq!(back.terrain(), s.terrain());
        assert_eq!(back.cost_map(), s.cost_map());
    }
}
