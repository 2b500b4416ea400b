//! Backward path reconstruction over a computed [`CostMap`].

use gridmove_core::{Dir, Point};

use crate::costmap::CostMap;
use crate::search::SearchError;

/// Neighbor scan order for the backward walk. First-encountered minimum
/// wins, so this order is what makes reconstruction deterministic.
const SCAN: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

impl CostMap {
    /// Reconstruct the path from the start to `destination`.
    ///
    /// The result is one [`Dir`] per move, read start → destination.
    /// An unreachable or out-of-bounds destination, or one equal to the
    /// start, yields an empty path; "no path" is a normal outcome, not an
    /// error.
    ///
    /// Works by walking backward from the destination, at each tile
    /// stepping to the neighbor with the smallest recorded cost, then
    /// reversing the walk. The walk is bounded by the grid area;
    /// exceeding it means the map's costs no longer descend toward the
    /// start and fails with [`SearchError::PathReconstruction`].
    pub fn path_to(&self, destination: Point) -> Result<Vec<Dir>, SearchError> {
        if !self.is_reachable(destination) || destination == self.start {
            return Ok(Vec::new());
        }

        let limit = (self.costs.width() as usize) * (self.costs.height() as usize);
        let mut backward: Vec<Dir> = Vec::new();
        let mut current = destination;

        while current != self.start {
            if backward.len() >= limit {
                return Err(SearchError::PathReconstruction { dest: destination });
            }
            let mut best: Option<(Dir, i32)> = None;
            for d in SCAN {
                let Some(&c) = self.costs.at(current + d) else {
                    continue;
                };
                if best.is_none_or(|(_, bc)| c < bc) {
                    best = Some((d, c));
                }
            }
            // At least one in-bounds neighbor exists on any grid with more
            // than one cell, and a single-cell grid returned above.
            let Some((d, _)) = best else {
                return Err(SearchError::PathReconstruction { dest: destination });
            };
            backward.push(d);
            current = current + d;
        }

        let path: Vec<Dir> = backward.iter().rev().map(|d| d.opposite()).collect();
        log::trace!(
            "path from {} to {destination}: {} steps",
            self.start,
            path.len()
        );
        Ok(path)
    }
}
