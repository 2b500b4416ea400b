//! Budgeted uniform-cost propagation producing a [`CostMap`].

use std::collections::VecDeque;

use gridmove_core::{Dir, Grid, Point};

use crate::search::SearchError;

/// Sentinel value meaning "unreachable" in cost maps.
///
/// Also serves as the uninitialized marker during propagation. It exceeds
/// any attainable real cost: accumulation saturates, so no sum of terrain
/// costs can wrap past it.
pub const UNREACHABLE: i32 = i32::MAX;

/// The result of one movement-range query: per-tile minimum costs from a
/// fixed start under a budget.
///
/// A `CostMap` is an independently owned value. It remembers the start
/// coordinate and budget that produced it, since its contents are only
/// meaningful relative to those; independent callers can hold independent
/// `CostMap`s computed over the same terrain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMap {
    pub(crate) costs: Grid<i32>,
    pub(crate) start: Point,
    pub(crate) budget: i32,
}

impl CostMap {
    /// Compute the minimum cost to reach every tile from `start`, keeping
    /// only tiles whose total cost stays within `budget`.
    ///
    /// Each terrain cell is the cost to *enter* that tile. Costs must be
    /// positive; zero or negative costs are not validated and give
    /// unspecified (but terminating) results. `budget` must be below
    /// [`UNREACHABLE`].
    ///
    /// Propagation is FIFO with re-relaxation: a tile is re-enqueued every
    /// time a strictly cheaper route to it is found, which is what makes
    /// the costs correct under non-uniform weights. A tile whose cost
    /// equals `budget` exactly is recorded but never expanded, since it
    /// has no movement left to propagate.
    ///
    /// Fails with [`SearchError::EmptyTerrain`] when the terrain grid is
    /// zero-sized. A start outside the terrain's bounds yields a map with
    /// every tile [`UNREACHABLE`].
    pub fn compute(terrain: &Grid<i32>, start: Point, budget: i32) -> Result<Self, SearchError> {
        if terrain.is_empty() {
            return Err(SearchError::EmptyTerrain);
        }

        let mut costs = Grid::new(terrain.width(), terrain.height(), UNREACHABLE);
        let mut queue: VecDeque<Point> = VecDeque::new();
        if costs.set(start, 0) {
            queue.push_back(start);
        }

        while let Some(current) = queue.pop_front() {
            let Some(&c) = costs.at(current) else {
                continue;
            };
            for d in Dir::CARDINALS {
                let nb = current + d;
                let Some(&step) = terrain.at(nb) else {
                    continue;
                };
                let candidate = c.saturating_add(step);
                if candidate > budget {
                    continue;
                }
                if let Some(prev) = costs.at_mut(nb) {
                    if candidate < *prev {
                        *prev = candidate;
                        // Exactly at budget: recorded, but nothing left to
                        // propagate.
                        if candidate < budget {
                            queue.push_back(nb);
                        }
                    }
                }
            }
        }

        let map = Self {
            costs,
            start,
            budget,
        };
        log::debug!(
            "cost map from {start}: {} of {} tiles reachable within budget {budget}",
            map.reachable().count(),
            terrain.width() * terrain.height(),
        );
        Ok(map)
    }

    /// The cost recorded at `p`.
    ///
    /// Returns [`UNREACHABLE`] when `p` is outside the map or was not
    /// reached within the budget.
    #[inline]
    pub fn cost_at(&self, p: Point) -> i32 {
        match self.costs.at(p) {
            Some(&c) => c,
            None => UNREACHABLE,
        }
    }

    /// Whether `p` was reached within the budget.
    #[inline]
    pub fn is_reachable(&self, p: Point) -> bool {
        self.cost_at(p) != UNREACHABLE
    }

    /// All reached tiles with their costs, in row-major order.
    pub fn reachable(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.costs
            .iter()
            .filter(|&(_, &c)| c != UNREACHABLE)
            .map(|(p, &c)| (p, c))
    }

    /// The start coordinate this map was computed from.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The budget this map was computed under.
    #[inline]
    pub fn budget(&self) -> i32 {
        self.budget
    }

    /// Size of the map as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.costs.size()
    }

    /// Render the map as a fixed-width text block, with `#` standing in
    /// for unreachable tiles.
    pub fn render(&self) -> String {
        self.costs.render_with(|_, &c| {
            if c == UNREACHABLE {
                "#".to_string()
            } else {
                c.to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn ones(width: i32, height: i32) -> Grid<i32> {
        Grid::new(width, height, 1)
    }

    /// Budget-constrained minimum costs by relaxation to a fixpoint.
    /// Slow but obviously correct; the reference for the fast path.
    fn reference_costs(terrain: &Grid<i32>, start: Point, budget: i32) -> Grid<i32> {
        let mut dist = Grid::new(terrain.width(), terrain.height(), UNREACHABLE);
        dist.set(start, 0);
        let mut changed = true;
        while changed {
            changed = false;
            for y in 0..terrain.height() {
                for x in 0..terrain.width() {
                    let p = Point::new(x, y);
                    let c = *dist.at(p).unwrap();
                    if c == UNREACHABLE {
                        continue;
                    }
                    for d in Dir::CARDINALS {
                        let nb = p + d;
                        let Some(&w) = terrain.at(nb) else {
                            continue;
                        };
                        let candidate = c + w;
                        if candidate <= budget && candidate < *dist.at(nb).unwrap() {
                            dist.set(nb, candidate);
                            changed = true;
                        }
                    }
                }
            }
        }
        dist
    }

    // -- failure and degenerate cases ------------------------------------

    #[test]
    fn empty_terrain_errors() {
        let err = CostMap::compute(&Grid::default(), Point::ZERO, 5).unwrap_err();
        assert_eq!(err, SearchError::EmptyTerrain);
    }

    #[test]
    fn start_out_of_bounds_yields_all_unreachable() {
        let map = CostMap::compute(&ones(3, 3), Point::new(-1, 7), 5).unwrap();
        assert_eq!(map.reachable().count(), 0);
        assert!(!map.is_reachable(Point::ZERO));
    }

    #[test]
    fn cost_at_out_of_bounds_is_unreachable() {
        let map = CostMap::compute(&ones(3, 3), Point::ZERO, 5).unwrap();
        assert_eq!(map.cost_at(Point::new(3, 0)), UNREACHABLE);
        assert_eq!(map.cost_at(Point::new(0, -1)), UNREACHABLE);
    }

    // -- worked examples -------------------------------------------------

    #[test]
    fn start_cost_is_zero() {
        let start = Point::new(2, 1);
        let map = CostMap::compute(&ones(4, 3), start, 6).unwrap();
        assert_eq!(map.cost_at(start), 0);
        assert_eq!(map.start(), start);
        assert_eq!(map.budget(), 6);
    }

    #[test]
    fn uniform_terrain_gives_manhattan_disc() {
        // 5x5 all-ones, start (2,2), budget 2: exactly the 13 tiles within
        // Manhattan distance 2, each at cost equal to that distance.
        let start = Point::new(2, 2);
        let map = CostMap::compute(&ones(5, 5), start, 2).unwrap();
        assert_eq!(map.reachable().count(), 13);
        for (p, c) in map.reachable() {
            assert_eq!(c, manhattan(start, p), "{p}");
        }
        assert!(!map.is_reachable(Point::new(0, 0)));
        assert!(!map.is_reachable(Point::new(4, 4)));
    }

    #[test]
    fn expensive_adjacent_cell_stays_unreachable() {
        // A cell costing 5 right next to the start stays unreachable under
        // budget 3 even though it is geometrically adjacent.
        let mut terrain = ones(3, 1);
        terrain.set(Point::new(1, 0), 5);
        let map = CostMap::compute(&terrain, Point::ZERO, 3).unwrap();
        assert!(!map.is_reachable(Point::new(1, 0)));
        assert!(!map.is_reachable(Point::new(2, 0)));
        assert_eq!(map.reachable().count(), 1);
    }

    #[test]
    fn exact_budget_tile_is_recorded_but_not_expanded() {
        let mut terrain = ones(3, 1);
        terrain.set(Point::new(1, 0), 3);
        let map = CostMap::compute(&terrain, Point::ZERO, 3).unwrap();
        assert_eq!(map.cost_at(Point::new(1, 0)), 3);
        assert!(!map.is_reachable(Point::new(2, 0)));
    }

    #[test]
    fn zero_budget_reaches_only_start() {
        let map = CostMap::compute(&ones(3, 3), Point::new(1, 1), 0).unwrap();
        let tiles: Vec<_> = map.reachable().collect();
        assert_eq!(tiles, vec![(Point::new(1, 1), 0)]);
    }

    // -- re-relaxation ---------------------------------------------------

    #[test]
    fn cheaper_later_route_overwrites_earlier_one() {
        // The tile right of the expensive one is first reached through it
        // (cost 10), then improved through the bottom row (cost 4). A
        // visited-once search would keep 10.
        let terrain = Grid::from_rows(vec![vec![1, 9, 1], vec![1, 1, 1]]).unwrap();
        let map = CostMap::compute(&terrain, Point::ZERO, 20).unwrap();
        assert_eq!(map.cost_at(Point::new(2, 0)), 4);
        assert_eq!(map.cost_at(Point::new(1, 0)), 9);
        assert_eq!(
            map.costs,
            reference_costs(&terrain, Point::ZERO, 20),
        );
    }

    #[test]
    fn randomized_maps_match_reference() {
        let mut rng = StdRng::seed_from_u64(0x6d6f7665);
        for _ in 0..25 {
            let w = rng.random_range(1..=7);
            let h = rng.random_range(1..=7);
            let mut terrain = Grid::new(w, h, 1);
            for y in 0..h {
                for x in 0..w {
                    terrain.set(Point::new(x, y), rng.random_range(1..=4));
                }
            }
            let start = Point::new(rng.random_range(0..w), rng.random_range(0..h));
            let budget = rng.random_range(0..=14);
            let map = CostMap::compute(&terrain, start, budget).unwrap();
            assert_eq!(map.costs, reference_costs(&terrain, start, budget));
            for (_, c) in map.reachable() {
                assert!(c <= budget);
            }
        }
    }

    // -- rendering -------------------------------------------------------

    #[test]
    fn render_substitutes_placeholder() {
        let map = CostMap::compute(&ones(3, 3), Point::new(1, 1), 1).unwrap();
        assert_eq!(map.render(), "# 1 #\n1 0 1\n# 1 #");
    }

    #[test]
    fn render_aligns_to_widest_cost() {
        let mut terrain = ones(3, 1);
        terrain.set(Point::new(2, 0), 10);
        let map = CostMap::compute(&terrain, Point::ZERO, 11).unwrap();
        assert_eq!(map.render(), " 0  1 11");
    }
}
