//! Shared helpers for the gridmove demo binaries.

use gridmove_core::{Grid, Point};
use rand::{Rng, RngExt};

/// Build a terrain grid of mostly cost-1 tiles with scattered rough
/// patches (cost 2–3) and the occasional near-wall (cost 9).
pub fn random_terrain<R: Rng>(width: i32, height: i32, rng: &mut R) -> Grid<i32> {
    let mut terrain = Grid::new(width, height, 1);
    for y in 0..height {
        for x in 0..width {
            let cost = match rng.random_range(0..10u32) {
                0 | 1 => rng.random_range(2..=3),
                2 => 9,
                _ => 1,
            };
            terrain.set(Point::new(x, y), cost);
        }
    }
    terrain
}
