//! Movement-range walkthrough: terrain -> cost map -> path.
//!
//! Run: cargo run --bin movement

use gridmove_core::Point;
use gridmove_demos::random_terrain;
use gridmove_paths::GridSearch;

const WIDTH: i32 = 12;
const HEIGHT: i32 = 8;
const BUDGET: i32 = 6;

fn main() {
    let mut rng = rand::rng();
    let terrain = random_terrain(WIDTH, HEIGHT, &mut rng);
    let start = Point::new(WIDTH / 2, HEIGHT / 2);

    let mut search = GridSearch::new();
    if let Err(e) = search.set_terrain(terrain) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = search.compute_cost_map(start, BUDGET) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("Terrain (cost to enter each tile):");
    println!("{}\n", search.render_terrain());

    println!("Cost map from {start} with budget {BUDGET} (# = unreachable):");
    println!("{}\n", search.render_cost_map().unwrap_or_default());

    // Walk to the farthest reachable tile, ties broken by scan order.
    let map = search.cost_map().expect("cost map was just computed");
    let Some((dest, cost)) = map.reachable().max_by_key(|&(_, c)| c) else {
        println!("Nothing reachable.");
        return;
    };

    match search.compute_path(dest) {
        Ok(path) => {
            println!("Farthest tile {dest} costs {cost}; path {path:?}");
            let mut at = start;
            for d in &path {
                at = at + *d;
            }
            println!("Replaying {} steps from {start} lands on {at}", path.len());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
