//! Pure metric computation. Free of ECS dependencies.

use crate::grid::TownGrid;
use crate::tiles::TileType;

use super::scoring::POPULATION_ORDER;
use super::types::{MetricTargets, ACTIVITY_TO_POPULATION, VIBE_TO_POPULATION};

/// Vibe and activity contributed by the cell at `(x, y)` if it held `tile`.
pub fn score_cell(grid: &TownGrid, x: i32, y: i32, tile: TileType) -> (f64, f64) {
    let neighbors = grid.neighbor_counts(x, y);
    let profile = tile.scoring();
    (
        profile.vibe.evaluate(&neighbors),
        profile.activity.evaluate(&neighbors),
    )
}

/// Residents implied by the tile tally alone.
pub fn population_base(counts: &[u32; TileType::COUNT]) -> f64 {
    POPULATION_ORDER
        .iter()
        .map(|tile| counts[tile.index()] as f64 * tile.population_weight())
        .sum()
}

/// Full recomputation of the three metric targets.
pub fn recompute_targets(grid: &TownGrid) -> MetricTargets {
    let mut counts = [0u32; TileType::COUNT];
    let mut vibe = 0.0f64;
    let mut activity = 0.0f64;

    for (x, y, cell) in grid.iter_cells() {
        counts[cell.tile.index()] += 1;
        let (v, a) = score_cell(grid, x, y, cell.tile);
        vibe += v;
        activity += a;
    }

    let population =
        population_base(&counts) + activity * ACTIVITY_TO_POPULATION + vibe * VIBE_TO_POPULATION;

    MetricTargets {
        population: population.round() as i64,
        vibe: vibe.round() as i64,
        activity: activity.round() as i64,
    }
}
