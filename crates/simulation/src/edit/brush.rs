use rand::Rng;

use crate::config::{CELL_SEED_RANGE, MAX_BRUSH, MIN_BRUSH};
use crate::grid::{Cell, TileCoord, TownGrid};
use crate::tiles::TileType;

use super::history::{EditBatch, EditHistory};

/// Result of an edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// `changed` cells were written (or restored, for undo).
    Applied { changed: usize },
    /// Nothing to do: same-type paint, brush fully off the board, or empty history.
    Unchanged,
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied { .. })
    }

    pub fn changed(&self) -> usize {
        match self {
            EditOutcome::Applied { changed } => *changed,
            EditOutcome::Unchanged => 0,
        }
    }
}

/// One brush application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushStroke {
    pub center: TileCoord,
    pub tile: TileType,
    /// Brush radius; the footprint is a square of side `2 * radius - 1`.
    pub radius: u32,
    /// Timestamp stored on every freshly painted cell.
    pub placed_at: f64,
}

impl BrushStroke {
    pub fn new(center: TileCoord, tile: TileType, radius: u32, placed_at: f64) -> Self {
        Self {
            center,
            tile,
            radius: radius.clamp(MIN_BRUSH, MAX_BRUSH),
            placed_at,
        }
    }
}

/// Positions covered by a brush of `radius` centred on `center`, row by row.
/// Positions may fall outside the grid.
pub fn brush_footprint(center: TileCoord, radius: u32) -> impl Iterator<Item = TileCoord> {
    let reach = radius.max(1) as i32 - 1;
    (-reach..=reach).flat_map(move |dy| {
        (-reach..=reach).map(move |dx| TileCoord::new(center.x + dx, center.y + dy))
    })
}

/// Paint `stroke` onto the grid. Cells already holding `stroke.tile` and cells
/// off the board are skipped. A non-empty batch is pushed onto `history`.
pub fn apply_brush<R: Rng>(
    grid: &mut TownGrid,
    history: &mut EditHistory,
    stroke: &BrushStroke,
    rng: &mut R,
) -> EditOutcome {
    let mut batch = EditBatch::new();
    for pos in brush_footprint(stroke.center, stroke.radius) {
        if !grid.in_bounds(pos.x, pos.y) {
            continue;
        }
        let previous = grid.get(pos.x, pos.y).copied();
        if previous.is_some_and(|c| c.tile == stroke.tile) {
            continue;
        }
        batch.record(pos.x, pos.y, previous);
        let seed = rng.gen_range(0.0..CELL_SEED_RANGE);
        grid.set(pos.x, pos.y, Some(Cell::new(stroke.tile, stroke.placed_at, seed)));
    }

    if batch.is_empty() {
        return EditOutcome::Unchanged;
    }
    let changed = batch.len();
    history.push(batch);
    EditOutcome::Applied { changed }
}

/// Revert the most recent stroke.
pub fn undo_last(grid: &mut TownGrid, history: &mut EditHistory) -> EditOutcome {
    let Some(batch) = history.pop() else {
        return EditOutcome::Unchanged;
    };
    // Records never share a position, so restore order does not matter.
    // Positions lost to a shrinking resize are ignored by `set`.
    for change in batch.changes() {
        grid.set(change.x, change.y, change.previous);
    }
    EditOutcome::Applied {
        changed: batch.len(),
    }
}

/// Empty every cell and forget all history.
pub fn hard_clear(grid: &mut TownGrid, history: &mut EditHistory) {
    grid.clear_all();
    history.clear();
}
