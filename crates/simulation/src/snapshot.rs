//! Read-only view of the town for renderers and tooling.

use serde::{Deserialize, Serialize};

use crate::metrics::{MetricTargets, MetricsDisplay};
use crate::tiles::TileType;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotCell {
    pub x: i32,
    pub y: i32,
    pub tile: TileType,
    pub placed_at: f64,
    pub seed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TownSnapshot {
    pub cols: usize,
    pub rows: usize,
    /// Populated cells, row-major.
    pub cells: Vec<SnapshotCell>,
    pub metrics: MetricsDisplay,
    pub targets: MetricTargets,
    pub day_time: f64,
    pub day_paused: bool,
    pub day_light: f32,
    pub night_factor: f32,
    pub clear_alpha: f32,
    pub clear_phase: String,
    pub brush: u32,
    pub mode_label: String,
    pub selected_label: String,
    pub history_len: usize,
}

impl TownSnapshot {
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&SnapshotCell> {
        self.cells.iter().find(|c| c.x == x && c.y == y)
    }

    pub fn count_of(&self, tile: TileType) -> usize {
        self.cells.iter().filter(|c| c.tile == tile).count()
    }
}
