use serde::{Deserialize, Serialize};

use crate::tiles::TileType;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum TownAction {
    /// Paint at a tile with the current tool and brush.
    Paint {
        x: i32,
        y: i32,
    },
    /// Paint with an explicit tile and radius, bypassing the tool state.
    PaintWith {
        x: i32,
        y: i32,
        tile: TileType,
        radius: u32,
    },
    Undo,
    ClearWithFade,
    HardClear,
    SelectTile {
        tile: TileType,
    },
    ToggleRoadMode,
    AdjustBrush {
        delta: i32,
    },
    ToggleDayPause,
    Resize {
        cols: usize,
        rows: usize,
    },
    /// Recompute the board layout for a viewport and resize the grid to match.
    FitViewport {
        width: f32,
        height: f32,
    },
}
