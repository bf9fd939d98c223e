//! Screen-space board layout.
//!
//! Maps a viewport size to grid dimensions and a centred pixel offset, and
//! converts pointer positions to tile coordinates.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{BOARD_MARGIN, HALF_TILE, MIN_COLS, MIN_ROWS, TILE_SIZE};
use crate::grid::TileCoord;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub cols: usize,
    pub rows: usize,
    /// Pixel position of the board's top-left corner. Negative when the
    /// viewport is smaller than the minimum board.
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            cols: MIN_COLS,
            rows: MIN_ROWS,
            offset_x: BOARD_MARGIN / 2.0,
            offset_y: BOARD_MARGIN / 2.0,
        }
    }
}

impl BoardLayout {
    pub fn from_viewport(width: f32, height: f32) -> Self {
        let cols = (((width - BOARD_MARGIN) / TILE_SIZE).floor().max(0.0) as usize).max(MIN_COLS);
        let rows = (((height - BOARD_MARGIN) / TILE_SIZE).floor().max(0.0) as usize).max(MIN_ROWS);
        Self {
            cols,
            rows,
            offset_x: ((width - cols as f32 * TILE_SIZE) / 2.0).floor(),
            offset_y: ((height - rows as f32 * TILE_SIZE) / 2.0).floor(),
        }
    }

    /// Tile under a pointer position, or `None` off the board.
    pub fn tile_at(&self, px: f32, py: f32) -> Option<TileCoord> {
        let tx = ((px - self.offset_x) / TILE_SIZE).floor();
        let ty = ((py - self.offset_y) / TILE_SIZE).floor();
        if tx < 0.0 || ty < 0.0 || tx >= self.cols as f32 || ty >= self.rows as f32 {
            return None;
        }
        Some(TileCoord::new(tx as i32, ty as i32))
    }

    /// Pixel centre of a tile.
    pub fn tile_center(&self, tile: TileCoord) -> Vec2 {
        Vec2::new(
            self.offset_x + tile.x as f32 * TILE_SIZE + HALF_TILE,
            self.offset_y + tile.y as f32 * TILE_SIZE + HALF_TILE,
        )
    }
}

/// Tile currently under the pointer, written by the host's cursor tracking.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoveredTile(pub Option<TileCoord>);
