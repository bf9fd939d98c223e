//! Painting tool state: selected tile, road mode and brush size.

use serde::{Deserialize, Serialize};

use crate::config::{MAX_BRUSH, MIN_BRUSH};
use crate::sfx::SfxEvent;
use crate::tiles::TileType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolState {
    pub selected: TileType,
    pub road_mode: bool,
    pub brush: u32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            selected: TileType::House,
            road_mode: false,
            brush: MIN_BRUSH,
        }
    }
}

impl ToolState {
    /// Tile a click paints with.
    pub fn chosen_tile(&self) -> TileType {
        if self.road_mode {
            TileType::Road
        } else {
            self.selected
        }
    }

    /// Select a building; leaves road mode.
    pub fn select(&mut self, tile: TileType) -> SfxEvent {
        self.selected = tile;
        self.road_mode = false;
        SfxEvent::Select(tile)
    }

    pub fn toggle_road_mode(&mut self) -> SfxEvent {
        self.road_mode = !self.road_mode;
        if self.road_mode {
            SfxEvent::Road
        } else {
            SfxEvent::Select(self.selected)
        }
    }

    /// Grow or shrink the brush, staying within `[MIN_BRUSH, MAX_BRUSH]`.
    /// Returns the new size.
    pub fn adjust_brush(&mut self, delta: i32) -> u32 {
        let next = (self.brush as i64 + delta as i64).clamp(MIN_BRUSH as i64, MAX_BRUSH as i64);
        self.brush = next as u32;
        self.brush
    }

    pub fn mode_label(&self) -> &'static str {
        if self.road_mode {
            "street"
        } else {
            "build"
        }
    }

    pub fn selected_label(&self) -> String {
        if self.road_mode {
            format!("{} (M)", TileType::Road.label())
        } else {
            self.selected.label().to_string()
        }
    }
}
