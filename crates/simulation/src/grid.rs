use serde::{Deserialize, Serialize};

use crate::config::{MIN_COLS, MIN_ROWS};
use crate::tiles::TileType;

/// Offsets of the eight cells surrounding a position, row by row.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub tile: TileType,
    /// Town time (seconds) at which the cell was painted. Drives pop-in animation.
    pub placed_at: f64,
    /// Per-cell decoration seed in `[0, 1000)`.
    pub seed: f32,
}

impl Cell {
    pub fn new(tile: TileType, placed_at: f64, seed: f32) -> Self {
        Self {
            tile,
            placed_at,
            seed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Four-way road adjacency of a road cell, used for lane markings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadLinks {
    pub north: bool,
    pub south: bool,
    pub west: bool,
    pub east: bool,
}

impl RoadLinks {
    pub fn count(&self) -> u32 {
        [self.north, self.south, self.west, self.east]
            .iter()
            .filter(|linked| **linked)
            .count() as u32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TownGrid {
    cells: Vec<Option<Cell>>,
    cols: usize,
    rows: usize,
}

impl TownGrid {
    /// Creates an empty grid. Dimensions below the minimum are raised to it.
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(MIN_COLS);
        let rows = rows.max(MIN_ROWS);
        Self {
            cells: vec![None; cols * rows],
            cols,
            rows,
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.cols + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).and_then(|i| self.cells[i].as_ref())
    }

    #[inline]
    pub fn tile_at(&self, x: i32, y: i32) -> Option<TileType> {
        self.get(x, y).map(|cell| cell.tile)
    }

    /// Writes a cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Option<Cell>) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Rebuilds the buffer at the new size, keeping the overlapping rectangle.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        let cols = cols.max(MIN_COLS);
        let rows = rows.max(MIN_ROWS);
        if cols == self.cols && rows == self.rows {
            return;
        }
        let mut cells = vec![None; cols * rows];
        let keep_cols = cols.min(self.cols);
        let keep_rows = rows.min(self.rows);
        for y in 0..keep_rows {
            let src = y * self.cols;
            let dst = y * cols;
            cells[dst..dst + keep_cols].copy_from_slice(&self.cells[src..src + keep_cols]);
        }
        self.cells = cells;
        self.cols = cols;
        self.rows = rows;
    }

    pub fn clear_all(&mut self) {
        self.cells.fill(None);
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Populated cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, &Cell)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|c| ((i % cols) as i32, (i / cols) as i32, c))
        })
    }

    // =========================================================================
    // Neighbor queries
    // =========================================================================

    /// Number of the eight surrounding cells holding exactly `tile`.
    pub fn count_neighbors_of_type(&self, x: i32, y: i32, tile: TileType) -> u32 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dx, dy)| self.tile_at(x + dx, y + dy) == Some(tile))
            .count() as u32
    }

    /// Tally of every tile type among the eight surrounding cells.
    pub fn neighbor_counts(&self, x: i32, y: i32) -> [u32; TileType::COUNT] {
        let mut counts = [0; TileType::COUNT];
        for (dx, dy) in NEIGHBOR_OFFSETS {
            if let Some(tile) = self.tile_at(x + dx, y + dy) {
                counts[tile.index()] += 1;
            }
        }
        counts
    }

    #[inline]
    pub fn is_road(&self, x: i32, y: i32) -> bool {
        self.tile_at(x, y).is_some_and(TileType::is_road)
    }

    pub fn road_connections(&self, x: i32, y: i32) -> RoadLinks {
        RoadLinks {
            north: self.is_road(x, y - 1),
            south: self.is_road(x, y + 1),
            west: self.is_road(x - 1, y),
            east: self.is_road(x + 1, y),
        }
    }
}
