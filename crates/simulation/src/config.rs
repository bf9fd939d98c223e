pub const MIN_COLS: usize = 8;
pub const MIN_ROWS: usize = 6;
pub const TILE_SIZE: f32 = 40.0;
pub const HALF_TILE: f32 = TILE_SIZE / 2.0;
/// Total horizontal (and vertical) margin kept free around the board, in pixels.
pub const BOARD_MARGIN: f32 = 80.0;

/// Undo depth. The oldest stroke is dropped once this many are stored.
pub const MAX_HISTORY: usize = 800;

pub const MIN_BRUSH: u32 = 1;
pub const MAX_BRUSH: u32 = 4;

/// Largest frame delta the animation loop integrates in one tick, in seconds.
pub const MAX_FRAME_DT: f32 = 0.05;
pub const DAY_RATE: f32 = 0.03;
pub const CLEAR_FADE_RATE: f32 = 0.9;
pub const METRIC_SMOOTHING_RATE: f32 = 2.2;
pub const VITALITY_SCALE: f32 = 0.01;
pub const POPULATION_DRIFT: f32 = 0.35;
pub const VIBE_DRIFT: f32 = 0.22;

/// Upper bound (exclusive) of the per-cell animation seed.
pub const CELL_SEED_RANGE: f32 = 1000.0;
pub const DEFAULT_SEED: u64 = 42;
