//! Runtime town tunables.
//!
//! Collects the animation rates, metric drift coefficients and board setup
//! into a single [`TownParams`] resource so a host can tune them without
//! recompiling. Defaults come from `config.rs`. The `Town` resource copies
//! the params when it is created.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    CLEAR_FADE_RATE, DAY_RATE, DEFAULT_SEED, MAX_FRAME_DT, MAX_HISTORY, METRIC_SMOOTHING_RATE,
    MIN_COLS, MIN_ROWS, POPULATION_DRIFT, VIBE_DRIFT, VITALITY_SCALE,
};

// ---------------------------------------------------------------------------
// Animation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationParams {
    /// Day clock advance per second. One full day every `1 / day_rate` seconds.
    pub day_rate: f32,
    /// Clear fade alpha change per second, in each direction.
    pub clear_fade_rate: f32,
    /// Exponential approach rate of displayed metrics toward targets.
    pub smoothing_rate: f32,
    /// Upper bound on a single frame delta.
    pub max_frame_dt: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            day_rate: DAY_RATE,
            clear_fade_rate: CLEAR_FADE_RATE,
            smoothing_rate: METRIC_SMOOTHING_RATE,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

// ---------------------------------------------------------------------------
// Vitality drift
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VitalityParams {
    /// Multiplier turning `vibe + activity` targets into vitality.
    pub scale: f32,
    pub population_drift: f32,
    pub vibe_drift: f32,
}

impl Default for VitalityParams {
    fn default() -> Self {
        Self {
            scale: VITALITY_SCALE,
            population_drift: POPULATION_DRIFT,
            vibe_drift: VIBE_DRIFT,
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardParams {
    pub initial_cols: usize,
    pub initial_rows: usize,
    pub history_capacity: usize,
}

impl Default for BoardParams {
    fn default() -> Self {
        Self {
            initial_cols: MIN_COLS,
            initial_rows: MIN_ROWS,
            history_capacity: MAX_HISTORY,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level resource
// ---------------------------------------------------------------------------

#[derive(Resource, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TownParams {
    pub animation: AnimationParams,
    pub vitality: VitalityParams,
    pub board: BoardParams,
    /// Seed for the cell decoration RNG.
    pub seed: u64,
}

impl Default for TownParams {
    fn default() -> Self {
        Self {
            animation: AnimationParams::default(),
            vitality: VitalityParams::default(),
            board: BoardParams::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl TownParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_board_size(mut self, cols: usize, rows: usize) -> Self {
        self.board.initial_cols = cols;
        self.board.initial_rows = rows;
        self
    }
}
