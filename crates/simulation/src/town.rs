//! The town controller.
//!
//! [`Town`] owns every piece of mutable sandbox state: grid, edit history,
//! metrics, day clock, clear transition, tool state and RNG. All mutation
//! goes through its methods, which keep the metric targets in sync with the
//! grid and queue the matching sound cues. `tick` is the per-frame entry
//! point; Bevy systems are thin wrappers around these methods.

use bevy::prelude::*;

use crate::clear_transition::{ClearStep, ClearTransition};
use crate::edit::{self, BrushStroke, EditHistory, EditOutcome};
use crate::grid::{TileCoord, TownGrid};
use crate::metrics::{recompute_targets, MetricTargets, TownMetrics};
use crate::params::TownParams;
use crate::sfx::SfxEvent;
use crate::sim_rng::SimRng;
use crate::snapshot::{SnapshotCell, TownSnapshot};
use crate::tiles::TileType;
use crate::time_of_day::DayClock;
use crate::tool_state::ToolState;

#[derive(Resource, Debug, Clone)]
pub struct Town {
    grid: TownGrid,
    history: EditHistory,
    metrics: TownMetrics,
    clock: DayClock,
    clear: ClearTransition,
    tools: ToolState,
    params: TownParams,
    rng: SimRng,
    /// Seconds integrated since creation; stamped onto painted cells.
    elapsed: f64,
    pending_sfx: Vec<SfxEvent>,
}

/// Built from the `TownParams` resource when present, so hosts can insert
/// params before the plugin.
impl FromWorld for Town {
    fn from_world(world: &mut World) -> Self {
        let params = world
            .get_resource::<TownParams>()
            .cloned()
            .unwrap_or_default();
        Self::new(params)
    }
}

impl Town {
    pub fn new(params: TownParams) -> Self {
        Self {
            grid: TownGrid::new(params.board.initial_cols, params.board.initial_rows),
            history: EditHistory::with_capacity(params.board.history_capacity),
            metrics: TownMetrics::default(),
            clock: DayClock::default(),
            clear: ClearTransition::default(),
            tools: ToolState::default(),
            rng: SimRng::from_seed_u64(params.seed),
            params,
            elapsed: 0.0,
            pending_sfx: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn grid(&self) -> &TownGrid {
        &self.grid
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn metrics(&self) -> &TownMetrics {
        &self.metrics
    }

    pub fn targets(&self) -> MetricTargets {
        self.metrics.targets
    }

    pub fn clock(&self) -> &DayClock {
        &self.clock
    }

    pub fn clear_transition(&self) -> &ClearTransition {
        &self.clear
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn params(&self) -> &TownParams {
        &self.params
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Sound cues queued since the last drain.
    pub fn pending_sfx(&self) -> &[SfxEvent] {
        &self.pending_sfx
    }

    pub fn drain_sfx(&mut self) -> Vec<SfxEvent> {
        std::mem::take(&mut self.pending_sfx)
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Paint at `center` with the current tool and brush size.
    pub fn paint(&mut self, center: TileCoord) -> EditOutcome {
        let tile = self.tools.chosen_tile();
        let radius = self.tools.brush;
        self.apply_brush(center, tile, radius)
    }

    pub fn apply_brush(&mut self, center: TileCoord, tile: TileType, radius: u32) -> EditOutcome {
        let stroke = BrushStroke::new(center, tile, radius, self.elapsed);
        let outcome = edit::apply_brush(
            &mut self.grid,
            &mut self.history,
            &stroke,
            &mut self.rng.0,
        );
        if let EditOutcome::Applied { changed } = outcome {
            debug!(
                "painted {} cell(s) of {} at ({}, {})",
                changed,
                tile.key(),
                center.x,
                center.y
            );
            self.recompute();
            self.pending_sfx.push(if tile.is_road() {
                SfxEvent::Road
            } else {
                SfxEvent::Placed(tile)
            });
        }
        outcome
    }

    pub fn undo_last(&mut self) -> EditOutcome {
        let outcome = edit::undo_last(&mut self.grid, &mut self.history);
        if let EditOutcome::Applied { changed } = outcome {
            debug!("undid stroke of {} cell(s)", changed);
            self.recompute();
            self.pending_sfx.push(SfxEvent::Undo);
        }
        outcome
    }

    /// Wipe the board and the history immediately. Silent.
    pub fn hard_clear(&mut self) {
        edit::hard_clear(&mut self.grid, &mut self.history);
        self.recompute();
        info!("board cleared");
    }

    /// Start the fade-out/wipe/fade-in transition. Returns `false` if a clear
    /// is already in progress, in which case nothing happens.
    pub fn clear_with_fade(&mut self) -> bool {
        if !self.clear.start() {
            debug!("clear already in progress");
            return false;
        }
        info!("clearing board with fade");
        self.pending_sfx.push(SfxEvent::Clear);
        true
    }

    /// Resize the board, keeping the overlapping cells. Returns `true` if the
    /// dimensions changed.
    pub fn resize(&mut self, cols: usize, rows: usize) -> bool {
        let before = (self.grid.cols(), self.grid.rows());
        self.grid.resize(cols, rows);
        let after = (self.grid.cols(), self.grid.rows());
        if before == after {
            return false;
        }
        info!(
            "board resized from {}x{} to {}x{}",
            before.0, before.1, after.0, after.1
        );
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.metrics.targets = recompute_targets(&self.grid);
    }

    // =========================================================================
    // Tools
    // =========================================================================

    pub fn select_tile(&mut self, tile: TileType) {
        let cue = self.tools.select(tile);
        self.pending_sfx.push(cue);
    }

    pub fn toggle_road_mode(&mut self) -> bool {
        let cue = self.tools.toggle_road_mode();
        self.pending_sfx.push(cue);
        self.tools.road_mode
    }

    pub fn adjust_brush(&mut self, delta: i32) -> u32 {
        self.tools.adjust_brush(delta)
    }

    /// Pause or resume the day clock. Returns the new paused state.
    pub fn toggle_day_pause(&mut self) -> bool {
        let paused = self.clock.toggle_pause();
        self.pending_sfx.push(SfxEvent::Select(TileType::Observatory));
        paused
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Per-frame entry point. Clamps `dt` to `[0, max_frame_dt]`.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.params.animation.max_frame_dt)
        } else {
            0.0
        };
        self.advance(dt);
    }

    /// One unclamped integration step of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let anim = &self.params.animation;
        let (day_rate, fade_rate, smoothing_rate) =
            (anim.day_rate, anim.clear_fade_rate, anim.smoothing_rate);

        self.elapsed += f64::from(dt);
        self.clock.advance(dt, day_rate);

        match self.clear.advance(dt, fade_rate) {
            ClearStep::Wipe => self.hard_clear(),
            ClearStep::Finished => debug!("clear transition finished"),
            ClearStep::Continue => {}
        }

        self.metrics.relax(dt, smoothing_rate, &self.params.vitality);
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn snapshot(&self) -> TownSnapshot {
        TownSnapshot {
            cols: self.grid.cols(),
            rows: self.grid.rows(),
            cells: self
                .grid
                .iter_cells()
                .map(|(x, y, cell)| SnapshotCell {
                    x,
                    y,
                    tile: cell.tile,
                    placed_at: cell.placed_at,
                    seed: cell.seed,
                })
                .collect(),
            metrics: self.metrics.display(),
            targets: self.metrics.targets,
            day_time: self.clock.time,
            day_paused: self.clock.paused,
            day_light: self.clock.day_light(),
            night_factor: self.clock.night_factor(),
            clear_alpha: self.clear.alpha(),
            clear_phase: self.clear.phase_label().to_string(),
            brush: self.tools.brush,
            mode_label: self.tools.mode_label().to_string(),
            selected_label: self.tools.selected_label(),
            history_len: self.history.len(),
        }
    }
}
