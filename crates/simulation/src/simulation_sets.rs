//! Per-frame ordering of town systems via `SystemSet` phases.
//!
//! ```text
//! Input  →  Edit  →  Animate  →  Output
//! ```
//!
//! * **Input** – Key, wheel and pointer handling. Only pushes actions.
//! * **Edit** – Drains the action queue and mutates the town. Metric targets
//!   are recomputed here, so `Animate` always sees targets for the current grid.
//! * **Animate** – Advances the day clock, clear transition and metric smoothing.
//! * **Output** – Forwards sound cues and other read-only outputs.

use bevy::prelude::*;

/// Ordered phases for town systems in the `Update` schedule, configured as a
/// chain by `SimulationPlugin`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TownSet {
    Input,
    Edit,
    Animate,
    Output,
}
