//! Town health metrics.
//!
//! Converts the static grid into three integer targets (population, vibe and
//! activity) by scoring each populated cell against its eight neighbours:
//! - Vibe: ambience from greenery, water and calm buildings
//! - Activity: footfall from shops, roads and houses next to services
//! - Population: weighted building count plus a share of vibe and activity
//!
//! Targets are recomputed from scratch after every structural change. The
//! displayed values in [`TownMetrics`] relax toward them each frame.

pub mod compute;
pub mod scoring;
pub mod types;


pub use compute::{population_base, recompute_targets, score_cell};
pub use scoring::{ScoringProfile, POPULATION_ORDER};
pub use types::{
    MetricTargets, MetricsDisplay, TownMetrics, ACTIVITY_TO_POPULATION, VIBE_TO_POPULATION,
};
