//! Metric types and population blend constants.

use serde::{Deserialize, Serialize};

use crate::params::VitalityParams;

/// Share of the activity total folded into the population target.
pub const ACTIVITY_TO_POPULATION: f64 = 0.28;
/// Share of the vibe total folded into the population target.
pub const VIBE_TO_POPULATION: f64 = 0.10;

// =============================================================================
// Targets
// =============================================================================

/// Whole-grid metric targets. Always integers; recomputed, never integrated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricTargets {
    pub population: i64,
    pub vibe: i64,
    pub activity: i64,
}

impl MetricTargets {
    /// Drift strength applied on top of relaxation each frame.
    pub fn vitality(&self, scale: f32) -> f32 {
        (self.vibe + self.activity) as f32 * scale
    }
}

// =============================================================================
// Displayed metrics
// =============================================================================

/// Displayed metrics, animated toward `targets` by [`TownMetrics::relax`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TownMetrics {
    pub population: f32,
    pub vibe: f32,
    pub activity: f32,
    pub targets: MetricTargets,
}

/// Displayed metrics rounded for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsDisplay {
    pub population: i64,
    pub vibe: i64,
    pub activity: i64,
}

impl TownMetrics {
    /// One animation step: exponential approach to the targets with rate
    /// `smoothing_rate`, then a small upward drift scaled by vitality.
    pub fn relax(&mut self, dt: f32, smoothing_rate: f32, drift: &VitalityParams) {
        let smooth = (dt * smoothing_rate).clamp(0.0, 1.0);
        let t = self.targets;
        self.population += (t.population as f32 - self.population) * smooth;
        self.vibe += (t.vibe as f32 - self.vibe) * smooth;
        self.activity += (t.activity as f32 - self.activity) * smooth;

        let vitality = t.vitality(drift.scale);
        self.population += vitality * dt * drift.population_drift;
        self.vibe += vitality * dt * drift.vibe_drift;
    }

    pub fn display(&self) -> MetricsDisplay {
        MetricsDisplay {
            population: self.population.round() as i64,
            vibe: self.vibe.round() as i64,
            activity: self.activity.round() as i64,
        }
    }
}
