//! Two-phase board clear.
//!
//! `Idle -> FadingOut -> (wipe) -> FadingIn -> Idle`. The overlay alpha rises
//! to 1, the board is wiped at full cover, and the overlay fades away again.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum ClearTransition {
    #[default]
    Idle,
    FadingOut { alpha: f32 },
    FadingIn { alpha: f32 },
}

/// What the owner must do after advancing the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearStep {
    /// Nothing structural happened this step.
    Continue,
    /// The overlay just reached full cover: wipe the board now.
    Wipe,
    /// The overlay has fully faded; the transition is idle again.
    Finished,
}

impl ClearTransition {
    /// Begin fading out. Returns `false` (and does nothing) if a clear is
    /// already running.
    pub fn start(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        *self = ClearTransition::FadingOut { alpha: 0.0 };
        true
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, ClearTransition::Idle)
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            ClearTransition::Idle => 0.0,
            ClearTransition::FadingOut { alpha } | ClearTransition::FadingIn { alpha } => alpha,
        }
    }

    pub fn phase_label(&self) -> &'static str {
        match self {
            ClearTransition::Idle => "idle",
            ClearTransition::FadingOut { .. } => "out",
            ClearTransition::FadingIn { .. } => "in",
        }
    }

    pub fn advance(&mut self, dt: f32, rate: f32) -> ClearStep {
        match *self {
            ClearTransition::Idle => ClearStep::Continue,
            ClearTransition::FadingOut { alpha } => {
                let alpha = alpha + dt * rate;
                if alpha >= 1.0 {
                    *self = ClearTransition::FadingIn { alpha: 1.0 };
                    ClearStep::Wipe
                } else {
                    *self = ClearTransition::FadingOut { alpha };
                    ClearStep::Continue
                }
            }
            ClearTransition::FadingIn { alpha } => {
                let alpha = alpha - dt * rate;
                if alpha <= 0.0 {
                    *self = ClearTransition::Idle;
                    ClearStep::Finished
                } else {
                    *self = ClearTransition::FadingIn { alpha };
                    ClearStep::Continue
                }
            }
        }
    }
}
