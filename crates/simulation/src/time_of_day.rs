use std::f32::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

/// Lowest brightness, reached at midnight.
pub const NIGHT_FLOOR: f32 = 0.58;
/// Brightness added at noon on top of the floor.
pub const DAYLIGHT_SWING: f32 = 0.42;

/// Day/night clock. One unit of `time` is one full day.
///
/// `time` grows without bound; brightness reads only the wrapped
/// [`phase`](Self::phase).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayClock {
    pub time: f64,
    pub paused: bool,
}

impl DayClock {
    pub fn advance(&mut self, dt: f32, rate: f32) {
        if self.paused {
            return;
        }
        self.time += f64::from(dt) * f64::from(rate);
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Position within the current day in `[0, 1)`.
    pub fn phase(&self) -> f32 {
        self.time.rem_euclid(1.0) as f32
    }

    pub fn day_light(&self) -> f32 {
        day_light(self.phase())
    }

    pub fn night_factor(&self) -> f32 {
        1.0 - self.day_light()
    }
}

/// Brightness in `[0.58, 1.0]` for a day phase; darkest at 0, brightest at 0.5.
pub fn day_light(phase: f32) -> f32 {
    NIGHT_FLOOR + DAYLIGHT_SWING * (0.5 + 0.5 * (phase * TAU - FRAC_PI_2).sin())
}
