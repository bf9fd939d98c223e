//! Frame stepping, input injection and query methods for `TestTown`.

use bevy::core::FrameCount;
use bevy::input::mouse::AccumulatedMouseScroll;
use bevy::prelude::*;

use crate::grid::{TileCoord, TownGrid};
use crate::layout::{BoardLayout, HoveredTile};
use crate::sfx::SfxEvent;
use crate::snapshot::TownSnapshot;
use crate::town::Town;
use crate::town_actions::{ActionResult, ActionResultLog, ActionSource, TownAction, TownActionQueue};

use super::{RecordedSfx, TestTown};

impl TestTown {
    // -----------------------------------------------------------------------
    // Frames
    // -----------------------------------------------------------------------

    /// Run `n` full `Update` frames of 50 ms each.
    pub fn frame(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Run frames until `done` holds or `max` frames have passed. Returns the
    /// number of frames run.
    pub fn frame_until(&mut self, max: u32, done: impl Fn(&Town) -> bool) -> u32 {
        for i in 0..max {
            if done(self.town()) {
                return i;
            }
            self.app.update();
        }
        max
    }

    // -----------------------------------------------------------------------
    // Actions and input
    // -----------------------------------------------------------------------

    /// Queue an action; it runs on the next frame.
    pub fn push_action(&mut self, action: TownAction) {
        let world = self.app.world_mut();
        let frame = world.resource::<FrameCount>().0;
        world
            .resource_mut::<TownActionQueue>()
            .push(frame, ActionSource::Script, action);
    }

    /// Queue an action, run one frame, and return its logged result.
    pub fn run_action(&mut self, action: TownAction) -> ActionResult {
        self.push_action(action);
        self.frame(1);
        self.action_log()
            .last()
            .map(|(_, result)| result.clone())
            .unwrap_or(ActionResult::NoChange)
    }

    /// Press `key` for one frame, with Shift held if `shift` is set.
    pub fn tap_key(&mut self, key: KeyCode, shift: bool) {
        let world = self.app.world_mut();
        world.init_resource::<ButtonInput<KeyCode>>();
        {
            let mut keys = world.resource_mut::<ButtonInput<KeyCode>>();
            if shift {
                keys.press(KeyCode::ShiftLeft);
            }
            keys.press(key);
        }
        self.app.update();
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .reset_all();
    }

    /// Click `button` for one frame with the pointer over `hovered`.
    pub fn click(&mut self, button: MouseButton, hovered: Option<TileCoord>) {
        let world = self.app.world_mut();
        world.resource_mut::<HoveredTile>().0 = hovered;
        world.init_resource::<ButtonInput<MouseButton>>();
        world.resource_mut::<ButtonInput<MouseButton>>().press(button);
        self.app.update();
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .reset_all();
    }

    /// Scroll the wheel by `y` lines for one frame.
    pub fn scroll(&mut self, y: f32) {
        let world = self.app.world_mut();
        world.init_resource::<AccumulatedMouseScroll>();
        world.resource_mut::<AccumulatedMouseScroll>().delta = Vec2::new(0.0, y);
        self.app.update();
        self.app
            .world_mut()
            .resource_mut::<AccumulatedMouseScroll>()
            .delta = Vec2::ZERO;
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn town(&self) -> &Town {
        self.app.world().resource::<Town>()
    }

    pub fn grid(&self) -> &TownGrid {
        self.town().grid()
    }

    pub fn layout(&self) -> &BoardLayout {
        self.app.world().resource::<BoardLayout>()
    }

    pub fn snapshot(&self) -> TownSnapshot {
        self.town().snapshot()
    }

    pub fn action_log(&self) -> &ActionResultLog {
        self.app.world().resource::<ActionResultLog>()
    }

    /// Sound cues emitted as `PlaySfxEvent`s so far.
    pub fn sfx(&self) -> &[SfxEvent] {
        &self.app.world().resource::<RecordedSfx>().0
    }

    pub fn clear_sfx(&mut self) {
        self.app.world_mut().resource_mut::<RecordedSfx>().0.clear();
    }
}
