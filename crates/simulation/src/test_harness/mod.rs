//! # TestTown: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` with a fluent builder so
//! integration tests can set up a board, feed actions or raw input, step
//! frames with a fixed 50 ms delta and inspect the resulting town.

mod assertions;
mod queries;

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::params::TownParams;
use crate::sfx::{PlaySfxEvent, SfxEvent};
use crate::town::Town;
use crate::{SimulationPlugin, TownSet};

/// Frame delta used by [`TestTown::frame`], equal to the frame clamp.
pub const TEST_FRAME: Duration = Duration::from_millis(50);

/// Sound cues seen by the harness since the last clear.
#[derive(Resource, Default)]
pub struct RecordedSfx(pub Vec<SfxEvent>);

fn record_sfx(mut events: EventReader<PlaySfxEvent>, mut recorded: ResMut<RecordedSfx>) {
    recorded.0.extend(events.read().map(|e| e.sfx));
}

pub struct TestTown {
    app: App,
}

impl Default for TestTown {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTown {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// An empty 8x6 town with default params.
    pub fn new() -> Self {
        Self::with_params(TownParams::default())
    }

    pub fn with_params(params: TownParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(params);
        app.add_plugins(SimulationPlugin);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(TEST_FRAME));
        app.init_resource::<RecordedSfx>();
        app.add_systems(Update, record_sfx.after(TownSet::Output));

        // The first update only primes the clock; its delta is zero.
        app.update();

        Self { app }
    }

    /// Access the ECS world mutably.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    fn town_mut(&mut self) -> Mut<'_, Town> {
        self.app.world_mut().resource_mut::<Town>()
    }
}
