//! Headless town demo.
//!
//! Paints a scripted layout, runs a fixed number of 60 Hz frames, logs the
//! metrics as they settle and prints the final `TownSnapshot` as JSON.
//!
//! Environment:
//! - `ZEN_TOWN_SEED`: RNG seed for cell decoration (default 42)
//! - `ZEN_TOWN_FRAMES`: frames to simulate (default 600)
//! - `ZEN_TOWN_LOG`: log filter (default `info`)

mod script;

use std::time::Duration;

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use simulation::params::TownParams;
use simulation::town::Town;
use simulation::town_actions::{ActionSource, TownActionQueue};

const DEFAULT_FRAMES: u32 = 600;
const FRAME: Duration = Duration::from_nanos(16_666_667);
const LOG_EVERY: u32 = 120;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("ignoring unparsable {name}={raw:?}");
            default
        }),
        Err(_) => default,
    }
}

fn main() -> AppExit {
    let filter = std::env::var("ZEN_TOWN_LOG").unwrap_or_else(|_| "info".to_string());

    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(LogPlugin {
        filter,
        level: Level::INFO,
        ..default()
    });

    let seed = env_or("ZEN_TOWN_SEED", TownParams::default().seed);
    let frames = env_or("ZEN_TOWN_FRAMES", DEFAULT_FRAMES);

    app.insert_resource(TownParams::default().with_seed(seed))
        .add_plugins(simulation::SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    {
        let mut queue = app.world_mut().resource_mut::<TownActionQueue>();
        for action in script::demo_layout() {
            queue.push(0, ActionSource::Script, action);
        }
    }
    info!("zen town demo: seed {seed}, {frames} frames");

    for frame in 1..=frames {
        app.update();
        if frame % LOG_EVERY == 0 || frame == frames {
            let town = app.world().resource::<Town>();
            let shown = town.metrics().display();
            let target = town.targets();
            info!(
                "frame {frame}: population {}/{} vibe {}/{} activity {}/{}",
                shown.population,
                target.population,
                shown.vibe,
                target.vibe,
                shown.activity,
                target.activity
            );
        }
    }

    let snapshot = app.world().resource::<Town>().snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => {
            println!("{json}");
            AppExit::Success
        }
        Err(err) => {
            error!("failed to serialize town snapshot: {err}");
            AppExit::error()
        }
    }
}
