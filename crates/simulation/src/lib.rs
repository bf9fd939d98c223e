use bevy::prelude::*;

pub mod clear_transition;
pub mod config;
pub mod edit;
pub mod grid;
pub mod keybindings;
pub mod layout;
pub mod metrics;
pub mod params;
pub mod sfx;
pub mod sim_rng;
pub mod simulation_sets;
pub mod snapshot;
pub mod tiles;
pub mod time_of_day;
pub mod tool_state;
pub mod town;
pub mod town_actions;
pub mod town_systems;

#[cfg(test)]
pub mod test_harness;

pub use simulation_sets::TownSet;

use layout::{BoardLayout, HoveredTile};
use params::TownParams;
use sfx::PlaySfxEvent;
use town::Town;

/// Registers the town resources, the action pipeline and the per-frame
/// systems. Insert a custom [`TownParams`] before adding the plugin to
/// override the defaults.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TownParams>()
            .init_resource::<Town>()
            .init_resource::<BoardLayout>()
            .init_resource::<HoveredTile>()
            .add_event::<PlaySfxEvent>();

        app.configure_sets(
            Update,
            (
                TownSet::Input,
                TownSet::Edit,
                TownSet::Animate,
                TownSet::Output,
            )
                .chain(),
        );

        app.add_plugins(town_actions::TownActionsPlugin);

        app.add_systems(
            Update,
            (
                keybindings::keyboard_town_input.in_set(TownSet::Input),
                town_systems::advance_town.in_set(TownSet::Animate),
                town_systems::emit_town_sfx.in_set(TownSet::Output),
            ),
        );
    }
}
