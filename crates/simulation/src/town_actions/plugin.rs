//! Plugin that wires up the town-actions subsystem: queue, executor, and log.

use bevy::prelude::*;

use super::executor::execute_queued_actions;
use super::result_log::ActionResultLog;
use super::TownActionQueue;
use crate::simulation_sets::TownSet;

pub struct TownActionsPlugin;

impl Plugin for TownActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TownActionQueue>();
        app.init_resource::<ActionResultLog>();

        app.add_systems(Update, execute_queued_actions.in_set(TownSet::Edit));
    }
}
