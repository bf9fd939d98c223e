//! Thin ECS wrappers driving the [`Town`] resource.

use bevy::prelude::*;

use crate::sfx::PlaySfxEvent;
use crate::town::Town;

/// Advance the town by this frame's delta. `Town::tick` applies the frame clamp.
pub fn advance_town(time: Res<Time>, mut town: ResMut<Town>) {
    town.tick(time.delta_secs());
}

/// Forward queued sound cues to the audio collaborator.
pub fn emit_town_sfx(mut town: ResMut<Town>, mut sfx: EventWriter<PlaySfxEvent>) {
    if town.pending_sfx().is_empty() {
        return;
    }
    for cue in town.drain_sfx() {
        sfx.send(PlaySfxEvent::new(cue));
    }
}
