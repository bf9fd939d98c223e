//! Sound cue events.
//!
//! The town records an [`SfxEvent`] for every audible state change; the
//! plugin forwards them as [`PlaySfxEvent`] so a downstream audio crate can
//! synthesize them. No playback happens here.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tiles::TileType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SfxEvent {
    /// A non-road tile was painted.
    Placed(TileType),
    /// A road was painted or road mode was switched on.
    Road,
    Undo,
    Clear,
    /// A tile was selected from the palette.
    Select(TileType),
}

impl SfxEvent {
    pub fn tag(&self) -> &'static str {
        match self {
            SfxEvent::Placed(_) => "place",
            SfxEvent::Road => "road",
            SfxEvent::Undo => "undo",
            SfxEvent::Clear => "clear",
            SfxEvent::Select(_) => "select",
        }
    }

    /// Tile whose tone colours this cue.
    pub fn tile(&self) -> TileType {
        match self {
            SfxEvent::Placed(tile) | SfxEvent::Select(tile) => *tile,
            SfxEvent::Road => TileType::Road,
            SfxEvent::Undo | SfxEvent::Clear => TileType::House,
        }
    }

    /// Pitch at the start of the cue, in Hz.
    pub fn start_frequency(&self) -> f32 {
        match self {
            SfxEvent::Placed(tile) => tile.tone(),
            SfxEvent::Select(tile) => tile.tone() * 1.2,
            SfxEvent::Road => 160.0,
            SfxEvent::Undo => 320.0,
            SfxEvent::Clear => 420.0,
        }
    }

    /// Peak envelope gain of the cue, before the master bus.
    pub fn peak_gain(&self) -> f32 {
        match self {
            SfxEvent::Placed(_) => 0.026,
            SfxEvent::Select(_) => 0.02,
            SfxEvent::Road => 0.028,
            SfxEvent::Undo => 0.024,
            SfxEvent::Clear => 0.035,
        }
    }
}

/// Event carrying a sound cue to the audio collaborator.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PlaySfxEvent {
    pub sfx: SfxEvent,
    /// Starting pitch in Hz.
    pub frequency: f32,
    pub gain: f32,
}

impl PlaySfxEvent {
    pub fn new(sfx: SfxEvent) -> Self {
        Self {
            sfx,
            frequency: sfx.start_frequency(),
            gain: sfx.peak_gain(),
        }
    }
}
