use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::TownAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSource {
    Player,
    Script,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedAction {
    pub frame: u32,
    pub source: ActionSource,
    pub action: TownAction,
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TownActionQueue {
    pending: Vec<QueuedAction>,
}

impl TownActionQueue {
    pub fn push(&mut self, frame: u32, source: ActionSource, action: TownAction) {
        self.pending.push(QueuedAction {
            frame,
            source,
            action,
        });
    }

    pub fn drain(&mut self) -> Vec<QueuedAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
