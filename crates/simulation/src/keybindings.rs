//! Keyboard and pointer bindings.
//!
//! [`action_for_key`] is the pure key table; [`keyboard_town_input`] reads
//! Bevy's input resources and queues the resulting [`TownAction`]s. Input
//! resources are optional so the system is a no-op in headless runs where
//! the `InputPlugin` is absent.

use bevy::core::FrameCount;
use bevy::input::mouse::AccumulatedMouseScroll;
use bevy::prelude::*;

use crate::layout::HoveredTile;
use crate::tiles::TileType;
use crate::town_actions::{ActionSource, TownAction, TownActionQueue};

const NUMBER_KEYS: [KeyCode; 8] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
];

const LETTER_KEYS: [KeyCode; 12] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
];

/// Every key the town listens to.
pub const BOUND_KEYS: [KeyCode; 25] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::BracketLeft,
    KeyCode::BracketRight,
    KeyCode::KeyU,
    KeyCode::Space,
];

/// Action bound to `key`. Shift+C clears; every other binding ignores Shift.
pub fn action_for_key(key: KeyCode, shift: bool) -> Option<TownAction> {
    if key == KeyCode::KeyC && shift {
        return Some(TownAction::ClearWithFade);
    }
    if let Some(i) = NUMBER_KEYS.iter().position(|k| *k == key) {
        return Some(TownAction::SelectTile {
            tile: TileType::NUMBER_ROW[i],
        });
    }
    if let Some(i) = LETTER_KEYS.iter().position(|k| *k == key) {
        return Some(TownAction::SelectTile {
            tile: TileType::LETTER_ROW[i],
        });
    }
    match key {
        KeyCode::KeyM => Some(TownAction::ToggleRoadMode),
        KeyCode::BracketLeft => Some(TownAction::AdjustBrush { delta: -1 }),
        KeyCode::BracketRight => Some(TownAction::AdjustBrush { delta: 1 }),
        KeyCode::KeyU => Some(TownAction::Undo),
        KeyCode::Space => Some(TownAction::ToggleDayPause),
        _ => None,
    }
}

/// Brush change for one frame of wheel input: scrolling up grows the brush.
pub fn brush_delta_for_scroll(scroll_y: f32) -> i32 {
    if scroll_y > 0.0 {
        1
    } else if scroll_y < 0.0 {
        -1
    } else {
        0
    }
}

pub fn keyboard_town_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    scroll: Option<Res<AccumulatedMouseScroll>>,
    frame: Option<Res<FrameCount>>,
    hovered: Res<HoveredTile>,
    mut queue: ResMut<TownActionQueue>,
) {
    let frame = frame.map_or(0, |f| f.0);
    let mut push = |action| queue.push(frame, ActionSource::Player, action);

    if let Some(keys) = keys {
        let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        for key in BOUND_KEYS {
            if keys.just_pressed(key) {
                if let Some(action) = action_for_key(key, shift) {
                    push(action);
                }
            }
        }
    }

    if let Some(scroll) = scroll {
        let delta = brush_delta_for_scroll(scroll.delta.y);
        if delta != 0 {
            push(TownAction::AdjustBrush { delta });
        }
    }

    if let Some(mouse) = mouse {
        if mouse.just_pressed(MouseButton::Right) {
            push(TownAction::Undo);
        } else if mouse.just_pressed(MouseButton::Left) {
            if let Some(tile) = hovered.0 {
                push(TownAction::Paint {
                    x: tile.x,
                    y: tile.y,
                });
            }
        }
    }
}
