//! Action executor system: drains the [`TownActionQueue`] each frame and
//! applies every queued [`TownAction`] to the [`Town`], recording results in
//! the [`ActionResultLog`].

use bevy::prelude::*;

use crate::config::{MAX_BRUSH, MIN_BRUSH};
use crate::edit::EditOutcome;
use crate::grid::TileCoord;
use crate::layout::BoardLayout;
use crate::town::Town;

use super::result_log::ActionResultLog;
use super::{ActionError, ActionResult, TownAction, TownActionQueue};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

pub fn execute_queued_actions(
    mut queue: ResMut<TownActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut town: ResMut<Town>,
    mut layout: ResMut<BoardLayout>,
) {
    for queued in queue.drain() {
        let result = execute_action(&queued.action, &mut town, &mut layout);
        if let ActionResult::Error(err) = &result {
            warn!(
                "{:?} action {:?} from frame {} rejected: {:?}",
                queued.source, queued.action, queued.frame, err
            );
        }
        log.push(queued.action, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

pub fn execute_action(
    action: &TownAction,
    town: &mut Town,
    layout: &mut BoardLayout,
) -> ActionResult {
    match *action {
        TownAction::Paint { x, y } => match bounds_check(town, x, y) {
            Ok(center) => edit_result(town.paint(center)),
            Err(result) => result,
        },
        TownAction::PaintWith { x, y, tile, radius } => {
            if !(MIN_BRUSH..=MAX_BRUSH).contains(&radius) {
                return ActionResult::Error(ActionError::InvalidParameter(format!(
                    "brush radius {radius} outside {MIN_BRUSH}..={MAX_BRUSH}"
                )));
            }
            match bounds_check(town, x, y) {
                Ok(center) => edit_result(town.apply_brush(center, tile, radius)),
                Err(result) => result,
            }
        }
        TownAction::Undo => edit_result(town.undo_last()),
        TownAction::ClearWithFade => changed_result(town.clear_with_fade()),
        TownAction::HardClear => {
            town.hard_clear();
            ActionResult::Success
        }
        TownAction::SelectTile { tile } => {
            town.select_tile(tile);
            ActionResult::Success
        }
        TownAction::ToggleRoadMode => {
            town.toggle_road_mode();
            ActionResult::Success
        }
        TownAction::AdjustBrush { delta } => {
            let before = town.tools().brush;
            changed_result(town.adjust_brush(delta) != before)
        }
        TownAction::ToggleDayPause => {
            town.toggle_day_pause();
            ActionResult::Success
        }
        TownAction::Resize { cols, rows } => changed_result(town.resize(cols, rows)),
        TownAction::FitViewport { width, height } => {
            execute_fit_viewport(width, height, town, layout)
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn bounds_check(town: &Town, x: i32, y: i32) -> Result<TileCoord, ActionResult> {
    if town.grid().in_bounds(x, y) {
        Ok(TileCoord::new(x, y))
    } else {
        Err(ActionResult::Error(ActionError::OutOfBounds))
    }
}

fn edit_result(outcome: EditOutcome) -> ActionResult {
    changed_result(outcome.is_applied())
}

fn changed_result(changed: bool) -> ActionResult {
    if changed {
        ActionResult::Success
    } else {
        ActionResult::NoChange
    }
}

fn execute_fit_viewport(
    width: f32,
    height: f32,
    town: &mut Town,
    layout: &mut BoardLayout,
) -> ActionResult {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return ActionResult::Error(ActionError::InvalidParameter(format!(
            "viewport {width}x{height}"
        )));
    }
    let next = BoardLayout::from_viewport(width, height);
    let layout_changed = next != *layout;
    *layout = next;
    let resized = town.resize(next.cols, next.rows);
    changed_result(layout_changed || resized)
}
