use crate::config::MAX_HISTORY;
use crate::sfx::SfxEvent;
use crate::test_harness::TestTown;
use crate::tiles::TileType;
use crate::town_actions::{ActionError, ActionResult, TownAction};

// ====================================================================
// Painting through the action pipeline
// ====================================================================

#[test]
fn test_paint_action_places_house_and_scores() {
    let mut town = TestTown::new();
    let result = town.run_action(TownAction::Paint { x: 3, y: 3 });
    assert_eq!(result, ActionResult::Success);
    town.assert_tile(3, 3, Some(TileType::House));
    town.assert_targets(4, 1, 0);
    town.assert_history_len(1);
    assert_eq!(town.sfx(), &[SfxEvent::Placed(TileType::House)]);
}

#[test]
fn test_house_and_park_scenario() {
    let mut town = TestTown::new().with_tile(3, 3, TileType::House);
    town.run_action(TownAction::PaintWith {
        x: 3,
        y: 2,
        tile: TileType::Park,
        radius: 1,
    });
    let targets = town.town().targets();
    assert_eq!(targets.vibe, 7);
    assert_eq!(targets.activity, 0);
}

#[test]
fn test_repaint_same_type_is_idempotent() {
    let mut town = TestTown::new().with_tile(3, 3, TileType::House);
    let before = town.town().targets();
    let result = town.run_action(TownAction::Paint { x: 3, y: 3 });
    assert_eq!(result, ActionResult::NoChange);
    town.assert_history_len(1);
    assert_eq!(town.town().targets(), before);
    assert!(town.sfx().is_empty());
}

#[test]
fn test_out_of_bounds_paint_is_logged_as_error() {
    let mut town = TestTown::new();
    let result = town.run_action(TownAction::Paint { x: -1, y: 2 });
    assert_eq!(result, ActionResult::Error(ActionError::OutOfBounds));
    town.assert_board_empty();
    assert_eq!(town.action_log().len(), 1);
}

#[test]
fn test_actions_run_in_queue_order() {
    let mut town = TestTown::new();
    town.push_action(TownAction::SelectTile {
        tile: TileType::Shop,
    });
    town.push_action(TownAction::Paint { x: 1, y: 1 });
    town.push_action(TownAction::ToggleRoadMode);
    town.push_action(TownAction::Paint { x: 2, y: 1 });
    town.frame(1);

    town.assert_tile(1, 1, Some(TileType::Shop));
    town.assert_tile(2, 1, Some(TileType::Road));
    assert_eq!(
        town.sfx(),
        &[
            SfxEvent::Select(TileType::Shop),
            SfxEvent::Placed(TileType::Shop),
            SfxEvent::Road,
            SfxEvent::Road,
        ]
    );
    assert_eq!(town.action_log().len(), 4);
}

#[test]
fn test_brush_radius_paints_square() {
    let mut town = TestTown::new();
    town.run_action(TownAction::AdjustBrush { delta: 2 });
    town.run_action(TownAction::Paint { x: 4, y: 3 });
    assert_eq!(town.grid().occupied_count(), 25);
    town.assert_history_len(1);
}

// ====================================================================
// Undo
// ====================================================================

#[test]
fn test_strokes_then_undos_restore_empty_board() {
    let mut town = TestTown::new();
    let strokes = [(1, 1), (2, 4), (6, 2)];
    for (i, (x, y)) in strokes.iter().enumerate() {
        town.run_action(TownAction::PaintWith {
            x: *x,
            y: *y,
            tile: TileType::ALL[i * 5],
            radius: 2,
        });
    }
    town.assert_history_len(3);
    for _ in strokes {
        assert!(town.run_action(TownAction::Undo).is_success());
    }
    town.assert_board_empty();
    town.assert_history_len(0);
    town.assert_targets(0, 0, 0);
    assert_eq!(town.run_action(TownAction::Undo), ActionResult::NoChange);
}

#[test]
fn test_undo_overwrite_restores_original_tile() {
    let mut town = TestTown::new().with_tile(5, 5, TileType::Pond);
    town.run_action(TownAction::PaintWith {
        x: 5,
        y: 5,
        tile: TileType::Farm,
        radius: 1,
    });
    town.assert_tile(5, 5, Some(TileType::Farm));
    town.run_action(TownAction::Undo);
    town.assert_tile(5, 5, Some(TileType::Pond));
    assert_eq!(town.sfx().last(), Some(&SfxEvent::Undo));
}

#[test]
fn test_history_caps_at_capacity() {
    let mut town = TestTown::new();
    let tiles = [TileType::Tree, TileType::Park];
    for i in 0..=MAX_HISTORY {
        town.push_action(TownAction::PaintWith {
            x: 0,
            y: 0,
            tile: tiles[i % 2],
            radius: 1,
        });
    }
    town.frame(1);
    town.assert_history_len(MAX_HISTORY);
}

// ====================================================================
// Resize
// ====================================================================

#[test]
fn test_resize_keeps_overlap_and_history() {
    let mut town = TestTown::new()
        .with_size(12, 10)
        .with_tile(2, 3, TileType::Library)
        .with_tile(10, 8, TileType::Temple);

    assert!(town
        .run_action(TownAction::Resize { cols: 9, rows: 7 })
        .is_success());
    town.assert_tile(2, 3, Some(TileType::Library));
    assert_eq!(town.grid().occupied_count(), 1);
    town.assert_history_len(2);

    // The temple stroke is still undoable even though its cell is gone.
    assert!(town.run_action(TownAction::Undo).is_success());
    town.assert_tile(2, 3, Some(TileType::Library));
}

#[test]
fn test_fit_viewport_updates_layout() {
    let mut town = TestTown::new();
    town.run_action(TownAction::FitViewport {
        width: 1000.0,
        height: 500.0,
    });
    assert_eq!((town.layout().cols, town.layout().rows), (23, 10));
    assert_eq!((town.grid().cols(), town.grid().rows()), (23, 10));
}
