use bevy::prelude::{KeyCode, MouseButton};

use crate::grid::TileCoord;
use crate::sfx::SfxEvent;
use crate::test_harness::TestTown;
use crate::tiles::TileType;

// ====================================================================
// Keyboard
// ====================================================================

#[test]
fn test_headless_frames_without_input_do_nothing() {
    let mut town = TestTown::new();
    town.frame(10);
    town.assert_board_empty();
    assert!(town.action_log().is_empty());
}

#[test]
fn test_number_key_selects_tile() {
    let mut town = TestTown::new();
    town.tap_key(KeyCode::Digit4, false);
    assert_eq!(town.town().tools().selected, TileType::Pond);
    assert_eq!(town.sfx(), &[SfxEvent::Select(TileType::Pond)]);
}

#[test]
fn test_letter_keys_select_and_shift_c_clears() {
    let mut town = TestTown::new().with_tile(0, 0, TileType::Tree);
    town.tap_key(KeyCode::KeyC, false);
    assert_eq!(town.town().tools().selected, TileType::Clinic);
    assert!(!town.town().clear_transition().is_active());

    town.tap_key(KeyCode::KeyC, true);
    assert!(town.town().clear_transition().is_active());
    assert_eq!(town.town().tools().selected, TileType::Clinic);
}

#[test]
fn test_road_mode_and_brush_keys() {
    let mut town = TestTown::new();
    town.tap_key(KeyCode::KeyM, false);
    let snapshot = town.snapshot();
    assert_eq!(snapshot.mode_label, "street");
    assert_eq!(snapshot.selected_label, "street (M)");

    town.tap_key(KeyCode::BracketRight, false);
    town.tap_key(KeyCode::BracketRight, false);
    town.tap_key(KeyCode::BracketLeft, false);
    assert_eq!(town.town().tools().brush, 2);

    town.tap_key(KeyCode::KeyM, false);
    assert_eq!(town.snapshot().mode_label, "build");
    assert_eq!(
        town.sfx(),
        &[SfxEvent::Road, SfxEvent::Select(TileType::House)]
    );
}

#[test]
fn test_space_toggles_day_pause() {
    let mut town = TestTown::new();
    town.tap_key(KeyCode::Space, false);
    assert!(town.town().clock().paused);
    let time = town.town().clock().time;
    town.frame(20);
    assert_eq!(town.town().clock().time, time);
    assert_eq!(town.sfx(), &[SfxEvent::Select(TileType::Observatory)]);
}

#[test]
fn test_u_key_undoes() {
    let mut town = TestTown::new().with_tile(4, 4, TileType::Inn);
    town.tap_key(KeyCode::KeyU, false);
    town.assert_board_empty();
}

// ====================================================================
// Pointer
// ====================================================================

#[test]
fn test_left_click_paints_hovered_tile() {
    let mut town = TestTown::new();
    town.tap_key(KeyCode::KeyK, false);
    town.click(MouseButton::Left, Some(TileCoord::new(6, 1)));
    town.assert_tile(6, 1, Some(TileType::Inn));
}

#[test]
fn test_click_off_board_does_nothing() {
    let mut town = TestTown::new();
    town.click(MouseButton::Left, None);
    town.assert_board_empty();
    assert!(town.action_log().is_empty());
}

#[test]
fn test_right_click_undoes() {
    let mut town = TestTown::new();
    town.click(MouseButton::Left, Some(TileCoord::new(2, 2)));
    town.click(MouseButton::Right, Some(TileCoord::new(2, 2)));
    town.assert_board_empty();
}

#[test]
fn test_wheel_resizes_brush_within_bounds() {
    let mut town = TestTown::new();
    for _ in 0..6 {
        town.scroll(1.0);
    }
    assert_eq!(town.town().tools().brush, 4);
    town.scroll(-2.0);
    assert_eq!(town.town().tools().brush, 3);
    town.frame(3);
    assert_eq!(town.town().tools().brush, 3);
}
