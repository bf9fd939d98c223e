use crate::clear_transition::ClearTransition;
use crate::sfx::SfxEvent;
use crate::test_harness::TestTown;
use crate::tiles::TileType;
use crate::town_actions::{ActionResult, TownAction};

// ====================================================================
// Clear with fade across real frames
// ====================================================================

#[test]
fn test_clear_fades_out_wipes_and_fades_in() {
    let mut town = TestTown::new()
        .with_brush(3, 3, TileType::House, 3)
        .with_tile(7, 5, TileType::Shrine);
    assert!(town.run_action(TownAction::ClearWithFade).is_success());
    assert_eq!(town.sfx(), &[SfxEvent::Clear]);

    // The action frame already advanced one 50 ms step.
    let alpha = town.town().clear_transition().alpha();
    assert!((alpha - 0.045).abs() < 1e-5, "alpha {alpha}");
    assert!(town.grid().occupied_count() > 0);

    let frames = town.frame_until(100, |t| {
        matches!(t.clear_transition(), ClearTransition::FadingIn { .. })
    });
    assert!(frames > 0 && frames < 100);
    town.assert_board_empty();
    town.assert_history_len(0);
    town.assert_targets(0, 0, 0);

    town.frame_until(100, |t| !t.clear_transition().is_active());
    assert_eq!(*town.town().clear_transition(), ClearTransition::Idle);
    assert_eq!(town.snapshot().clear_alpha, 0.0);
}

#[test]
fn test_clear_reentry_is_ignored() {
    let mut town = TestTown::new().with_tile(1, 1, TileType::Cafe);
    town.run_action(TownAction::ClearWithFade);
    town.frame(5);
    let alpha = town.town().clear_transition().alpha();
    assert_eq!(
        town.run_action(TownAction::ClearWithFade),
        ActionResult::NoChange
    );
    // Only the regular frame step was applied, no reset to zero.
    assert!(town.town().clear_transition().alpha() > alpha);
    assert_eq!(town.sfx(), &[SfxEvent::Clear]);
}

#[test]
fn test_paint_during_fade_out_is_wiped() {
    let mut town = TestTown::new();
    town.run_action(TownAction::ClearWithFade);
    town.run_action(TownAction::Paint { x: 2, y: 2 });
    town.assert_tile(2, 2, Some(TileType::House));
    town.frame_until(100, |t| t.grid().is_empty());
    town.assert_board_empty();
}

#[test]
fn test_hard_clear_action_is_immediate_and_silent() {
    let mut town = TestTown::new().with_brush(4, 3, TileType::Market, 2);
    assert!(town.run_action(TownAction::HardClear).is_success());
    town.assert_board_empty();
    town.assert_history_len(0);
    assert!(town.sfx().is_empty());
    assert!(!town.town().clear_transition().is_active());
}
