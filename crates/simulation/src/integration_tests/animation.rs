use crate::params::TownParams;
use crate::test_harness::TestTown;
use crate::tiles::TileType;

// ====================================================================
// Day clock and metric smoothing driven by frame time
// ====================================================================

#[test]
fn test_day_clock_advances_with_frames() {
    let mut town = TestTown::new();
    town.frame(20);
    // 20 frames x 50 ms x 0.03 = 0.03
    assert!((town.town().clock().time - 0.03).abs() < 1e-5);
    assert!(town.snapshot().day_light > 0.58);
}

#[test]
fn test_day_rate_param_is_respected() {
    let mut params = TownParams::default();
    params.animation.day_rate = 0.5;
    let mut town = TestTown::with_params(params);
    town.frame(10);
    assert!((town.town().clock().time - 0.25).abs() < 1e-5);
    assert!((town.snapshot().day_light - 0.79).abs() < 1e-4);
}

#[test]
fn test_displayed_metrics_approach_targets() {
    let mut town = TestTown::new()
        .with_brush(2, 2, TileType::House, 2)
        .with_tile(4, 2, TileType::Shop)
        .with_tile(4, 3, TileType::Cafe);
    let targets = town.town().targets();
    assert!(targets.activity > 0);

    town.frame(1);
    let early = town.town().metrics().activity;
    assert!(early > 0.0 && early < targets.activity as f32);

    town.frame(300);
    let metrics = town.town().metrics();
    assert!((metrics.activity - targets.activity as f32).abs() < 0.01);
    assert!(metrics.population >= targets.population as f32);
    assert!(metrics.vibe >= targets.vibe as f32);
}

#[test]
fn test_seeded_towns_are_identical() {
    let build = |seed| {
        let mut town = TestTown::with_params(TownParams::default().with_seed(seed))
            .with_brush(3, 3, TileType::Gallery, 2);
        town.frame(5);
        town.snapshot()
    };
    assert_eq!(build(11), build(11));
}
