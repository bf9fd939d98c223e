//! Assertion helpers for `TestTown` integration tests.

use crate::tiles::TileType;

use super::TestTown;

impl TestTown {
    pub fn assert_tile(&self, x: i32, y: i32, expected: Option<TileType>) {
        let actual = self.grid().tile_at(x, y);
        assert_eq!(
            actual, expected,
            "Expected {expected:?} at ({x}, {y}), got {actual:?}"
        );
    }

    pub fn assert_board_empty(&self) {
        let occupied = self.grid().occupied_count();
        assert_eq!(occupied, 0, "Expected an empty board, found {occupied} cells");
    }

    pub fn assert_targets(&self, population: i64, vibe: i64, activity: i64) {
        let t = self.town().targets();
        assert_eq!(
            (t.population, t.vibe, t.activity),
            (population, vibe, activity),
            "Unexpected metric targets (population, vibe, activity)"
        );
    }

    pub fn assert_history_len(&self, expected: usize) {
        let len = self.town().history().len();
        assert_eq!(len, expected, "Expected {expected} history entries, got {len}");
    }
}
