//! Tile catalog.
//!
//! Every kind of content a board cell can hold is a `TileType` variant. Per
//! variant lookups are exhaustive matches, so adding a variant fails to
//! compile until every table covers it.
//! Scoring weights live next to the metrics engine in `metrics::scoring`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    House,
    Tree,
    Shop,
    Pond,
    Park,
    Cafe,
    Library,
    Shrine,
    Bakery,
    School,
    Clinic,
    Market,
    Theater,
    Gallery,
    Farm,
    Fountain,
    Temple,
    Workshop,
    Inn,
    Observatory,
    Road,
}

impl TileType {
    pub const COUNT: usize = 21;

    /// All variants in catalog order. `ALL[t.index()] == t`.
    pub const ALL: [TileType; Self::COUNT] = [
        TileType::House,
        TileType::Tree,
        TileType::Shop,
        TileType::Pond,
        TileType::Park,
        TileType::Cafe,
        TileType::Library,
        TileType::Shrine,
        TileType::Bakery,
        TileType::School,
        TileType::Clinic,
        TileType::Market,
        TileType::Theater,
        TileType::Gallery,
        TileType::Farm,
        TileType::Fountain,
        TileType::Temple,
        TileType::Workshop,
        TileType::Inn,
        TileType::Observatory,
        TileType::Road,
    ];

    /// Tiles reachable from the number row, in key order (1..=8).
    pub const NUMBER_ROW: [TileType; 8] = [
        TileType::House,
        TileType::Tree,
        TileType::Shop,
        TileType::Pond,
        TileType::Park,
        TileType::Cafe,
        TileType::Library,
        TileType::Shrine,
    ];

    /// Tiles reachable from the letter keys, in key order (A..=L).
    pub const LETTER_ROW: [TileType; 12] = [
        TileType::Bakery,
        TileType::School,
        TileType::Clinic,
        TileType::Market,
        TileType::Theater,
        TileType::Gallery,
        TileType::Farm,
        TileType::Fountain,
        TileType::Temple,
        TileType::Workshop,
        TileType::Inn,
        TileType::Observatory,
    ];

    /// Dense index in `[0, COUNT)`, used for per-type tallies.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_road(self) -> bool {
        matches!(self, TileType::Road)
    }

    /// Name shown in the HUD.
    pub fn label(self) -> &'static str {
        match self {
            TileType::House => "house",
            TileType::Tree => "tree",
            TileType::Shop => "shop",
            TileType::Pond => "pond",
            TileType::Park => "park",
            TileType::Cafe => "cafe",
            TileType::Library => "library",
            TileType::Shrine => "shrine",
            TileType::Bakery => "bakery",
            TileType::School => "school",
            TileType::Clinic => "clinic",
            TileType::Market => "market",
            TileType::Theater => "theater",
            TileType::Gallery => "gallery",
            TileType::Farm => "farm",
            TileType::Fountain => "fountain",
            TileType::Temple => "temple",
            TileType::Workshop => "workshop",
            TileType::Inn => "inn",
            TileType::Observatory => "observatory",
            TileType::Road => "street",
        }
    }

    /// Stable machine name, used in sound cue tags.
    pub fn key(self) -> &'static str {
        match self {
            TileType::Road => "road",
            other => other.label(),
        }
    }

    /// Base pitch in Hz for this tile's sound cues.
    pub fn tone(self) -> f32 {
        match self {
            TileType::House => 270.0,
            TileType::Tree => 250.0,
            TileType::Shop => 310.0,
            TileType::Pond => 220.0,
            TileType::Park => 240.0,
            TileType::Cafe => 290.0,
            TileType::Library => 260.0,
            TileType::Shrine => 330.0,
            TileType::Bakery => 300.0,
            TileType::School => 255.0,
            TileType::Clinic => 245.0,
            TileType::Market => 318.0,
            TileType::Theater => 342.0,
            TileType::Gallery => 286.0,
            TileType::Farm => 232.0,
            TileType::Fountain => 216.0,
            TileType::Temple => 334.0,
            TileType::Workshop => 306.0,
            TileType::Inn => 278.0,
            TileType::Observatory => 354.0,
            TileType::Road => 168.0,
        }
    }

    /// Look up a tile by its machine name (`key()`).
    pub fn from_key(key: &str) -> Option<TileType> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}
