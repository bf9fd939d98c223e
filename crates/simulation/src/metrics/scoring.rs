//! Per-tile scoring weights.
//!
//! Each tile contributes `base + Σ weight × neighbours_of(kind)` to vibe and
//! to activity. Weights are static tables resolved by exhaustive match.

use crate::tiles::TileType;
use crate::tiles::TileType::*;

/// `base + Σ weight × count` for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub base: f64,
    pub terms: &'static [(TileType, f64)],
}

impl Score {
    pub const ZERO: Score = Score::new(0.0, &[]);

    pub const fn new(base: f64, terms: &'static [(TileType, f64)]) -> Self {
        Self { base, terms }
    }

    /// Evaluate against a neighbour tally indexed by `TileType::index`.
    pub fn evaluate(&self, neighbors: &[u32; TileType::COUNT]) -> f64 {
        self.terms
            .iter()
            .fold(self.base, |acc, (kind, weight)| {
                acc + neighbors[kind.index()] as f64 * weight
            })
    }
}

/// Summation order of the population weights. Float addition is not
/// associative, so `.5` rounding ties depend on it.
pub const POPULATION_ORDER: [TileType; TileType::COUNT] = [
    House, Shop, Park, Tree, Pond, Cafe, Library, Shrine, Bakery, School, Clinic, Market, Theater,
    Gallery, Farm, Fountain, Temple, Workshop, Inn, Observatory, Road,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringProfile {
    pub vibe: Score,
    pub activity: Score,
}

const fn profile(vibe: Score, activity: Score) -> ScoringProfile {
    ScoringProfile { vibe, activity }
}

impl TileType {
    pub fn scoring(self) -> ScoringProfile {
        match self {
            House => profile(
                Score::new(1.0, &[(Park, 2.2), (Pond, 2.6), (Tree, 1.5)]),
                Score::new(0.0, &[(Shop, 2.1), (Cafe, 1.4), (Road, 0.8)]),
            ),
            Tree => profile(
                Score::new(1.2, &[(House, 0.8), (Shrine, 0.5)]),
                Score::ZERO,
            ),
            Shop => profile(
                Score::new(0.0, &[(Park, 0.8)]),
                Score::new(2.0, &[(House, 2.4), (Road, 1.5)]),
            ),
            Pond => profile(
                Score::new(2.4, &[(Park, 0.9), (Shrine, 0.8)]),
                Score::ZERO,
            ),
            Park => profile(
                Score::new(1.7, &[(House, 1.6), (Pond, 0.8)]),
                Score::new(0.0, &[(Cafe, 0.7)]),
            ),
            Cafe => profile(
                Score::new(1.3, &[(Tree, 0.7)]),
                Score::new(1.7, &[(House, 1.8), (Road, 1.1)]),
            ),
            Library => profile(
                Score::new(1.6, &[(Park, 0.9), (House, 0.7)]),
                Score::new(1.1, &[(Road, 0.8)]),
            ),
            Shrine => profile(
                Score::new(2.3, &[(Tree, 1.2), (Pond, 1.2)]),
                Score::new(0.0, &[(House, 0.6)]),
            ),
            Bakery => profile(
                Score::new(1.1, &[(House, 1.1)]),
                Score::new(1.4, &[(Road, 0.8)]),
            ),
            School => profile(
                Score::new(1.2, &[(Park, 0.6)]),
                Score::new(1.5, &[(House, 1.6), (Road, 0.9)]),
            ),
            Clinic => profile(
                Score::new(1.4, &[(House, 0.9)]),
                Score::new(1.2, &[(Road, 0.7)]),
            ),
            Market => profile(
                Score::new(0.9, &[(Tree, 0.4)]),
                Score::new(2.2, &[(House, 1.5), (Road, 1.4)]),
            ),
            Theater => profile(
                Score::new(1.9, &[(Park, 0.6)]),
                Score::new(1.7, &[(Road, 1.1)]),
            ),
            Gallery => profile(
                Score::new(1.8, &[(Park, 0.7), (Pond, 0.6)]),
                Score::new(1.0, &[(Road, 0.8)]),
            ),
            Farm => profile(
                Score::new(1.0, &[(Pond, 0.7)]),
                Score::new(1.1, &[(Market, 0.8)]),
            ),
            Fountain => profile(
                Score::new(2.0, &[(Park, 0.9), (House, 0.8)]),
                Score::new(0.8, &[]),
            ),
            Temple => profile(
                Score::new(2.1, &[(Tree, 0.8), (Pond, 0.8)]),
                Score::new(0.7, &[]),
            ),
            Workshop => profile(
                Score::new(0.8, &[(House, 0.5)]),
                Score::new(1.8, &[(Road, 1.2)]),
            ),
            Inn => profile(
                Score::new(1.5, &[(Park, 0.5)]),
                Score::new(1.6, &[(Shop, 0.7), (Road, 1.0)]),
            ),
            Observatory => profile(
                Score::new(2.0, &[(Park, 0.4)]),
                Score::new(0.9, &[(Road, 0.7)]),
            ),
            Road => profile(
                Score::ZERO,
                Score::new(0.0, &[(House, 0.6), (Shop, 0.8), (Cafe, 0.7), (Library, 0.5)]),
            ),
        }
    }

    /// Residents contributed by one tile of this kind.
    pub fn population_weight(self) -> f64 {
        match self {
            House => 3.8,
            Shop => 1.1,
            Park => 0.5,
            Tree => 0.25,
            Pond => 0.35,
            Cafe => 1.4,
            Library => 1.2,
            Shrine => 0.9,
            Bakery => 1.1,
            School => 1.5,
            Clinic => 1.2,
            Market => 1.7,
            Theater => 1.4,
            Gallery => 1.2,
            Farm => 1.0,
            Fountain => 0.8,
            Temple => 1.0,
            Workshop => 1.3,
            Inn => 1.4,
            Observatory => 0.9,
            Road => 0.12,
        }
    }
}
