//! Scripted layout painted by the headless demo.

use simulation::tiles::TileType;
use simulation::town_actions::TownAction;

fn paint(x: i32, y: i32, tile: TileType, radius: u32) -> TownAction {
    TownAction::PaintWith { x, y, tile, radius }
}

/// A small riverside neighbourhood: a main street with shops, houses
/// around a park and pond, and a quiet temple corner.
pub fn demo_layout() -> Vec<TownAction> {
    let mut actions = vec![TownAction::FitViewport {
        width: 1280.0,
        height: 720.0,
    }];

    // Main street.
    actions.extend((2..28).map(|x| paint(x, 8, TileType::Road, 1)));
    actions.extend((2..8).map(|y| paint(14, y, TileType::Road, 1)));

    // Houses north of the street around a park.
    actions.push(paint(6, 5, TileType::House, 2));
    actions.push(paint(6, 5, TileType::Park, 1));
    actions.push(paint(10, 4, TileType::House, 2));
    actions.push(paint(10, 2, TileType::Pond, 1));

    // Shops and services along the street.
    for (x, tile) in [
        (4, TileType::Shop),
        (7, TileType::Cafe),
        (10, TileType::Bakery),
        (16, TileType::Market),
        (19, TileType::Library),
        (22, TileType::Theater),
        (25, TileType::Inn),
    ] {
        actions.push(paint(x, 7, tile, 1));
        actions.push(paint(x, 9, TileType::House, 1));
    }

    // South side: school, clinic, workshop and a farm by the river.
    actions.push(paint(5, 11, TileType::School, 1));
    actions.push(paint(8, 11, TileType::Clinic, 1));
    actions.push(paint(12, 11, TileType::Workshop, 1));
    actions.push(paint(18, 12, TileType::Pond, 2));
    actions.push(paint(21, 12, TileType::Farm, 1));

    // Quiet corner.
    actions.push(paint(24, 3, TileType::Tree, 2));
    actions.push(paint(24, 3, TileType::Temple, 1));
    actions.push(paint(20, 3, TileType::Shrine, 1));
    actions.push(paint(20, 4, TileType::Fountain, 1));
    actions.push(paint(17, 3, TileType::Gallery, 1));
    actions.push(paint(27, 1, TileType::Observatory, 1));

    // A mistake, undone.
    actions.push(paint(12, 13, TileType::Market, 3));
    actions.push(TownAction::Undo);

    actions
}
