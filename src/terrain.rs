//! Skyline generation and actor placement.

use crate::config::{
    GameConfig, ACTOR_BUILDING_OFFSET, ACTOR_SIZE, BUILDING_HEIGHTS, BUILDING_WIDTHS,
    MIN_BUILDINGS,
};
use crate::entities::{Actor, Building, Position};
use crate::random::RandomSource;

/// Lay buildings side by side from x=0 until the field width is covered.
///
/// The last building may overhang the right edge.  Callers must have passed
/// `config.validate()`, which guarantees at least `MIN_BUILDINGS`.
pub fn generate_buildings(config: &GameConfig, rng: &mut impl RandomSource) -> Vec<Building> {
    let floor = config.play_height as i32;
    let mut buildings = Vec::new();
    let mut x = 0;
    while f64::from(x) < config.play_width {
        let width = rng.int_in(*BUILDING_WIDTHS.start(), *BUILDING_WIDTHS.end());
        let height = rng.int_in(*BUILDING_HEIGHTS.start(), *BUILDING_HEIGHTS.end());
        buildings.push(Building {
            x,
            y: floor - height,
            width,
            height,
        });
        x += width;
    }
    debug_assert!(
        buildings.len() >= MIN_BUILDINGS,
        "skyline of width {} produced only {} buildings",
        config.play_width,
        buildings.len()
    );
    buildings
}

/// Top-left corner of an actor standing centred on `building`.
pub fn place_actor(building: &Building) -> Position {
    let half = (ACTOR_SIZE / 2.0) as i32;
    Position::new(
        f64::from(building.x + building.width / 2 - half),
        f64::from(building.y) - ACTOR_SIZE,
    )
}

/// Player 0 on the third building from the left, player 1 on the third from
/// the right.
pub fn place_actors(buildings: &[Building]) -> [Actor; 2] {
    let left = &buildings[ACTOR_BUILDING_OFFSET];
    let right = &buildings[buildings.len() - 1 - ACTOR_BUILDING_OFFSET];
    [
        Actor {
            position: place_actor(left),
            owner: 0,
        },
        Actor {
            position: place_actor(right),
            owner: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn actor_sits_centred_above_roof() {
        let b = Building { x: 100, y: 300, width: 55, height: 300 };
        // 100 + 27 - 10
        assert_eq!(place_actor(&b), Position::new(117.0, 280.0));
    }

    #[test]
    fn scripted_skyline_is_exact() {
        let mut rng = ScriptedRandom::new([50, 200, 50, 300], []);
        let config = GameConfig::default();
        let b = generate_buildings(&config, &mut rng);
        assert_eq!(b[0], Building { x: 0, y: 400, width: 50, height: 200 });
        assert_eq!(b[1], Building { x: 50, y: 300, width: 50, height: 300 });
        // exhausted script falls back to the minimum width and height
        assert_eq!(b[2], Building { x: 100, y: 450, width: 40, height: 150 });
    }

    #[test]
    fn actors_use_third_from_each_end() {
        let buildings: Vec<Building> = (0..8)
            .map(|i| Building { x: i * 50, y: 400, width: 50, height: 200 })
            .collect();
        let [a, b] = place_actors(&buildings);
        assert_eq!(a.owner, 0);
        assert_eq!(b.owner, 1);
        assert_eq!(a.position, place_actor(&buildings[2]));
        assert_eq!(b.position, place_actor(&buildings[5]));
    }
}
