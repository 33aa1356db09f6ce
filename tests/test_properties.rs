use proptest::prelude::*;

use gorillas::compute::{initialize, submit_throw, tick};
use gorillas::config::{BUILDING_HEIGHTS, BUILDING_WIDTHS};
use gorillas::entities::{Position, TickOutcome};
use gorillas::physics::{launch, step};
use gorillas::terrain::generate_buildings;
use gorillas::{GameConfig, ScriptedRandom};

use rand::SeedableRng;
use rand_pcg::Pcg32;

proptest! {
    #[test]
    fn skyline_is_contiguous_and_in_range(seed in any::<u64>(), width in 420.0f64..2000.0) {
        let config = GameConfig::with_field(width, 600.0);
        let b = generate_buildings(&config, &mut Pcg32::seed_from_u64(seed));
        prop_assert!(b.len() >= 6);
        prop_assert_eq!(b[0].x, 0);
        for pair in b.windows(2) {
            prop_assert_eq!(pair[0].right(), pair[1].x);
        }
        for building in &b {
            prop_assert!(BUILDING_WIDTHS.contains(&building.width));
            prop_assert!(BUILDING_HEIGHTS.contains(&building.height));
        }
        prop_assert!(f64::from(b[b.len() - 1].right()) >= width);
    }

    #[test]
    fn step_is_deterministic_and_vy_never_decreases(
        angle in -360.0f64..360.0,
        speed in 0.0f64..100.0,
        wind in -1.0f64..=1.0,
        ticks in 1usize..300,
    ) {
        let origin = Position::new(400.0, 300.0);
        let mut a = launch(origin, angle, speed, wind, 1.0);
        let mut b = launch(origin, angle, speed, wind, 1.0);
        for _ in 0..ticks {
            let next = step(&a, 0.5);
            prop_assert!(next.vy >= a.vy);
            a = next;
            b = step(&b, 0.5);
        }
        prop_assert_eq!(a, b);
    }

    #[test]
    fn any_valid_throw_ends_with_one_turn_change(
        seed in any::<u64>(),
        angle in 0.0f64..180.0,
        speed in 1.0f64..40.0,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let start = initialize(GameConfig::default(), &mut rng).unwrap();
        let mut s = submit_throw(&start, &angle.to_string(), &speed.to_string()).unwrap();
        let mut script = ScriptedRandom::default();
        let outcome = loop {
            let (next, o) = tick(&s, &mut script);
            s = next;
            match o {
                TickOutcome::Continuing(_) => {
                    prop_assert_eq!(s.turn, start.turn);
                }
                other => break other,
            }
        };
        prop_assert_eq!(s.turn, 1 - start.turn);
        prop_assert_eq!(s.round, 1);
        match outcome {
            TickOutcome::Miss => {
                prop_assert_eq!(s.scores, [0, 0]);
            }
            TickOutcome::Hit { scorer, score } => {
                prop_assert_eq!(scorer, start.turn);
                prop_assert_eq!(score, 1);
            }
            other => {
                prop_assert!(false, "unexpected outcome {:?}", other);
            }
        }
    }
}
