//! Random source used for terrain, wind and placement.
//!
//! Every `rand::Rng` is a `RandomSource`, so callers pass `thread_rng()` in
//! play and a seeded `Pcg32` (or a `ScriptedRandom`) under test.

use std::collections::VecDeque;

use rand::Rng;

pub trait RandomSource {
    /// Integer in `low..=high`.
    fn int_in(&mut self, low: i32, high: i32) -> i32;
    /// Float in `low..=high`.
    fn float_in(&mut self, low: f64, high: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        self.gen_range(low..=high)
    }

    fn float_in(&mut self, low: f64, high: f64) -> f64 {
        self.gen_range(low..=high)
    }
}

/// Replays queued values in order.
///
/// Each value is clamped into the requested range; an exhausted queue yields
/// the low bound, so a script only needs to cover the draws a test cares about.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<i32>,
    floats: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(ints: impl IntoIterator<Item = i32>, floats: impl IntoIterator<Item = f64>) -> Self {
        Self {
            ints: ints.into_iter().collect(),
            floats: floats.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        self.ints.pop_front().map_or(low, |v| v.clamp(low, high))
    }

    fn float_in(&mut self, low: f64, high: f64) -> f64 {
        self.floats.pop_front().map_or(low, |v| v.clamp(low, high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn scripted_replays_in_order() {
        let mut r = ScriptedRandom::new([45, 60], [0.25]);
        assert_eq!(r.int_in(40, 70), 45);
        assert_eq!(r.int_in(40, 70), 60);
        assert_eq!(r.float_in(-1.0, 1.0), 0.25);
    }

    #[test]
    fn scripted_clamps_and_falls_back_to_low() {
        let mut r = ScriptedRandom::new([500], [-3.0]);
        assert_eq!(r.int_in(150, 400), 400);
        assert_eq!(r.float_in(-1.0, 1.0), -1.0);
        // exhausted
        assert_eq!(r.int_in(40, 70), 40);
        assert_eq!(r.float_in(-0.5, 1.0), -0.5);
    }

    #[test]
    fn rng_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let i = rng.int_in(40, 70);
            assert!((40..=70).contains(&i));
            let f = rng.float_in(-1.0, 1.0);
            assert!((-1.0..=1.0).contains(&f));
        }
    }
}
