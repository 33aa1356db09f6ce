//! Field dimensions and tuning constants.
//!
//! The defaults reproduce the classic 800×600 field.  `GameConfig::validate`
//! is the single place where the terrain/actor-placement coupling is checked.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::error::ConfigError;

pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 600.0;
pub const GRAVITY: f64 = 0.5;
pub const WINNING_SCORE: u32 = 10;

/// Wind is drawn uniformly from `-WIND_LIMIT..=WIND_LIMIT` every round.
pub const WIND_LIMIT: f64 = 1.0;

pub const MIN_BUILDING_WIDTH: i32 = 40;
pub const MAX_BUILDING_WIDTH: i32 = 70;
pub const BUILDING_WIDTHS: RangeInclusive<i32> = MIN_BUILDING_WIDTH..=MAX_BUILDING_WIDTH;
pub const BUILDING_HEIGHTS: RangeInclusive<i32> = 150..=400;

/// Actors are a fixed square; this is both the drawn size and the hit box.
pub const ACTOR_SIZE: f64 = 20.0;

/// Actors stand on the building at this index from either end.
pub const ACTOR_BUILDING_OFFSET: usize = 2;

/// Fewest buildings a skyline may have so both actor indices exist and differ.
pub const MIN_BUILDINGS: usize = 2 * (ACTOR_BUILDING_OFFSET + 1);

/// Narrowest field that always yields `MIN_BUILDINGS` even when every
/// building is as wide as possible.
pub const MIN_FIELD_WIDTH: f64 = (MIN_BUILDINGS as i32 * MAX_BUILDING_WIDTH) as f64;

/// Largest play width or height; building coordinates are `i32`.
pub const MAX_FIELD_SIZE: f64 = 1_000_000.0;

pub const TICK_INTERVAL: Duration = Duration::from_millis(30);
pub const RESET_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub play_width: f64,
    pub play_height: f64,
    /// Added to vertical velocity every tick (units/tick²).
    pub gravity: f64,
    pub winning_score: u32,
    pub wind_limit: f64,
    pub tick_interval: Duration,
    /// Pause between a scoring hit and the terrain regeneration.
    pub reset_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            play_width: WIDTH,
            play_height: HEIGHT,
            gravity: GRAVITY,
            winning_score: WINNING_SCORE,
            wind_limit: WIND_LIMIT,
            tick_interval: TICK_INTERVAL,
            reset_delay: RESET_DELAY,
        }
    }
}

impl GameConfig {
    /// Default tuning on a field of the given size.
    pub fn with_field(play_width: f64, play_height: f64) -> Self {
        Self {
            play_width,
            play_height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written as a negated >= so NaN widths are rejected too.
        if !(self.play_width >= MIN_FIELD_WIDTH) {
            return Err(ConfigError::FieldTooNarrow {
                width: self.play_width,
                min: MIN_FIELD_WIDTH,
            });
        }
        if !(self.play_height > 0.0) {
            return Err(ConfigError::NonPositiveHeight(self.play_height));
        }
        // Also catches infinities, which would never finish a skyline or a flight.
        if self.play_width > MAX_FIELD_SIZE || self.play_height > MAX_FIELD_SIZE {
            return Err(ConfigError::FieldTooLarge {
                width: self.play_width,
                height: self.play_height,
                max: MAX_FIELD_SIZE,
            });
        }
        if !(self.gravity > 0.0 && self.gravity.is_finite()) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        // The wind is drawn from -limit..=limit, so the span must stay finite.
        if !(self.wind_limit >= 0.0 && (2.0 * self.wind_limit).is_finite()) {
            return Err(ConfigError::InvalidWindLimit(self.wind_limit));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::InvalidTickInterval);
        }
        Ok(())
    }

    /// Number of ticks the post-hit pause lasts, rounded to the nearest tick.
    pub fn reset_delay_ticks(&self) -> u32 {
        let ticks = self.reset_delay.as_secs_f64() / self.tick_interval.as_secs_f64();
        ticks.round().max(1.0) as u32
    }
}
