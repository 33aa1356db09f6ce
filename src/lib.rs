//! Gorillas - a two-player artillery duel over a random skyline.
//!
//! Core modules:
//! - `compute`: match state machine (throws, ticks, scoring, round resets)
//! - `physics`: projectile launch/step and the actor hit box
//! - `terrain`: skyline generation and actor placement
//! - `random`: pluggable random source
//! - `config`: field dimensions and tuning constants
//!
//! Nothing here touches the terminal; the `gorillas` binary is the only UI.

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod physics;
pub mod random;
pub mod terrain;

pub use config::GameConfig;
pub use error::{ConfigError, ThrowError, ThrowField};
pub use random::{RandomSource, ScriptedRandom};
