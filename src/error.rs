use std::fmt;

use thiserror::Error;

/// Which of the two throw inputs failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrowField {
    Angle,
    Speed,
}

impl fmt::Display for ThrowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThrowField::Angle => write!(f, "angle"),
            ThrowField::Speed => write!(f, "speed"),
        }
    }
}

/// A throw that was not accepted.  None of these mutate the match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ThrowError {
    #[error("please enter valid numbers ({field} '{input}' is not a number)")]
    InvalidNumber { field: ThrowField, input: String },
    #[error("the game is over")]
    GameOver,
    #[error("a banana is already in flight")]
    InFlight,
    /// A non-winning hit does not go straight back to awaiting input: throws
    /// are refused for the `reset_delay` that follows it, until the skyline
    /// is rebuilt and `tick` reports `RoundReset`.
    #[error("the next round is being set up")]
    RoundResolving,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Too narrow to guarantee a building for each actor.
    #[error("play width {width} is below the minimum of {min}")]
    FieldTooNarrow { width: f64, min: f64 },
    /// Wider or taller than the building coordinates can address.
    #[error("play field {width}x{height} exceeds the maximum of {max}")]
    FieldTooLarge { width: f64, height: f64, max: f64 },
    #[error("play height must be positive, got {0}")]
    NonPositiveHeight(f64),
    /// Zero or upward gravity would let a steep throw fly forever.
    #[error("gravity must be positive and finite, got {0}")]
    InvalidGravity(f64),
    #[error("wind limit must be finite and zero or positive, got {0}")]
    InvalidWindLimit(f64),
    #[error("tick interval must be non-zero")]
    InvalidTickInterval,
}
