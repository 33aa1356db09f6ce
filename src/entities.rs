//! All match entity types: pure data, no logic.

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ── Skyline ───────────────────────────────────────────────────────────────────

/// One rectangle of the skyline, in field units.
///
/// `y` is the top edge (screen coordinates grow downward); the bottom edge
/// always rests on the floor of the field, so `y + height == play_height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Building {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Building {
    /// First x past the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}

// ── Actors & projectile ───────────────────────────────────────────────────────

/// A player's avatar.  `position` is the top-left corner of its square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Actor {
    pub position: Position,
    pub owner: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Projectile {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

// ── Match ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    /// Waiting for the active player's throw.
    AwaitingInput,
    /// The only projectile in the match is flying.
    InFlight(Projectile),
    /// A scoring hit landed; terrain regenerates when the countdown ends.
    RoundResolving { scorer: usize, ticks_remaining: u32 },
    GameOver { winner: usize },
}

/// Result of one simulation tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Nothing is flying.
    Idle,
    Continuing(Position),
    Miss,
    Hit { scorer: usize, score: u32 },
    GameOver { winner: usize },
    /// Terrain and actors were regenerated; everything must be redrawn.
    RoundReset,
}

/// The entire match state.  Cloneable so the pure update functions in
/// `compute` can return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchState {
    pub config: crate::config::GameConfig,
    pub buildings: Vec<Building>,
    /// Indexed by player: `actors[0]` throws rightward, `actors[1]` leftward.
    pub actors: [Actor; 2],
    pub scores: [u32; 2],
    /// Index of the player whose turn it is (0 or 1).
    pub turn: usize,
    /// Horizontal velocity bias for every throw this round.
    pub wind: f64,
    pub phase: Phase,
    /// Completed rounds (hits and misses).
    pub round: u32,
    pub frame: u64,
}

impl MatchState {
    /// False once a player has won; no further throws are accepted.
    pub fn is_running(&self) -> bool {
        !matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn projectile(&self) -> Option<&Projectile> {
        match &self.phase {
            Phase::InFlight(p) => Some(p),
            _ => None,
        }
    }

    pub fn thrower(&self) -> &Actor {
        &self.actors[self.turn]
    }

    pub fn opponent(&self) -> &Actor {
        &self.actors[1 - self.turn]
    }
}

/// Everything the UI needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    pub buildings: Vec<Building>,
    pub actors: [Position; 2],
    pub projectile: Option<Position>,
    pub status_text: String,
    pub wind: f64,
    pub scores: [u32; 2],
    pub turn: usize,
    pub is_running: bool,
}
