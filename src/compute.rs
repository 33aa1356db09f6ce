//! Match state machine.
//!
//! Every public function takes an immutable reference to the current
//! `MatchState` (and, where needed, a random source) and returns a brand-new
//! `MatchState`.  Side effects are limited to the injected random source and
//! log output.
//!
//! Phases: `AwaitingInput` → `InFlight` → (`RoundResolving` after a scoring
//! hit) → `AwaitingInput`, with `GameOver` terminal.

use crate::config::{GameConfig, ACTOR_SIZE};
use crate::entities::{MatchState, Phase, Position, RenderState, TickOutcome};
use crate::error::{ConfigError, ThrowError, ThrowField};
use crate::physics;
use crate::random::RandomSource;
use crate::terrain::{generate_buildings, place_actors};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh match: round 0, player 1 to throw, scores 0:0.
pub fn initialize(config: GameConfig, rng: &mut impl RandomSource) -> Result<MatchState, ConfigError> {
    config.validate()?;
    let wind = draw_wind(&config, rng);
    let buildings = generate_buildings(&config, rng);
    let actors = place_actors(&buildings);
    log::info!(
        "new match on {}x{} field, {} buildings, wind {:.2}",
        config.play_width,
        config.play_height,
        buildings.len(),
        wind
    );
    Ok(MatchState {
        config,
        buildings,
        actors,
        scores: [0, 0],
        turn: 0,
        wind,
        phase: Phase::AwaitingInput,
        round: 0,
        frame: 0,
    })
}

/// New skyline and actor positions.  Scores, turn and wind carry over.
pub fn reset_round(state: &MatchState, rng: &mut impl RandomSource) -> MatchState {
    let buildings = generate_buildings(&state.config, rng);
    let actors = place_actors(&buildings);
    let phase = match state.phase {
        Phase::GameOver { winner } => Phase::GameOver { winner },
        _ => Phase::AwaitingInput,
    };
    log::info!("round {} reset with {} buildings", state.round, buildings.len());
    MatchState {
        buildings,
        actors,
        phase,
        ..state.clone()
    }
}

// ── Input-driven transitions (pure) ──────────────────────────────────────────

/// Parse the raw text of the two input fields and throw.
pub fn submit_throw(state: &MatchState, angle: &str, speed: &str) -> Result<MatchState, ThrowError> {
    let angle = parse_field(ThrowField::Angle, angle)?;
    let speed = parse_field(ThrowField::Speed, speed)?;
    throw_values(state, angle, speed)
}

/// Launch from the active actor.  Any numeric angle and speed is accepted,
/// including negative or extreme values.
pub fn throw_values(state: &MatchState, angle: f64, speed: f64) -> Result<MatchState, ThrowError> {
    match state.phase {
        Phase::AwaitingInput => {}
        Phase::InFlight(_) => return Err(reject(ThrowError::InFlight)),
        Phase::RoundResolving { .. } => return Err(reject(ThrowError::RoundResolving)),
        Phase::GameOver { .. } => return Err(reject(ThrowError::GameOver)),
    }

    let thrower = state.thrower().position;
    let origin = Position::new(thrower.x + ACTOR_SIZE / 2.0, thrower.y + ACTOR_SIZE / 2.0);
    let projectile = physics::launch(
        origin,
        angle,
        speed,
        state.wind,
        physics::direction_for(state.turn),
    );
    log::debug!(
        "player {} throws: angle {angle}, speed {speed}, wind {:.2}",
        state.turn + 1,
        state.wind
    );
    Ok(MatchState {
        phase: Phase::InFlight(projectile),
        ..state.clone()
    })
}

fn parse_field(field: ThrowField, input: &str) -> Result<f64, ThrowError> {
    input.trim().parse::<f64>().map_err(|_| {
        reject(ThrowError::InvalidNumber {
            field,
            input: input.to_string(),
        })
    })
}

fn reject(err: ThrowError) -> ThrowError {
    log::warn!("throw rejected: {err}");
    err
}

// ── Per-tick advance ─────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  Call repeatedly; the outcome says
/// what changed.  A finished match is frozen and keeps answering `GameOver`.
pub fn tick(state: &MatchState, rng: &mut impl RandomSource) -> (MatchState, TickOutcome) {
    let frame = state.frame + 1;

    match &state.phase {
        Phase::GameOver { winner } => (state.clone(), TickOutcome::GameOver { winner: *winner }),

        Phase::AwaitingInput => (
            MatchState {
                frame,
                ..state.clone()
            },
            TickOutcome::Idle,
        ),

        Phase::RoundResolving {
            scorer,
            ticks_remaining,
        } => {
            if *ticks_remaining <= 1 {
                let next = reset_round(state, rng);
                (MatchState { frame, ..next }, TickOutcome::RoundReset)
            } else {
                let next = MatchState {
                    phase: Phase::RoundResolving {
                        scorer: *scorer,
                        ticks_remaining: ticks_remaining - 1,
                    },
                    frame,
                    ..state.clone()
                };
                (next, TickOutcome::Idle)
            }
        }

        Phase::InFlight(projectile) => {
            let projectile = physics::step(projectile, state.config.gravity);

            // Only the opponent can be hit; checked before the bounds so a
            // hit on the way out still counts.
            if physics::hit_test(projectile.position(), state.opponent().position) {
                return score_hit(state, frame, rng);
            }

            if physics::out_of_bounds(&projectile, state.config.play_width, state.config.play_height) {
                log::debug!(
                    "player {} missed at ({:.1}, {:.1})",
                    state.turn + 1,
                    projectile.x,
                    projectile.y
                );
                let next = end_round(state, frame, Phase::AwaitingInput, rng);
                return (next, TickOutcome::Miss);
            }

            let next = MatchState {
                phase: Phase::InFlight(projectile),
                frame,
                ..state.clone()
            };
            (next, TickOutcome::Continuing(projectile.position()))
        }
    }
}

fn score_hit(state: &MatchState, frame: u64, rng: &mut impl RandomSource) -> (MatchState, TickOutcome) {
    let scorer = state.turn;
    let mut scores = state.scores;
    scores[scorer] += 1;
    let score = scores[scorer];

    if score >= state.config.winning_score {
        log::info!("player {} wins {}:{}", scorer + 1, scores[0], scores[1]);
        let next = MatchState {
            scores,
            phase: Phase::GameOver { winner: scorer },
            frame,
            ..state.clone()
        };
        return (next, TickOutcome::GameOver { winner: scorer });
    }

    log::info!("hit! player {} now has {} points", scorer + 1, score);
    let resolving = Phase::RoundResolving {
        scorer,
        ticks_remaining: state.config.reset_delay_ticks(),
    };
    let next = end_round(&MatchState { scores, ..state.clone() }, frame, resolving, rng);
    (next, TickOutcome::Hit { scorer, score })
}

/// Hand the turn to the other player under fresh wind.
fn end_round(state: &MatchState, frame: u64, phase: Phase, rng: &mut impl RandomSource) -> MatchState {
    MatchState {
        turn: 1 - state.turn,
        wind: draw_wind(&state.config, rng),
        phase,
        round: state.round + 1,
        frame,
        ..state.clone()
    }
}

fn draw_wind(config: &GameConfig, rng: &mut impl RandomSource) -> f64 {
    rng.float_in(-config.wind_limit, config.wind_limit)
}

// ── Views ────────────────────────────────────────────────────────────────────

pub fn status_text(state: &MatchState) -> String {
    match state.phase {
        Phase::GameOver { winner } => format!("Player {} has won the game!", winner + 1),
        Phase::RoundResolving { scorer, .. } => {
            format!("Hit! Player {} now has {} points.", scorer + 1, state.scores[scorer])
        }
        Phase::AwaitingInput | Phase::InFlight(_) => format!(
            "Player {}'s turn - Score: P1={} | P2={} - Wind: {:.2}",
            state.turn + 1,
            state.scores[0],
            state.scores[1],
            state.wind
        ),
    }
}

pub fn render_state(state: &MatchState) -> RenderState {
    RenderState {
        buildings: state.buildings.clone(),
        actors: [state.actors[0].position, state.actors[1].position],
        projectile: state.projectile().map(|p| p.position()),
        status_text: status_text(state),
        wind: state.wind,
        scores: state.scores,
        turn: state.turn,
        is_running: state.is_running(),
    }
}
