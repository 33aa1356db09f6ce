//! Projectile flight and the actor hit box.
//!
//! Everything here is a pure function of its arguments; the match state
//! machine decides what a hit or an exit means.

use crate::config::ACTOR_SIZE;
use crate::entities::{Position, Projectile};

/// Horizontal sign of a player's throws: player 0 throws right, player 1 left.
pub fn direction_for(player: usize) -> f64 {
    if player == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Initial state of a throw.  `angle_degrees` is measured up from the
/// horizontal in the thrower's facing direction; wind adds straight to vx.
pub fn launch(origin: Position, angle_degrees: f64, speed: f64, wind: f64, direction: f64) -> Projectile {
    let rad = angle_degrees.to_radians();
    Projectile {
        x: origin.x,
        y: origin.y,
        vx: direction * speed * rad.cos() + wind,
        vy: -speed * rad.sin(),
    }
}

/// Advance one tick: gravity first, then move by the new velocity.
pub fn step(p: &Projectile, gravity: f64) -> Projectile {
    let vy = p.vy + gravity;
    Projectile {
        x: p.x + p.vx,
        y: p.y + vy,
        vx: p.vx,
        vy,
    }
}

/// Past the floor or either side wall.  Flying above the top edge is fine;
/// gravity brings the projectile back.  A non-finite position (from a `nan`
/// or `inf` throw) never lands anywhere, so it counts as gone.
pub fn out_of_bounds(p: &Projectile, width: f64, height: f64) -> bool {
    !(p.x.is_finite() && p.y.is_finite()) || p.y > height || p.x < 0.0 || p.x > width
}

/// Strictly inside the `ACTOR_SIZE` square whose top-left corner is `actor`.
pub fn hit_test(pos: Position, actor: Position) -> bool {
    actor.x < pos.x && pos.x < actor.x + ACTOR_SIZE && actor.y < pos.y && pos.y < actor.y + ACTOR_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn launch_flat_throw_has_no_vertical_speed() {
        let p = launch(Position::new(10.0, 20.0), 0.0, 15.0, 0.0, 1.0);
        assert!((p.vx - 15.0).abs() < EPS);
        assert!(p.vy.abs() < EPS);
        assert_eq!((p.x, p.y), (10.0, 20.0));
    }

    #[test]
    fn launch_straight_up_only_wind_moves_sideways() {
        let p = launch(Position::new(0.0, 0.0), 90.0, 10.0, 0.5, -1.0);
        assert!((p.vx - 0.5).abs() < EPS);
        assert!((p.vy + 10.0).abs() < EPS);
    }

    #[test]
    fn launch_mirrors_for_player_two() {
        let a = launch(Position::new(0.0, 0.0), 30.0, 12.0, 0.0, direction_for(0));
        let b = launch(Position::new(0.0, 0.0), 30.0, 12.0, 0.0, direction_for(1));
        assert!((a.vx + b.vx).abs() < EPS);
        assert!((a.vy - b.vy).abs() < EPS);
    }

    #[test]
    fn step_applies_gravity_before_moving() {
        let p = Projectile { x: 0.0, y: 100.0, vx: 2.0, vy: -1.0 };
        let q = step(&p, 0.5);
        assert_eq!(q, Projectile { x: 2.0, y: 99.5, vx: 2.0, vy: -0.5 });
    }

    #[test]
    fn exits_on_floor_and_sides_not_ceiling() {
        let at = |x, y| Projectile { x, y, vx: 0.0, vy: 0.0 };
        assert!(out_of_bounds(&at(400.0, 600.5), 800.0, 600.0));
        assert!(out_of_bounds(&at(-0.1, 300.0), 800.0, 600.0));
        assert!(out_of_bounds(&at(800.1, 300.0), 800.0, 600.0));
        assert!(!out_of_bounds(&at(400.0, -500.0), 800.0, 600.0));
        assert!(!out_of_bounds(&at(800.0, 600.0), 800.0, 600.0));
        assert!(out_of_bounds(&at(f64::NAN, 300.0), 800.0, 600.0));
    }
}
