use gorillas::entities::{Position, Projectile};
use gorillas::physics::*;

// ── hit_test ──────────────────────────────────────────────────────────────────

#[test]
fn hit_inside_actor_square() {
    let gorilla = Position::new(300.0, 250.0);
    assert!(hit_test(Position::new(310.0, 260.0), gorilla));
    assert!(hit_test(Position::new(300.5, 250.5), gorilla));
    assert!(hit_test(Position::new(319.9, 269.9), gorilla));
}

#[test]
fn hit_box_edges_are_exclusive() {
    let gorilla = Position::new(300.0, 250.0);
    // Exactly on the corner is outside under the strict comparison.
    assert!(!hit_test(Position::new(300.0, 250.0), gorilla));
    assert!(!hit_test(Position::new(299.0, 250.0), gorilla));
    assert!(!hit_test(Position::new(320.0, 270.0), gorilla));
    assert!(!hit_test(Position::new(310.0, 270.0), gorilla));
    assert!(!hit_test(Position::new(320.0, 260.0), gorilla));
}

#[test]
fn miss_outside_actor_square() {
    let gorilla = Position::new(300.0, 250.0);
    assert!(!hit_test(Position::new(350.0, 260.0), gorilla));
    assert!(!hit_test(Position::new(310.0, 200.0), gorilla));
}

// ── launch & step ─────────────────────────────────────────────────────────────

#[test]
fn launch_45_degrees_splits_speed_evenly() {
    let p = launch(Position::new(110.0, 510.0), 45.0, 20.0, 0.0, 1.0);
    let expected = 20.0 * std::f64::consts::FRAC_1_SQRT_2;
    assert!((p.vx - expected).abs() < 1e-9);
    assert!((p.vy + expected).abs() < 1e-9);
}

#[test]
fn direction_signs() {
    assert_eq!(direction_for(0), 1.0);
    assert_eq!(direction_for(1), -1.0);
}

#[test]
fn trajectory_peaks_then_falls() {
    let mut p = launch(Position::new(0.0, 500.0), 60.0, 10.0, 0.0, 1.0);
    let mut min_y = p.y;
    for _ in 0..100 {
        p = step(&p, 0.5);
        min_y = min_y.min(p.y);
    }
    assert!(min_y < 500.0);
    assert!(p.y > 500.0);
    assert!(p.vy > 0.0);
}

#[test]
fn wind_never_changes_during_flight() {
    let p0 = launch(Position::new(0.0, 0.0), 30.0, 10.0, 0.8, 1.0);
    let mut p = p0;
    for _ in 0..50 {
        p = step(&p, 0.5);
        assert_eq!(p.vx, p0.vx);
    }
}

#[test]
fn zero_gravity_moves_in_a_straight_line() {
    let p = Projectile { x: 0.0, y: 0.0, vx: 3.0, vy: 4.0 };
    let q = step(&step(&p, 0.0), 0.0);
    assert_eq!((q.x, q.y), (6.0, 8.0));
}
