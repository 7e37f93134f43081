use std::f64::consts::PI;

use oasis::orbits::KeplerSolver;
use oasis::orbits::kepler::{DEFAULT_FIXED_POINT_ITERATIONS, kepler_residual};

#[test]
fn default_solver_is_ten_fixed_point_updates() {
    assert_eq!(
        KeplerSolver::default(),
        KeplerSolver::FixedPoint { iterations: 10 }
    );
    assert_eq!(DEFAULT_FIXED_POINT_ITERATIONS, 10);
}

#[test]
fn fixed_point_matches_hand_rolled_loop() {
    let (m, e) = (1.0_f64, 0.1_f64);
    let mut expected = m;
    for _ in 0..10 {
        expected = m + e * expected.sin();
    }
    let solution = KeplerSolver::default().solve(m, e);
    assert_eq!(solution.eccentric_anomaly.to_bits(), expected.to_bits());
    assert_eq!(solution.iterations, 10);
    assert!(solution.converged, "residual {}", solution.residual);
}

#[test]
fn zero_iterations_returns_mean_anomaly() {
    let solver = KeplerSolver::FixedPoint { iterations: 0 };
    assert_eq!(solver.eccentric_anomaly(2.5, 0.3), 2.5);
}

#[test]
fn circular_orbit_anomalies_coincide() {
    for &m in &[-2.0, 0.0, 0.4, PI, 6.0] {
        assert_eq!(KeplerSolver::default().eccentric_anomaly(m, 0.0), m);
        let newton = KeplerSolver::newton().eccentric_anomaly(m, 0.0);
        assert!((newton - m).abs() < 1e-15);
    }
}

#[test]
fn fixed_point_reports_unconverged_high_eccentricity() {
    let solution = KeplerSolver::default().solve(0.3, 0.95);
    assert!(!solution.converged);
    assert!(solution.residual > 1e-6, "residual {}", solution.residual);
}

#[test]
fn newton_converges_across_eccentricities() {
    let solver = KeplerSolver::newton();
    for &e in &[0.0, 0.01, 0.3, 0.7, 0.8, 0.95, 0.99] {
        for k in 0..16 {
            let m = -PI + k as f64 * (2.0 * PI / 16.0);
            let solution = solver.solve(m, e);
            assert!(
                solution.residual < 1e-10,
                "M = {m}, e = {e}: residual {}",
                solution.residual
            );
            assert!(solution.iterations <= 50);
        }
    }
}

#[test]
fn newton_agrees_with_fixed_point_when_both_converge() {
    let fixed = KeplerSolver::FixedPoint { iterations: 200 };
    let newton = KeplerSolver::newton();
    for &(m, e) in &[(0.5, 0.05), (2.0, 0.2), (4.1, 0.0021)] {
        let a = fixed.eccentric_anomaly(m, e);
        let b = newton.eccentric_anomaly(m, e);
        assert!((a - b).abs() < 1e-12, "M = {m}, e = {e}: {a} vs {b}");
    }
}

#[test]
fn newton_respects_iteration_cap() {
    let solver = KeplerSolver::Newton {
        tolerance: 0.0,
        max_iterations: 3,
    };
    let solution = solver.solve(1.0, 0.5);
    assert_eq!(solution.iterations, 3);
}

#[test]
fn residual_is_zero_on_exact_solution() {
    assert_eq!(kepler_residual(0.0, 0.0, 0.7), 0.0);
    assert!((kepler_residual(PI, PI, 0.5)).abs() < 1e-15);
}

#[test]
fn nan_input_propagates() {
    assert!(KeplerSolver::default().eccentric_anomaly(f64::NAN, 0.1).is_nan());
    let solution = KeplerSolver::newton().solve(f64::NAN, 0.1);
    assert!(solution.eccentric_anomaly.is_nan());
    assert!(!solution.converged);
    assert_eq!(solution.iterations, 1);
}
