//! Solvers for Kepler's equation `M = E - e·sin(E)`.
//!
//! Two strategies are offered. The fixed-point iteration reproduces the
//! dashboard's historical behaviour bit for bit (seed `E = M`, a fixed number
//! of `E = M + e·sin(E)` updates, no convergence test). Newton's method is the
//! stricter alternative, stopping on a step-size tolerance or an iteration cap.
//!
//! Neither strategy validates its input: both are total over `f64` and may
//! return non-finite values for degenerate eccentricities.

/// Iteration count used by the dashboard's original fixed-point loop.
pub const DEFAULT_FIXED_POINT_ITERATIONS: usize = 10;
/// Default step tolerance (radians) for Newton's method.
pub const DEFAULT_NEWTON_TOLERANCE: f64 = 1e-12;
/// Default iteration cap for Newton's method.
pub const DEFAULT_NEWTON_MAX_ITERATIONS: usize = 50;

/// Residual below which a solution is reported as converged.
const CONVERGED_RESIDUAL: f64 = 1e-12;

/// Strategy used to recover the eccentric anomaly from the mean anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeplerSolver {
    /// `E = M + e·sin(E)` repeated exactly `iterations` times.
    FixedPoint { iterations: usize },
    /// Newton–Raphson on `f(E) = E - e·sin(E) - M`.
    Newton {
        tolerance: f64,
        max_iterations: usize,
    },
}

impl Default for KeplerSolver {
    fn default() -> Self {
        KeplerSolver::FixedPoint {
            iterations: DEFAULT_FIXED_POINT_ITERATIONS,
        }
    }
}

/// Outcome of a Kepler solve, including diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: f64,
    pub iterations: usize,
    /// `|E - e·sin(E) - M|` at the returned anomaly.
    pub residual: f64,
    pub converged: bool,
}

impl KeplerSolver {
    /// Newton's method with the default tolerance and iteration cap.
    pub fn newton() -> Self {
        KeplerSolver::Newton {
            tolerance: DEFAULT_NEWTON_TOLERANCE,
            max_iterations: DEFAULT_NEWTON_MAX_ITERATIONS,
        }
    }

    /// Eccentric anomaly (radians) for the given mean anomaly (radians) and eccentricity.
    pub fn eccentric_anomaly(&self, mean_anomaly_rad: f64, eccentricity: f64) -> f64 {
        self.solve(mean_anomaly_rad, eccentricity).eccentric_anomaly
    }

    /// Solve Kepler's equation and report iteration diagnostics.
    pub fn solve(&self, mean_anomaly_rad: f64, eccentricity: f64) -> KeplerSolution {
        let (eccentric_anomaly, iterations) = match *self {
            KeplerSolver::FixedPoint { iterations } => (
                fixed_point(mean_anomaly_rad, eccentricity, iterations),
                iterations,
            ),
            KeplerSolver::Newton {
                tolerance,
                max_iterations,
            } => newton(mean_anomaly_rad, eccentricity, tolerance, max_iterations),
        };
        let residual = kepler_residual(eccentric_anomaly, mean_anomaly_rad, eccentricity);
        KeplerSolution {
            eccentric_anomaly,
            iterations,
            residual,
            converged: residual < CONVERGED_RESIDUAL,
        }
    }
}

/// Absolute residual of Kepler's equation at `E`.
pub fn kepler_residual(eccentric_anomaly: f64, mean_anomaly_rad: f64, eccentricity: f64) -> f64 {
    (eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly_rad).abs()
}

fn fixed_point(mean_anomaly: f64, eccentricity: f64, iterations: usize) -> f64 {
    let mut e_anom = mean_anomaly;
    for _ in 0..iterations {
        e_anom = mean_anomaly + eccentricity * e_anom.sin();
    }
    e_anom
}

fn newton(
    mean_anomaly: f64,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: usize,
) -> (f64, usize) {
    // Danby's starter; E = M converges poorly near periapsis at high eccentricity.
    let mut e_anom = if eccentricity < 0.8 {
        mean_anomaly
    } else {
        mean_anomaly + 0.85 * eccentricity * mean_anomaly.sin().signum()
    };
    let mut steps = 0;
    while steps < max_iterations {
        let f = e_anom - eccentricity * e_anom.sin() - mean_anomaly;
        let f_prime = 1.0 - eccentricity * e_anom.cos();
        let delta = f / f_prime;
        e_anom -= delta;
        steps += 1;
        if delta.is_nan() || delta.abs() < tolerance {
            break;
        }
    }
    (e_anom, steps)
}
