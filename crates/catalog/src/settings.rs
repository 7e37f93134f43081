//! Conversion of loaded settings into solver options.

use oasis_config::{AnomalyUnitConfig, KeplerMethod, SolverConfig};
use oasis_orbits::{AnomalyUnit, KeplerSolver, PositionOptions};

/// Position options described by a `[solver]` settings section.
pub fn position_options(config: &SolverConfig) -> PositionOptions {
    let solver = match config.method {
        KeplerMethod::FixedPoint => KeplerSolver::FixedPoint {
            iterations: config.iterations,
        },
        KeplerMethod::Newton => KeplerSolver::Newton {
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
        },
    };
    let mean_anomaly_unit = match config.mean_anomaly_unit {
        AnomalyUnitConfig::Radians => AnomalyUnit::Radians,
        AnomalyUnitConfig::Degrees => AnomalyUnit::Degrees,
    };
    PositionOptions {
        solver,
        mean_anomaly_unit,
    }
}
