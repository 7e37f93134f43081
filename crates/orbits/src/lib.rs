//! Orbit utilities for the tracking dashboard: Keplerian elements, Kepler's
//! equation, and the element-to-position solver.

pub mod elements;
pub mod kepler;
pub mod position;

pub use elements::{ElementsError, OrbitalElements};
pub use kepler::{KeplerSolution, KeplerSolver};
pub use position::{
    AnomalyUnit, CartesianPosition, PositionOptions, compute_position, compute_position_with,
    perifocal_position, rotate_to_reference,
};
