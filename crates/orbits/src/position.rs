//! Keplerian elements to Earth-centred Cartesian position.
//!
//! Two-body, unperturbed geometry only: no velocity, no precession or
//! nutation, no epoch propagation. The computation is total over `f64`;
//! callers must check [`CartesianPosition::is_finite`] before plotting.

use oasis_core::angles::deg_to_rad;
use oasis_core::vector::{self, Vector3};

use crate::elements::OrbitalElements;
use crate::kepler::KeplerSolver;

/// Position in the Earth-centred reference frame (km).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPosition {
    /// False when any component is NaN or infinite ("position unavailable").
    pub fn is_finite(&self) -> bool {
        vector::is_finite(&self.as_vector())
    }

    /// Distance from Earth's centre (km).
    pub fn magnitude(&self) -> f64 {
        vector::norm(&self.as_vector())
    }

    pub fn as_vector(&self) -> Vector3 {
        [self.x, self.y, self.z]
    }
}

/// Unit in which [`OrbitalElements::mean_anomaly_rad`] is interpreted.
///
/// The tracking dashboard historically fed the catalog's anomaly column to the
/// solver without conversion, so `Radians` is the default. `Degrees` matches
/// TLE/GP conventions and must be chosen explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnomalyUnit {
    #[default]
    Radians,
    Degrees,
}

impl AnomalyUnit {
    fn to_radians(self, value: f64) -> f64 {
        match self {
            AnomalyUnit::Radians => value,
            AnomalyUnit::Degrees => deg_to_rad(value),
        }
    }
}

/// Knobs for [`compute_position_with`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionOptions {
    pub solver: KeplerSolver,
    pub mean_anomaly_unit: AnomalyUnit,
}

/// Position with the historical behaviour: ten fixed-point Kepler iterations,
/// mean anomaly taken as radians.
pub fn compute_position(elements: &OrbitalElements) -> CartesianPosition {
    compute_position_with(elements, &PositionOptions::default())
}

/// Position using an explicit Kepler strategy and mean-anomaly unit.
pub fn compute_position_with(
    elements: &OrbitalElements,
    options: &PositionOptions,
) -> CartesianPosition {
    let mean_anomaly = options
        .mean_anomaly_unit
        .to_radians(elements.mean_anomaly_rad);
    let solution = options.solver.solve(mean_anomaly, elements.eccentricity);
    if !solution.converged {
        log::debug!(
            "kepler solve left residual {:.3e} after {} iterations (e = {})",
            solution.residual,
            solution.iterations,
            elements.eccentricity
        );
    }
    let planar = perifocal_position(
        elements.semi_major_axis_km,
        elements.eccentricity,
        solution.eccentric_anomaly,
    );
    rotate_to_reference(
        planar,
        elements.inclination_deg,
        elements.raan_deg,
        elements.arg_periapsis_deg,
    )
}

/// Position in the orbital plane, periapsis along +x.
///
/// `1 - e²` goes negative for `e > 1`, which yields NaN for the y component.
pub fn perifocal_position(
    semi_major_axis_km: f64,
    eccentricity: f64,
    eccentric_anomaly: f64,
) -> (f64, f64) {
    let x = semi_major_axis_km * (eccentric_anomaly.cos() - eccentricity);
    let y = semi_major_axis_km
        * (1.0 - eccentricity * eccentricity).sqrt()
        * eccentric_anomaly.sin();
    (x, y)
}

/// Rotate a perifocal point into the reference frame (ω, then i, then Ω).
pub fn rotate_to_reference(
    planar: (f64, f64),
    inclination_deg: f64,
    raan_deg: f64,
    arg_periapsis_deg: f64,
) -> CartesianPosition {
    let (xp, yp) = planar;
    let (sin_i, cos_i) = deg_to_rad(inclination_deg).sin_cos();
    let (sin_o, cos_o) = deg_to_rad(raan_deg).sin_cos();
    let (sin_w, cos_w) = deg_to_rad(arg_periapsis_deg).sin_cos();

    CartesianPosition {
        x: xp * (cos_o * cos_w - sin_o * sin_w * cos_i)
            - yp * (cos_o * sin_w + sin_o * cos_w * cos_i),
        y: xp * (sin_o * cos_w + cos_o * sin_w * cos_i)
            + yp * (cos_o * cos_w * cos_i - sin_o * sin_w),
        z: xp * sin_w * sin_i + yp * cos_w * sin_i,
    }
}
