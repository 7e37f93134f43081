//! Classical orbital elements as stored in the tracking catalog.

use std::f64::consts::TAU;

use oasis_core::constants::{EARTH_RADIUS_KM, MU_EARTH_KM3_S2, SECONDS_PER_DAY};
use oasis_core::time;
use thiserror::Error;

/// Keplerian elements of one object at its reference epoch.
///
/// Angles other than the mean anomaly are in degrees. The mean anomaly is
/// consumed as radians unless the caller opts into degrees through
/// [`crate::AnomalyUnit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub raan_deg: f64,
    pub arg_periapsis_deg: f64,
    pub mean_anomaly_rad: f64,
}

/// Reasons a set of elements cannot describe a bound Earth orbit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ElementsError {
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
    #[error("semi-major axis must be positive (got {0} km)")]
    NonPositiveSemiMajorAxis(f64),
    #[error("eccentricity must lie in [0, 1) for a bound orbit (got {0})")]
    UnboundEccentricity(f64),
    #[error("inclination must lie in [0, 180] degrees (got {0})")]
    InclinationOutOfRange(f64),
}

impl OrbitalElements {
    /// Semi-major axis (km) of an Earth orbit with the given mean motion (rev/day).
    pub fn semi_major_axis_from_mean_motion(rev_per_day: f64) -> f64 {
        let n_rad_s = rev_per_day * TAU / SECONDS_PER_DAY;
        (MU_EARTH_KM3_S2 / (n_rad_s * n_rad_s)).cbrt()
    }

    /// Check that the elements describe a bound orbit the position solver handles.
    ///
    /// RAAN and argument of periapsis are only required to be finite; they wrap.
    pub fn validate(&self) -> Result<(), ElementsError> {
        let fields = [
            ("semi_major_axis_km", self.semi_major_axis_km),
            ("eccentricity", self.eccentricity),
            ("inclination_deg", self.inclination_deg),
            ("raan_deg", self.raan_deg),
            ("arg_periapsis_deg", self.arg_periapsis_deg),
            ("mean_anomaly_rad", self.mean_anomaly_rad),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ElementsError::NonFinite { field });
        }
        if self.semi_major_axis_km <= 0.0 {
            return Err(ElementsError::NonPositiveSemiMajorAxis(
                self.semi_major_axis_km,
            ));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ElementsError::UnboundEccentricity(self.eccentricity));
        }
        if !(0.0..=180.0).contains(&self.inclination_deg) {
            return Err(ElementsError::InclinationOutOfRange(self.inclination_deg));
        }
        Ok(())
    }

    /// Periapsis radius from Earth's centre (km).
    pub fn periapsis_radius_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 - self.eccentricity)
    }

    /// Apoapsis radius from Earth's centre (km).
    pub fn apoapsis_radius_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 + self.eccentricity)
    }

    /// Periapsis altitude above the equatorial radius (km), as the GP catalog reports it.
    pub fn periapsis_altitude_km(&self) -> f64 {
        self.periapsis_radius_km() - EARTH_RADIUS_KM
    }

    /// Apoapsis altitude above the equatorial radius (km), as the GP catalog reports it.
    pub fn apoapsis_altitude_km(&self) -> f64 {
        self.apoapsis_radius_km() - EARTH_RADIUS_KM
    }

    /// Two-body orbital period around Earth (seconds).
    pub fn period_seconds(&self) -> f64 {
        TAU * (self.semi_major_axis_km.powi(3) / MU_EARTH_KM3_S2).sqrt()
    }

    /// Two-body orbital period around Earth (minutes).
    pub fn period_minutes(&self) -> f64 {
        time::seconds_to_minutes(self.period_seconds())
    }

    /// Mean motion in revolutions per day.
    pub fn mean_motion_rev_per_day(&self) -> f64 {
        time::period_to_rev_per_day(self.period_seconds())
    }
}
