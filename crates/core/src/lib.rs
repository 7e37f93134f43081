//! Core units, constants, and shared primitives for the O.A.S.I.S. orbital tracking workspace.

/// Physical constants for Earth-centred work, in kilometres and seconds.
pub mod constants {
    /// Earth's equatorial radius (km, WGS-84). Altitudes in the GP catalog are measured from it.
    pub const EARTH_RADIUS_KM: f64 = 6_378.137;
    /// Earth's gravitational parameter (km³/s²).
    pub const MU_EARTH_KM3_S2: f64 = 398_600.4418;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Angle conversion helpers.
pub mod angles {
    use std::f64::consts::PI;

    /// Convert degrees to radians.
    ///
    /// Evaluated as `(v·π)/180`, the dashboard's order; `f64::to_radians`
    /// multiplies by `π/180` and can differ in the last bit.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * PI / 180.0
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Convert seconds to minutes.
    #[inline]
    pub fn seconds_to_minutes(seconds: f64) -> f64 {
        seconds / 60.0
    }

    /// Convert an orbital period in seconds to revolutions per day.
    #[inline]
    pub fn period_to_rev_per_day(period_seconds: f64) -> f64 {
        SECONDS_PER_DAY / period_seconds
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in kilometres.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(v: &Vector3) -> bool {
        v.iter().all(|c| c.is_finite())
    }
}
