//! Configuration models and loaders for the O.A.S.I.S. tracking tools.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Top-level settings file (`configs/solver.toml` by convention).
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub solver: SolverConfig,
    pub tracking: TrackingConfig,
}

/// Kepler solver selection and the unit of the catalog's mean-anomaly column.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    pub method: KeplerMethod,
    /// Update count for the fixed-point method.
    pub iterations: usize,
    /// Step tolerance (radians) for Newton's method.
    pub tolerance: f64,
    pub max_iterations: usize,
    pub mean_anomaly_unit: AnomalyUnitConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: KeplerMethod::FixedPoint,
            iterations: 10,
            tolerance: 1e-12,
            max_iterations: 50,
            mean_anomaly_unit: AnomalyUnitConfig::Radians,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeplerMethod {
    FixedPoint,
    Newton,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyUnitConfig {
    Radians,
    Degrees,
}

/// Defaults applied to tracking queries when the caller does not override them.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TrackingConfig {
    /// `ALL` or a catalog object type such as `DEBRIS`.
    pub default_object_type: String,
    /// Only rows updated within this many hours are tracked.
    pub timeframe_hours: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            default_object_type: "ALL".to_string(),
            timeframe_hours: 24,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl Settings {
    /// Reject settings the solver or query layer cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solver.method == KeplerMethod::Newton {
            if !(self.solver.tolerance.is_finite() && self.solver.tolerance > 0.0) {
                return Err(ConfigError::Invalid {
                    field: "solver.tolerance",
                    reason: "must be a positive finite number",
                });
            }
            if self.solver.max_iterations == 0 {
                return Err(ConfigError::Invalid {
                    field: "solver.max_iterations",
                    reason: "must be at least 1",
                });
            }
        }
        if self.tracking.timeframe_hours == 0 {
            return Err(ConfigError::Invalid {
                field: "tracking.timeframe_hours",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

/// Load and validate settings from a TOML (`.toml`) or YAML file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let settings: Settings = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    settings.validate()?;
    Ok(settings)
}
