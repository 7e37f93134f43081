//! One row of the general-perturbations (GP) catalog.

use std::fmt;

use oasis_orbits::OrbitalElements;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Catalog row as exported by the tracking database.
///
/// Column names follow the GP catalog (`NORAD_CAT_ID`, `RA_OF_ASC_NODE`, ...);
/// lower-case spellings are accepted too. Numeric columns are nullable.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GpRecord {
    #[serde(
        rename = "NORAD_CAT_ID",
        alias = "norad_cat_id",
        deserialize_with = "string_or_number"
    )]
    pub norad_cat_id: String,
    #[serde(rename = "OBJECT_NAME", alias = "object_name", default)]
    pub object_name: String,
    #[serde(rename = "OBJECT_TYPE", alias = "object_type", default)]
    pub object_type: String,
    #[serde(rename = "INCLINATION", alias = "inclination", default)]
    pub inclination: Option<f64>,
    #[serde(rename = "MEAN_MOTION", alias = "mean_motion", default)]
    pub mean_motion: Option<f64>,
    #[serde(rename = "ECCENTRICITY", alias = "eccentricity", default)]
    pub eccentricity: Option<f64>,
    #[serde(rename = "PERIOD", alias = "period", default)]
    pub period: Option<f64>,
    #[serde(rename = "SEMIMAJOR_AXIS", alias = "semimajor_axis", default)]
    pub semimajor_axis: Option<f64>,
    #[serde(rename = "APOAPSIS", alias = "apoapsis", default)]
    pub apoapsis: Option<f64>,
    #[serde(rename = "PERIAPSIS", alias = "periapsis", default)]
    pub periapsis: Option<f64>,
    #[serde(rename = "RCS_SIZE", alias = "rcs_size", default)]
    pub rcs_size: Option<String>,
    #[serde(rename = "COUNTRY_CODE", alias = "country_code", default)]
    pub country_code: Option<String>,
    #[serde(rename = "LAUNCH_DATE", alias = "launch_date", default)]
    pub launch_date: Option<String>,
    #[serde(rename = "DECAY_DATE", alias = "decay_date", default)]
    pub decay_date: Option<String>,
    #[serde(rename = "MEAN_ANOMALY", alias = "mean_anomaly", default)]
    pub mean_anomaly: Option<f64>,
    #[serde(rename = "RA_OF_ASC_NODE", alias = "ra_of_asc_node", default)]
    pub ra_of_asc_node: Option<f64>,
    #[serde(rename = "ARG_OF_PERICENTER", alias = "arg_of_pericenter", default)]
    pub arg_of_pericenter: Option<f64>,
    #[serde(rename = "UPDATED_AT", alias = "updated_at", default)]
    pub updated_at: Option<String>,
}

/// A row that cannot be turned into orbital elements.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("catalog column `{0}` is null")]
    MissingField(&'static str),
}

impl GpRecord {
    /// Orbital elements for the position solver.
    ///
    /// `MEAN_ANOMALY` is passed through unconverted; the unit it is read in is
    /// decided by [`oasis_orbits::AnomalyUnit`] at solve time.
    pub fn elements(&self) -> Result<OrbitalElements, RecordError> {
        let semi_major_axis_km = match (self.semimajor_axis, self.mean_motion) {
            (Some(a), _) => a,
            (None, Some(n)) => OrbitalElements::semi_major_axis_from_mean_motion(n),
            (None, None) => return Err(RecordError::MissingField("SEMIMAJOR_AXIS")),
        };
        Ok(OrbitalElements {
            semi_major_axis_km,
            eccentricity: required(self.eccentricity, "ECCENTRICITY")?,
            inclination_deg: required(self.inclination, "INCLINATION")?,
            raan_deg: required(self.ra_of_asc_node, "RA_OF_ASC_NODE")?,
            arg_periapsis_deg: required(self.arg_of_pericenter, "ARG_OF_PERICENTER")?,
            mean_anomaly_rad: required(self.mean_anomaly, "MEAN_ANOMALY")?,
        })
    }

    /// Object type as compared by filters and counters: trimmed, upper-case.
    pub fn normalized_type(&self) -> String {
        normalize_object_type(&self.object_type)
    }
}

pub(crate) fn normalize_object_type(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

fn required(value: Option<f64>, column: &'static str) -> Result<f64, RecordError> {
    value.ok_or(RecordError::MissingField(column))
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(v) => v.to_string(),
        Raw::Float(v) => v.to_string(),
        Raw::Text(v) => v.trim().to_string(),
    })
}

impl fmt::Display for GpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.object_name.is_empty() {
            write!(f, "#{}", self.norad_cat_id)
        } else {
            write!(f, "{} (#{})", self.object_name.trim(), self.norad_cat_id)
        }
    }
}
