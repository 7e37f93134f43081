//! Tracking pipeline: selected catalog rows to plottable positions.
//!
//! Each selected row is solved independently. Rows that cannot be placed
//! (null columns, unbound elements, non-finite coordinates) are reported in
//! [`TrackingReport::skipped`] and never reach the renderer.

use chrono::{DateTime, Utc};
use oasis_orbits::{
    CartesianPosition, ElementsError, OrbitalElements, PositionOptions, compute_position_with,
};
use thiserror::Error;

use crate::query::CatalogQuery;
use crate::record::{GpRecord, RecordError};

/// An object that can be plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedObject {
    pub id: String,
    pub name: String,
    pub object_type: String,
    pub position: CartesianPosition,
    pub orbit: OrbitSummary,
    pub metadata: ObjectMetadata,
}

/// Orbit shape echoed back to the dashboard alongside the position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSummary {
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    /// Catalog `PERIOD` when present, otherwise the two-body period.
    pub period_minutes: f64,
    /// Catalog `APOAPSIS` altitude when present, otherwise derived from a and e.
    pub apoapsis_altitude_km: f64,
    /// Catalog `PERIAPSIS` altitude when present, otherwise derived from a and e.
    pub periapsis_altitude_km: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectMetadata {
    pub country: Option<String>,
    pub rcs_size: Option<String>,
    pub launch_date: Option<String>,
    pub decay_date: Option<String>,
}

/// Why a selected row was left off the plot.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkipReason {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Elements(#[from] ElementsError),
    #[error("computed position is not finite")]
    PositionUnavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedObject {
    pub id: String,
    pub name: String,
    pub reason: SkipReason,
}

/// Tracked-object tallies by the dashboard's three headline types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectTypeCounts {
    pub payload: usize,
    pub debris: usize,
    pub rocket_body: usize,
}

impl ObjectTypeCounts {
    fn record(&mut self, normalized_type: &str) {
        match normalized_type {
            "PAYLOAD" => self.payload += 1,
            "DEBRIS" => self.debris += 1,
            "ROCKET BODY" => self.rocket_body += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackingReport {
    pub objects: Vec<TrackedObject>,
    pub skipped: Vec<SkippedObject>,
    pub counts: ObjectTypeCounts,
    pub timeframe_hours: u32,
    pub generated_at: DateTime<Utc>,
}

impl TrackingReport {
    pub fn total(&self) -> usize {
        self.objects.len()
    }
}

/// Compute positions for every row the query selects.
pub fn track(
    records: &[GpRecord],
    query: &CatalogQuery,
    options: &PositionOptions,
) -> TrackingReport {
    let mut objects = Vec::new();
    let mut skipped = Vec::new();
    let mut counts = ObjectTypeCounts::default();

    for record in query.filter(records) {
        match track_record(record, options) {
            Ok(object) => {
                counts.record(&record.normalized_type());
                objects.push(object);
            }
            Err(reason) => {
                log::warn!("Skipping {record}: {reason}");
                skipped.push(SkippedObject {
                    id: record.norad_cat_id.clone(),
                    name: record.object_name.clone(),
                    reason,
                });
            }
        }
    }

    log::debug!(
        "Tracked {} objects ({} skipped) within {}h for type {}",
        objects.len(),
        skipped.len(),
        query.timeframe_hours,
        query.object_type
    );

    TrackingReport {
        objects,
        skipped,
        counts,
        timeframe_hours: query.timeframe_hours,
        generated_at: query.now,
    }
}

/// Solve one row; the caller decides what to do with unplaceable rows.
pub fn track_record(
    record: &GpRecord,
    options: &PositionOptions,
) -> Result<TrackedObject, SkipReason> {
    let elements = record.elements()?;
    elements.validate()?;
    let position = compute_position_with(&elements, options);
    if !position.is_finite() {
        return Err(SkipReason::PositionUnavailable);
    }
    Ok(TrackedObject {
        id: record.norad_cat_id.clone(),
        name: record.object_name.trim().to_string(),
        object_type: record.object_type.trim().to_string(),
        position,
        orbit: orbit_summary(record, &elements),
        metadata: ObjectMetadata {
            country: record.country_code.clone(),
            rcs_size: record.rcs_size.clone(),
            launch_date: record.launch_date.clone(),
            decay_date: record.decay_date.clone(),
        },
    })
}

fn orbit_summary(record: &GpRecord, elements: &OrbitalElements) -> OrbitSummary {
    OrbitSummary {
        semi_major_axis_km: elements.semi_major_axis_km,
        eccentricity: elements.eccentricity,
        inclination_deg: elements.inclination_deg,
        period_minutes: catalog_or(record.period, || elements.period_minutes()),
        apoapsis_altitude_km: catalog_or(record.apoapsis, || elements.apoapsis_altitude_km()),
        periapsis_altitude_km: catalog_or(record.periapsis, || elements.periapsis_altitude_km()),
    }
}

fn catalog_or(value: Option<f64>, derived: impl FnOnce() -> f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or_else(derived)
}
