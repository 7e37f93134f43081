//! Row selection for tracking requests: object type, freshness, and decay.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use oasis_config::TrackingConfig;

use crate::record::{GpRecord, normalize_object_type};

/// Object-type restriction of a tracking request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ObjectTypeFilter {
    #[default]
    All,
    /// Normalized (trimmed, upper-case) catalog type, e.g. `DEBRIS` or `ROCKET BODY`.
    Only(String),
}

impl ObjectTypeFilter {
    pub fn matches(&self, object_type: &str) -> bool {
        match self {
            ObjectTypeFilter::All => true,
            ObjectTypeFilter::Only(wanted) => normalize_object_type(object_type) == *wanted,
        }
    }
}

impl FromStr for ObjectTypeFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_object_type(s);
        if normalized.is_empty() || normalized == "ALL" {
            Ok(ObjectTypeFilter::All)
        } else {
            Ok(ObjectTypeFilter::Only(normalized))
        }
    }
}

impl fmt::Display for ObjectTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectTypeFilter::All => f.write_str("ALL"),
            ObjectTypeFilter::Only(t) => f.write_str(t),
        }
    }
}

/// Which catalog rows a tracking request covers.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub object_type: ObjectTypeFilter,
    /// Rows whose `UPDATED_AT` is older than this many hours are left out.
    pub timeframe_hours: u32,
    /// Reference instant for the freshness and decay checks.
    pub now: DateTime<Utc>,
}

impl CatalogQuery {
    /// All object types over the last 24 hours.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::from_config(&TrackingConfig::default(), now)
    }

    pub fn from_config(config: &TrackingConfig, now: DateTime<Utc>) -> Self {
        let object_type = config
            .default_object_type
            .parse::<ObjectTypeFilter>()
            .unwrap_or_default();
        Self {
            object_type,
            timeframe_hours: config.timeframe_hours,
            now,
        }
    }

    pub fn with_object_type(mut self, object_type: ObjectTypeFilter) -> Self {
        self.object_type = object_type;
        self
    }

    pub fn with_timeframe_hours(mut self, hours: u32) -> Self {
        self.timeframe_hours = hours;
        self
    }

    /// Earliest `UPDATED_AT` still considered fresh.
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.now - Duration::hours(i64::from(self.timeframe_hours))
    }

    /// True when the row matches the type filter, is fresh, and has not decayed.
    ///
    /// Rows without a parseable `UPDATED_AT` are never fresh; a present but
    /// unparseable one is logged. An unparseable `DECAY_DATE` is treated like a
    /// null one.
    pub fn selects(&self, record: &GpRecord) -> bool {
        if !self.object_type.matches(&record.object_type) {
            return false;
        }
        let updated = match record.updated_at.as_deref() {
            Some(raw) => match parse_timestamp(raw) {
                Some(updated) => updated,
                None => {
                    log::warn!("Excluding {record}: unparseable UPDATED_AT `{raw}`");
                    return false;
                }
            },
            None => return false,
        };
        if updated < self.cutoff() {
            return false;
        }
        match record.decay_date.as_deref().and_then(parse_date) {
            Some(decayed_on) => decayed_on > self.now.date_naive(),
            None => true,
        }
    }

    /// Rows selected by this query, in catalog order.
    pub fn filter<'a>(&'a self, records: &'a [GpRecord]) -> impl Iterator<Item = &'a GpRecord> {
        records.iter().filter(move |record| self.selects(record))
    }
}

/// Parse a catalog timestamp.
///
/// Accepts RFC 3339, Postgres `timestamptz` text (`2025-03-01 08:00:00+00`,
/// hour-only or `+hh:mm` offsets), and naive `YYYY-MM-DD[T ]HH:MM:SS[.f]`
/// taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"]
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Parse a catalog date (`YYYY-MM-DD`), also accepting a full timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(raw).map(|dt| dt.date_naive()))
}
