//! Export helpers for tracking JSON responses and position CSV tables.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// JSON envelopes in the shape the dashboard's globe view consumes.
pub mod tracking {
    use serde::Serialize;
    use std::io::{self, Write};

    /// Successful tracking response.
    #[derive(Debug, Serialize)]
    pub struct TrackingEnvelope<'a> {
        pub success: bool,
        pub data: Vec<ObjectEntry<'a>>,
        pub metadata: ResponseMetadata,
    }

    #[derive(Debug, Serialize)]
    pub struct ObjectEntry<'a> {
        pub id: &'a str,
        pub name: &'a str,
        #[serde(rename = "type")]
        pub object_type: &'a str,
        pub position: Position,
        pub orbit: Orbit,
        pub metadata: ObjectMetadata<'a>,
    }

    #[derive(Debug, Clone, Copy, Serialize)]
    pub struct Position {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    #[derive(Debug, Clone, Copy, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Orbit {
        pub semimajor_axis: f64,
        pub eccentricity: f64,
        pub inclination: f64,
        pub period: f64,
        /// Altitudes above the equatorial radius (km), as in the GP catalog.
        pub apoapsis: f64,
        pub periapsis: f64,
    }

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ObjectMetadata<'a> {
        pub country: Option<&'a str>,
        pub rcs_size: Option<&'a str>,
        pub launch_date: Option<&'a str>,
        pub decay_date: Option<&'a str>,
    }

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseMetadata {
        pub total: usize,
        /// Rows that matched the query but could not be placed.
        pub skipped: usize,
        pub timeframe: u32,
        /// RFC 3339 timestamp of the run.
        pub last_update: String,
        pub object_types: ObjectTypes,
    }

    #[derive(Debug, Clone, Copy, Default, Serialize)]
    pub struct ObjectTypes {
        #[serde(rename = "PAYLOAD")]
        pub payload: usize,
        #[serde(rename = "DEBRIS")]
        pub debris: usize,
        #[serde(rename = "ROCKET_BODY")]
        pub rocket_body: usize,
    }

    /// Failure response.
    #[derive(Debug, Serialize)]
    pub struct ErrorEnvelope<'a> {
        pub success: bool,
        pub message: &'a str,
        pub error: String,
    }

    impl<'a> ErrorEnvelope<'a> {
        pub fn new(message: &'a str, error: impl ToString) -> Self {
            Self {
                success: false,
                message,
                error: error.to_string(),
            }
        }
    }

    /// Write a response as pretty-printed JSON followed by a newline.
    pub fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, value)?;
        writeln!(writer)?;
        writer.flush()
    }
}

/// Flat position table, one row per tracked object.
pub mod positions {
    use serde::Serialize;
    use std::io::Write;

    /// CSV row; the header is derived from the field names.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record<'a> {
        pub id: &'a str,
        pub name: &'a str,
        pub object_type: &'a str,
        pub x_km: f64,
        pub y_km: f64,
        pub z_km: f64,
        pub radius_km: f64,
        pub semi_major_axis_km: f64,
        pub eccentricity: f64,
        pub inclination_deg: f64,
        pub period_min: f64,
    }

    /// Column names, in output order.
    pub const HEADER: [&str; 11] = [
        "id",
        "name",
        "object_type",
        "x_km",
        "y_km",
        "z_km",
        "radius_km",
        "semi_major_axis_km",
        "eccentricity",
        "inclination_deg",
        "period_min",
    ];

    /// Write the header and all rows. An empty table still gets its header.
    pub fn write_csv(writer: &mut dyn Write, records: &[Record<'_>]) -> csv::Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(HEADER)?;
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
