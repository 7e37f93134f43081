use std::io;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use chrono::{DateTime, SecondsFormat, Utc};
use clap::{Parser, ValueEnum};
use oasis::catalog::query::parse_timestamp;
use oasis::catalog::{
    CatalogQuery, ObjectTypeFilter, TrackedObject, TrackingReport, load_gp_records,
    position_options, track,
};
use oasis::config::{Settings, load_settings};
use oasis::export::{positions, tracking, writer_for_path};

/// Compute Earth-centred positions for catalog objects (globe view feed).
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Catalog position tracker (Keplerian two-body)"
)]
struct Cli {
    /// GP catalog export (.csv or .json)
    #[arg(long)]
    input: PathBuf,

    /// Object type filter: ALL, PAYLOAD, DEBRIS, "ROCKET BODY", ... (defaults to settings)
    #[arg(long = "type")]
    object_type: Option<String>,

    /// Only track rows updated within this many hours (defaults to settings)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    timeframe: Option<u32>,

    /// Solver/tracking settings file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Output file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Reference time as RFC 3339 (defaults to the current time)
    #[arg(long)]
    now: Option<String>,
}

#[derive(Copy, Clone, ValueEnum, Debug, PartialEq)]
enum Format {
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = run(&cli);
    if let Err(err) = &result {
        if cli.format == Format::Json {
            let envelope = tracking::ErrorEnvelope::new(
                "Failed to compute space object positions",
                format!("{err:#}"),
            );
            // Always stdout: the output path may be what failed.
            if let Err(write_err) = tracking::write_json(&mut io::stdout().lock(), &envelope) {
                log::error!("failed to write error envelope: {write_err}");
            }
        }
    }
    result
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let now = match &cli.now {
        Some(raw) => {
            parse_timestamp(raw).ok_or_else(|| anyhow!("invalid --now timestamp `{raw}`"))?
        }
        None => Utc::now(),
    };

    let mut query = CatalogQuery::from_config(&settings.tracking, now);
    if let Some(raw) = &cli.object_type {
        query = query.with_object_type(raw.parse::<ObjectTypeFilter>().unwrap_or_default());
    }
    if let Some(hours) = cli.timeframe {
        query = query.with_timeframe_hours(hours);
    }

    let records = load_gp_records(&cli.input)
        .with_context(|| format!("loading catalog from {}", cli.input.display()))?;
    let options = position_options(&settings.solver);
    let report = track(&records, &query, &options);
    log::info!(
        "Tracked {} of {} catalog rows ({} skipped)",
        report.total(),
        records.len(),
        report.skipped.len()
    );

    let mut out = writer_for_path(&cli.output)?;
    match cli.format {
        Format::Json => tracking::write_json(&mut *out, &envelope(&report))?,
        Format::Csv => positions::write_csv(&mut *out, &csv_rows(&report))?,
    }
    Ok(())
}

fn envelope(report: &TrackingReport) -> tracking::TrackingEnvelope<'_> {
    tracking::TrackingEnvelope {
        success: true,
        data: report.objects.iter().map(entry).collect(),
        metadata: tracking::ResponseMetadata {
            total: report.total(),
            skipped: report.skipped.len(),
            timeframe: report.timeframe_hours,
            last_update: format_instant(&report.generated_at),
            object_types: tracking::ObjectTypes {
                payload: report.counts.payload,
                debris: report.counts.debris,
                rocket_body: report.counts.rocket_body,
            },
        },
    }
}

fn entry(object: &TrackedObject) -> tracking::ObjectEntry<'_> {
    tracking::ObjectEntry {
        id: &object.id,
        name: &object.name,
        object_type: &object.object_type,
        position: tracking::Position {
            x: object.position.x,
            y: object.position.y,
            z: object.position.z,
        },
        orbit: tracking::Orbit {
            semimajor_axis: object.orbit.semi_major_axis_km,
            eccentricity: object.orbit.eccentricity,
            inclination: object.orbit.inclination_deg,
            period: object.orbit.period_minutes,
            apoapsis: object.orbit.apoapsis_altitude_km,
            periapsis: object.orbit.periapsis_altitude_km,
        },
        metadata: tracking::ObjectMetadata {
            country: object.metadata.country.as_deref(),
            rcs_size: object.metadata.rcs_size.as_deref(),
            launch_date: object.metadata.launch_date.as_deref(),
            decay_date: object.metadata.decay_date.as_deref(),
        },
    }
}

fn csv_rows(report: &TrackingReport) -> Vec<positions::Record<'_>> {
    report
        .objects
        .iter()
        .map(|object| positions::Record {
            id: &object.id,
            name: &object.name,
            object_type: &object.object_type,
            x_km: object.position.x,
            y_km: object.position.y,
            z_km: object.position.z,
            radius_km: object.position.magnitude(),
            semi_major_axis_km: object.orbit.semi_major_axis_km,
            eccentricity: object.orbit.eccentricity,
            inclination_deg: object.orbit.inclination_deg,
            period_min: object.orbit.period_minutes,
        })
        .collect()
}

fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
