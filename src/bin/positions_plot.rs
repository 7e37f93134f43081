use clap::{Parser, ValueEnum};
use csv::ReaderBuilder;
use oasis::constants::EARTH_RADIUS_KM;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render tracked positions (CSV from `track --format csv`) as a planar scatter"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/positions.png")]
    output: PathBuf,
    /// Reference-frame plane to project onto
    #[arg(long, value_enum, default_value_t = Plane::Xy)]
    plane: Plane,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 1000)]
    height: u32,
    /// Clip the view at this distance from Earth's centre (km); defaults to the farthest object
    #[arg(long)]
    max_radius_km: Option<f64>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Plane {
    Xy,
    Xz,
    Yz,
}

impl Plane {
    fn axis_labels(self) -> (&'static str, &'static str) {
        match self {
            Plane::Xy => ("x (km)", "y (km)"),
            Plane::Xz => ("x (km)", "z (km)"),
            Plane::Yz => ("y (km)", "z (km)"),
        }
    }

    fn project(self, p: &Point) -> (f64, f64) {
        match self {
            Plane::Xy => (p.x, p.y),
            Plane::Xz => (p.x, p.z),
            Plane::Yz => (p.y, p.z),
        }
    }
}

#[derive(Debug, Clone)]
struct Point {
    x: f64,
    y: f64,
    z: f64,
    object_type: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let points = read_points(&cli.input)?;

    if points.is_empty() {
        return Err(anyhow::anyhow!("No finite positions in the provided CSV"));
    }

    let farthest = points
        .iter()
        .map(|p| (p.x * p.x + p.y * p.y + p.z * p.z).sqrt())
        .fold(EARTH_RADIUS_KM, f64::max);
    let extent = cli.max_radius_km.unwrap_or(farthest * 1.05);
    if !(extent.is_finite() && extent > 0.0) {
        return Err(anyhow::anyhow!("Plot extent must be a positive distance"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);
    let (x_desc, y_desc) = cli.plane.axis_labels();

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("Tracked objects ({} plotted)", points.len()),
            caption_font,
        )
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .label_style(label_font.clone())
        .x_labels(7)
        .y_labels(7)
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    let earth: Vec<(f64, f64)> = (0..=180)
        .map(|i| {
            let theta = i as f64 / 180.0 * std::f64::consts::TAU;
            (EARTH_RADIUS_KM * theta.cos(), EARTH_RADIUS_KM * theta.sin())
        })
        .collect();
    chart.draw_series(std::iter::once(Polygon::new(
        earth,
        RGBColor(70, 130, 180).mix(0.35).filled(),
    )))?;

    for (label, color) in TYPE_COLORS {
        let series: Vec<(f64, f64)> = points
            .iter()
            .filter(|p| type_label(&p.object_type) == *label)
            .map(|p| cli.plane.project(p))
            .filter(|(a, b)| a.abs() <= extent && b.abs() <= extent)
            .collect();
        if series.is_empty() {
            continue;
        }
        let color = *color;
        chart
            .draw_series(
                series
                    .into_iter()
                    .map(move |(a, b)| Circle::new((a, b), 2, color.filled())),
            )?
            .label(*label)
            .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .label_font(label_font)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    log::info!("Wrote {}", cli.output.display());
    Ok(())
}

const TYPE_COLORS: &[(&str, RGBColor)] = &[
    ("PAYLOAD", RGBColor(30, 120, 40)),
    ("DEBRIS", RGBColor(200, 40, 30)),
    ("ROCKET BODY", RGBColor(230, 140, 20)),
    ("OTHER", RGBColor(90, 90, 90)),
];

fn type_label(object_type: &str) -> &'static str {
    let upper = object_type.trim().to_ascii_uppercase();
    TYPE_COLORS
        .iter()
        .map(|(label, _)| *label)
        .find(|label| *label == upper)
        .unwrap_or("OTHER")
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_points(path: &str) -> anyhow::Result<Vec<Point>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
    };
    let x_idx = column("x_km")?;
    let y_idx = column("y_km")?;
    let z_idx = column("z_km")?;
    let type_idx = column("object_type").ok();

    let mut points = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let value = |idx: usize| -> f64 { r.get(idx).unwrap_or("").parse().unwrap_or(f64::NAN) };
        let (x, y, z) = (value(x_idx), value(y_idx), value(z_idx));
        if x.is_finite() && y.is_finite() && z.is_finite() {
            points.push(Point {
                x,
                y,
                z,
                object_type: type_idx
                    .and_then(|idx| r.get(idx))
                    .unwrap_or("")
                    .to_string(),
            });
        }
    }
    Ok(points)
}
