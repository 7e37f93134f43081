use anyhow::{anyhow, bail};
use clap::{Parser, ValueEnum};
use oasis::orbits::kepler::{
    DEFAULT_FIXED_POINT_ITERATIONS, DEFAULT_NEWTON_MAX_ITERATIONS, DEFAULT_NEWTON_TOLERANCE,
};
use oasis::orbits::{
    AnomalyUnit, KeplerSolver, OrbitalElements, PositionOptions, compute_position_with,
};

/// Compute the Earth-centred position of a single object from its Keplerian elements.
#[derive(Parser, Debug)]
#[command(author, version, about = "Keplerian elements to Cartesian position")]
struct Cli {
    /// Semi-major axis in km
    #[arg(long = "semi-major-axis", allow_negative_numbers = true)]
    semi_major_axis_km: f64,

    /// Eccentricity
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    eccentricity: f64,

    /// Inclination in degrees
    #[arg(long = "inclination", default_value_t = 0.0, allow_negative_numbers = true)]
    inclination_deg: f64,

    /// Right ascension of the ascending node in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    raan: f64,

    /// Argument of periapsis in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    argp: f64,

    /// Mean anomaly (radians unless --degrees)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    mean_anomaly: f64,

    /// Read the mean anomaly as degrees
    #[arg(long, default_value_t = false)]
    degrees: bool,

    /// Kepler solver
    #[arg(long, value_enum, default_value_t = SolverKind::Fixed)]
    solver: SolverKind,

    /// Fixed-point update count (fixed solver only; default 10)
    #[arg(long)]
    iterations: Option<usize>,

    /// Newton step tolerance in radians (newton solver only; default 1e-12)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Newton iteration cap (newton solver only; default 50)
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Reject elements that do not describe a bound orbit
    #[arg(long, default_value_t = false)]
    validate: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum SolverKind {
    Fixed,
    Newton,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let elements = OrbitalElements {
        semi_major_axis_km: cli.semi_major_axis_km,
        eccentricity: cli.eccentricity,
        inclination_deg: cli.inclination_deg,
        raan_deg: cli.raan,
        arg_periapsis_deg: cli.argp,
        mean_anomaly_rad: cli.mean_anomaly,
    };
    if cli.validate {
        elements.validate()?;
    }

    let options = PositionOptions {
        solver: solver(&cli)?,
        mean_anomaly_unit: if cli.degrees {
            AnomalyUnit::Degrees
        } else {
            AnomalyUnit::Radians
        },
    };
    let position = compute_position_with(&elements, &options);

    println!("{:.6} {:.6} {:.6}", position.x, position.y, position.z);
    if !position.is_finite() {
        return Err(anyhow!("position unavailable for the given elements"));
    }
    log::debug!(
        "|r| = {:.3} km, period = {:.2} min",
        position.magnitude(),
        elements.period_minutes()
    );
    Ok(())
}

fn solver(cli: &Cli) -> anyhow::Result<KeplerSolver> {
    match cli.solver {
        SolverKind::Fixed => {
            if cli.tolerance.is_some() || cli.max_iterations.is_some() {
                bail!("--tolerance and --max-iterations require --solver newton");
            }
            Ok(KeplerSolver::FixedPoint {
                iterations: cli.iterations.unwrap_or(DEFAULT_FIXED_POINT_ITERATIONS),
            })
        }
        SolverKind::Newton => {
            if cli.iterations.is_some() {
                bail!("--iterations applies to --solver fixed; use --max-iterations");
            }
            let tolerance = cli.tolerance.unwrap_or(DEFAULT_NEWTON_TOLERANCE);
            if !(tolerance.is_finite() && tolerance > 0.0) {
                bail!("--tolerance must be a positive number (got {tolerance})");
            }
            let max_iterations = cli.max_iterations.unwrap_or(DEFAULT_NEWTON_MAX_ITERATIONS);
            if max_iterations == 0 {
                bail!("--max-iterations must be at least 1");
            }
            Ok(KeplerSolver::Newton {
                tolerance,
                max_iterations,
            })
        }
    }
}
