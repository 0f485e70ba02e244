//! tsp-anneal - command line interface.
//!
//! Loads a point set, anneals it and prints the best tour found.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Target};
use log::{error, info, LevelFilter};
use tsp_anneal::random::create_rng;
use tsp_anneal::sa::{CoolingStep, SaConfig};
use tsp_anneal::tsp::{benchmark_points, load_points, scaled_iterations, solve, Point};

/// Points shown at each end of the abbreviated coordinate tour.
const PRINT_LIMIT: usize = 10;

#[derive(Parser)]
#[command(name = "tsp-anneal")]
#[command(version)]
#[command(about = "Approximate a Euclidean TSP tour by simulated annealing with 2-opt moves")]
struct Cli {
    /// File of whitespace-separated `x y` integer pairs. Defaults to the
    /// built-in 131-point set.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Random seed. Defaults to the wall clock.
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long, default_value = "10000.0")]
    initial_temperature: f64,

    /// Multiplicative temperature decay per cooling step.
    #[arg(long, default_value = "0.995")]
    cooling_rate: f64,

    /// Iterations per temperature = factor * number of points.
    #[arg(long, default_value = "50")]
    iterations_factor: usize,

    /// Fixed iterations per temperature; overrides --iterations-factor.
    #[arg(long)]
    iterations_per_temperature: Option<usize>,

    #[arg(long, default_value = "5000")]
    cooling_steps: usize,

    /// Log progress every N cooling steps (0 disables).
    #[arg(long, default_value = "500")]
    progress_every: usize,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Logger for `level`; `RUST_LOG` directives take precedence.
fn logger_builder(level: LogLevel) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_filter())
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{:>5} {}", record.level(), record.args()));
    builder
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn format_point(p: &Point) -> String {
    format!("({}, {})", p.x, p.y)
}

/// Coordinate tour abbreviated to both ends, closed back to the start.
fn format_coordinate_tour(tour: &[usize], points: &[Point]) -> String {
    let n = tour.len();
    let abbreviate = n > 2 * PRINT_LIMIT;
    let mut parts = Vec::new();
    for (k, &idx) in tour.iter().enumerate() {
        if !abbreviate || k < PRINT_LIMIT || k >= n - PRINT_LIMIT {
            parts.push(format_point(&points[idx]));
        } else if k == PRINT_LIMIT {
            parts.push("...".to_string());
        }
    }
    let mut out = format!("[{}", parts.join(", "));
    if let Some(&start) = tour.first() {
        out.push_str(&format!(" -> {}", format_point(&points[start])));
    }
    out.push(']');
    out
}

/// One-line summary of the annealing budget and schedule.
fn describe_run(config: &SaConfig, seed: u64) -> String {
    format!(
        "seed={seed} iterations/temp={} total moves={} final temperature={:.6}",
        config.iterations_per_temperature,
        config.total_moves(),
        config.temperature_after(config.cooling_steps)
    )
}

fn run(cli: Cli) -> tsp_anneal::Result<()> {
    let points = match &cli.input {
        Some(path) => load_points(path)?,
        None => benchmark_points()?,
    };
    info!("loaded {} points", points.len());

    let iterations = cli
        .iterations_per_temperature
        .unwrap_or_else(|| scaled_iterations(points.len(), cli.iterations_factor));
    let seed = cli.seed.unwrap_or_else(wall_clock_seed);
    let config = SaConfig::default()
        .with_initial_temperature(cli.initial_temperature)
        .with_cooling_rate(cli.cooling_rate)
        .with_iterations_per_temperature(iterations)
        .with_cooling_steps(cli.cooling_steps)
        .with_seed(seed);

    info!("{}", describe_run(&config, seed));

    let progress_every = cli.progress_every;
    let total_steps = cli.cooling_steps;
    let mut progress = |s: &CoolingStep| {
        if progress_every > 0 && s.step % progress_every == 0 {
            info!(
                "cooling step {}/{}: t={:.4} best={:.4}",
                s.step, total_steps, s.temperature, s.best_cost
            );
        }
    };

    let mut rng = create_rng(seed);
    let start = Instant::now();
    let result = solve(&points, &config, &mut rng, &mut progress)?;
    let elapsed = start.elapsed();

    let indices: Vec<String> = result.tour.iter().map(|i| i.to_string()).collect();
    println!("points: {}", points.len());
    println!("best length: {:.4}", result.length);
    println!("moves: {} (accepted {})", result.iterations, result.accepted_moves);
    println!("tour (indices): [{}]", indices.join(", "));
    println!(
        "tour (coordinates): {}",
        format_coordinate_tour(&result.tour, &points)
    );
    println!("elapsed: {:.4} s", elapsed.as_secs_f64());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger_builder(cli.log_level).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
