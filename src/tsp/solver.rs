//! Entry points for solving a point set.

use super::point::Point;
use super::problem::TspProblem;
use super::tour::is_permutation;
use crate::error::Result;
use crate::random::{create_rng, RandomSource};
use crate::sa::{AnnealObserver, NoopObserver, SaConfig, SaRunner};

/// Best tour found by a run, with run statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourResult {
    /// Permutation of `0..n` read as a closed cycle.
    pub tour: Vec<usize>,
    /// Length of `tour`.
    pub length: f64,
    /// Move attempts made.
    pub iterations: u64,
    /// Moves accepted by the Metropolis criterion.
    pub accepted_moves: u64,
    /// Temperature after the last cooling step.
    pub final_temperature: f64,
}

impl TourResult {
    /// Identity tour with zero length, for point sets with fewer than 2 points.
    fn trivial(n: usize, temperature: f64) -> Self {
        Self {
            tour: (0..n).collect(),
            length: 0.0,
            iterations: 0,
            accepted_moves: 0,
            final_temperature: temperature,
        }
    }
}

/// Iterations per temperature scaled linearly with the number of points.
pub fn scaled_iterations(n_points: usize, factor: usize) -> usize {
    n_points.saturating_mul(factor)
}

/// Anneals `points` with a caller-supplied random source and observer.
///
/// With fewer than 2 points the identity tour of length 0 is returned and
/// `rng` is not touched.
pub fn solve<R, O>(
    points: &[Point],
    config: &SaConfig,
    rng: &mut R,
    observer: &mut O,
) -> Result<TourResult>
where
    R: RandomSource,
    O: AnnealObserver,
{
    config.validate()?;

    if points.len() < 2 {
        return Ok(TourResult::trivial(points.len(), config.initial_temperature));
    }

    let problem = TspProblem::new(points);
    let result = SaRunner::run_with(&problem, config, rng, observer)?;
    debug_assert!(is_permutation(&result.best, points.len()));

    Ok(TourResult {
        tour: result.best,
        length: result.best_cost,
        iterations: result.iterations,
        accepted_moves: result.accepted_moves,
        final_temperature: result.final_temperature,
    })
}

/// Anneals `points` with a generator seeded from `config.seed` (or entropy).
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::SaConfig;
/// use tsp_anneal::tsp::{solve_seeded, Point};
///
/// let points = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 1), Point::new(1, 0)];
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_cooling_rate(0.9)
///     .with_iterations_per_temperature(50)
///     .with_cooling_steps(50)
///     .with_seed(7);
/// let result = solve_seeded(&points, &config).unwrap();
/// assert!((result.length - 4.0).abs() < 1e-9);
/// ```
pub fn solve_seeded(points: &[Point], config: &SaConfig) -> Result<TourResult> {
    let mut rng = match config.seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    };
    solve(points, config, &mut rng, &mut NoopObserver)
}
