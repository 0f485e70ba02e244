//! SA execution loop.

use super::config::SaConfig;
use super::types::{AnnealObserver, CoolingStep, NoopObserver, SaProblem};
use crate::error::Result;
use crate::random::{create_rng, RandomSource};
use log::{debug, info};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: u64,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: u64,

    /// Number of strictly improving moves.
    pub improving_moves: u64,

    /// Best cost at the start and after every cooling step.
    pub cost_history: Vec<f64>,
}

/// Metropolis acceptance criterion.
///
/// Improving moves (`delta < 0`) are always accepted. Otherwise the move is
/// accepted when `draw < exp(-delta / temperature)`, where `draw` is uniform
/// in `[0, 1)`. At `delta == 0` the probability is 1. As the temperature
/// approaches zero, `exp` underflows to 0 and worsening moves are rejected.
pub fn metropolis_accept(delta: f64, temperature: f64, draw: f64) -> bool {
    if delta < 0.0 {
        true
    } else if temperature > 0.0 {
        draw < (-delta / temperature).exp()
    } else {
        false
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed` (or entropy).
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with(problem, config, &mut rng, &mut NoopObserver)
    }

    /// Runs SA with a caller-supplied random source and progress observer.
    ///
    /// `config.seed` is ignored; the caller owns seeding of `rng`.
    pub fn run_with<P, R, O>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<SaResult<P::Solution>>
    where
        P: SaProblem,
        R: RandomSource,
        O: AnnealObserver,
    {
        config.validate()?;

        // Initialize
        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0u64;
        let mut accepted_moves = 0u64;
        let mut improving_moves = 0u64;

        let mut cost_history = Vec::with_capacity(config.cooling_steps + 1);
        cost_history.push(best_cost);

        info!(
            "annealing start: cost={current_cost:.4} t0={} rate={} iters/temp={} steps={}",
            config.initial_temperature,
            config.cooling_rate,
            config.iterations_per_temperature,
            config.cooling_steps
        );

        for step in 0..config.cooling_steps {
            for _ in 0..config.iterations_per_temperature {
                let neighbor = problem.neighbor(&current, rng);
                let neighbor_cost = problem.cost(&neighbor);
                let delta = neighbor_cost - current_cost;

                // The uniform draw is only consumed for non-improving moves.
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    metropolis_accept(delta, temperature, rng.unit())
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }

                total_iterations += 1;
            }

            // Cool down
            temperature *= config.cooling_rate;
            cost_history.push(best_cost);

            let snapshot = CoolingStep {
                step: step + 1,
                temperature,
                current_cost,
                best_cost,
            };
            debug!(
                "step {}: t={:.6} current={:.4} best={:.4}",
                snapshot.step, snapshot.temperature, snapshot.current_cost, snapshot.best_cost
            );
            observer.on_cooling_step(&snapshot);
        }

        info!(
            "annealing done: best={best_cost:.4} moves={total_iterations} accepted={accepted_moves}"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}
