//! Core traits for Simulated Annealing.

use crate::random::RandomSource;

/// Defines a Simulated Annealing problem.
///
/// The user implements neighbor generation and cost evaluation.
/// The SA framework handles temperature management, the acceptance
/// criterion, and cooling.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use tsp_anneal::random::RandomSource;
/// use tsp_anneal::sa::SaProblem;
///
/// struct Line;
///
/// impl SaProblem for Line {
///     type Solution = i64;
///
///     fn initial_solution<R: RandomSource>(&self, rng: &mut R) -> i64 {
///         rng.index(100) as i64
///     }
///
///     fn cost(&self, x: &i64) -> f64 {
///         x.abs() as f64
///     }
///
///     fn neighbor<R: RandomSource>(&self, x: &i64, rng: &mut R) -> i64 {
///         if rng.index(2) == 0 { x - 1 } else { x + 1 }
///     }
/// }
/// ```
pub trait SaProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Creates a random initial solution.
    fn initial_solution<R: RandomSource>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution.
    ///
    /// Must return a new solution and leave `solution` untouched.
    fn neighbor<R: RandomSource>(&self, solution: &Self::Solution, rng: &mut R)
        -> Self::Solution;
}

/// Snapshot reported to an [`AnnealObserver`] after each cooling step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingStep {
    /// 1-based index of the cooling step just finished.
    pub step: usize,
    /// Temperature after the decay of this step.
    pub temperature: f64,
    /// Cost of the accepted working solution.
    pub current_cost: f64,
    /// Best cost found so far.
    pub best_cost: f64,
}

/// Receives progress once per cooling step.
pub trait AnnealObserver {
    fn on_cooling_step(&mut self, step: &CoolingStep);
}

impl<F: FnMut(&CoolingStep)> AnnealObserver for F {
    fn on_cooling_step(&mut self, step: &CoolingStep) {
        self(step)
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl AnnealObserver for NoopObserver {
    fn on_cooling_step(&mut self, _step: &CoolingStep) {}
}
