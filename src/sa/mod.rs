//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! The schedule is a fixed geometric decay over a fixed number of cooling
//! steps; there is no convergence-based early stop.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{metropolis_accept, SaResult, SaRunner};
pub use types::{AnnealObserver, CoolingStep, NoopObserver, SaProblem};
