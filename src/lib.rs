//! Euclidean TSP approximation by simulated annealing.
//!
//! - **Simulated Annealing (SA)**: generic single-solution trajectory
//!   optimization with geometric cooling and the Metropolis criterion.
//! - **TSP**: integer points, closed-tour evaluation, and the 2-opt
//!   segment-reversal neighborhood, bound to the SA engine.
//! - **Random source**: the two distributions the engine draws from,
//!   injectable so runs are reproducible from a seed.
//!
//! # Example
//!
//! ```
//! use tsp_anneal::sa::SaConfig;
//! use tsp_anneal::tsp::{parse_points, solve_seeded};
//!
//! let points = parse_points("0 0  0 3  4 3  4 0").unwrap();
//! let config = SaConfig::default()
//!     .with_initial_temperature(10.0)
//!     .with_cooling_rate(0.9)
//!     .with_iterations_per_temperature(40)
//!     .with_cooling_steps(60)
//!     .with_seed(1);
//!
//! let result = solve_seeded(&points, &config).unwrap();
//! assert!((result.length - 14.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod random;
pub mod sa;
pub mod tsp;

pub use error::{Error, Result};
