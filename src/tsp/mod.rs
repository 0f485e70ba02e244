//! Euclidean Traveling Salesman Problem.
//!
//! Points carry integer coordinates; tours are closed cycles over point
//! indices, scored by Euclidean length. [`TspProblem`] binds the problem to
//! the [`crate::sa`] engine with a 2-opt neighborhood.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

mod instance;
mod point;
mod problem;
mod solver;
mod tour;

pub use instance::{benchmark_points, load_points, parse_points};
pub use point::{euclidean_distance, Point};
pub use problem::{propose_segment, TspProblem};
pub use solver::{scaled_iterations, solve, solve_seeded, TourResult};
pub use tour::{is_permutation, tour_length, two_opt_swap};
