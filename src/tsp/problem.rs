//! The Euclidean TSP as an [`SaProblem`].

use super::point::Point;
use super::tour::{tour_length, two_opt_swap};
use crate::random::RandomSource;
use crate::sa::SaProblem;
use rand::seq::SliceRandom;

/// Closed-tour TSP over a borrowed point set.
///
/// Solutions are permutations of `0..points.len()`. Neighbors are 2-opt
/// reversals of a random segment.
#[derive(Debug, Clone, Copy)]
pub struct TspProblem<'a> {
    points: &'a [Point],
}

impl<'a> TspProblem<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        Self { points }
    }
}

/// Draws two distinct positions in `[0, n)` and orders them so `i < j`.
///
/// `j` is resampled until it differs from `i`. Requires `n >= 2`.
pub fn propose_segment<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(n >= 2);
    let i = rng.index(n);
    let mut j = rng.index(n);
    while i == j {
        j = rng.index(n);
    }
    if i < j {
        (i, j)
    } else {
        (j, i)
    }
}

impl SaProblem for TspProblem<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: RandomSource>(&self, rng: &mut R) -> Vec<usize> {
        let mut tour: Vec<usize> = (0..self.points.len()).collect();
        tour.shuffle(rng);
        tour
    }

    fn cost(&self, tour: &Vec<usize>) -> f64 {
        tour_length(tour, self.points)
    }

    fn neighbor<R: RandomSource>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        if tour.len() < 2 {
            return tour.clone();
        }
        let (i, j) = propose_segment(tour.len(), rng);
        two_opt_swap(tour, i, j)
    }
}
