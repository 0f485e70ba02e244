//! Tour evaluation and the 2-opt move.
//!
//! A tour is a permutation of point indices read as a closed cycle: the edge
//! from the last entry back to the first is always counted.

use super::point::{euclidean_distance, Point};

/// Total length of the closed tour.
///
/// - fewer than 2 entries: `0.0`
/// - exactly 2 entries: twice the distance between them (there and back)
/// - otherwise: sum of consecutive edges, wrapping from last to first
///
/// # Panics
///
/// Panics if an index in `tour` is out of range for `points`.
pub fn tour_length(tour: &[usize], points: &[Point]) -> f64 {
    match tour.len() {
        0 | 1 => 0.0,
        2 => 2.0 * euclidean_distance(&points[tour[0]], &points[tour[1]]),
        n => (0..n)
            .map(|k| euclidean_distance(&points[tour[k]], &points[tour[(k + 1) % n]]))
            .sum(),
    }
}

/// Returns a copy of `tour` with the segment `[i, j]` (inclusive) reversed.
///
/// Callers pass `i <= j`. `i == j` yields an unchanged copy.
///
/// # Examples
///
/// ```
/// use tsp_anneal::tsp::two_opt_swap;
///
/// assert_eq!(two_opt_swap(&[0, 1, 2, 3, 4], 1, 3), vec![0, 3, 2, 1, 4]);
/// ```
pub fn two_opt_swap(tour: &[usize], i: usize, j: usize) -> Vec<usize> {
    debug_assert!(i <= j && j < tour.len());
    let mut new_tour = tour.to_vec();
    new_tour[i..=j].reverse();
    new_tour
}

/// Whether `tour` contains every index in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in tour {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(1, 0),
        ]
    }

    #[test]
    fn test_length_trivial() {
        let pts = square();
        assert_eq!(tour_length(&[], &pts), 0.0);
        assert_eq!(tour_length(&[2], &pts), 0.0);
    }

    #[test]
    fn test_length_two_points_is_there_and_back() {
        let pts = vec![Point::new(0, 0), Point::new(3, 4)];
        assert!((tour_length(&[0, 1], &pts) - 10.0).abs() < 1e-12);
        assert!((tour_length(&[1, 0], &pts) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_length_square_perimeter_and_crossing() {
        let pts = square();
        assert!((tour_length(&[0, 1, 2, 3], &pts) - 4.0).abs() < 1e-12);
        let crossed = 2.0 + 2.0 * 2f64.sqrt();
        assert!((tour_length(&[0, 2, 1, 3], &pts) - crossed).abs() < 1e-12);
    }

    #[test]
    fn test_length_includes_closing_edge() {
        let pts = vec![Point::new(0, 0), Point::new(3, 0), Point::new(3, 4)];
        assert!((tour_length(&[0, 1, 2], &pts) - 12.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn test_length_out_of_range_panics() {
        let pts = square();
        tour_length(&[0, 1, 9], &pts);
    }

    #[test]
    fn test_two_opt_literal_and_back() {
        let t = vec![0, 1, 2, 3, 4];
        let once = two_opt_swap(&t, 1, 3);
        assert_eq!(once, vec![0, 3, 2, 1, 4]);
        assert_eq!(two_opt_swap(&once, 1, 3), t);
        // input untouched
        assert_eq!(t, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_two_opt_same_index_is_noop() {
        let t = vec![3, 1, 0, 2];
        assert_eq!(two_opt_swap(&t, 2, 2), t);
    }

    #[test]
    fn test_two_opt_full_reversal_keeps_length() {
        let pts = square();
        let t = vec![0, 1, 2, 3];
        let r = two_opt_swap(&t, 0, 3);
        assert_eq!(r, vec![3, 2, 1, 0]);
        assert!((tour_length(&r, &pts) - tour_length(&t, &pts)).abs() < 1e-12);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[], 0));
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }

    fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((-1000i32..1000, -1000i32..1000), 3..40)
            .prop_map(|v| v.into_iter().map(Point::from).collect())
    }

    proptest! {
        #[test]
        fn prop_two_opt_is_involution_and_permutation(
            n in 2usize..60,
            a in 0usize..60,
            b in 0usize..60,
        ) {
            let (i, j) = {
                let (a, b) = (a % n, b % n);
                if a <= b { (a, b) } else { (b, a) }
            };
            let t: Vec<usize> = (0..n).rev().collect();
            let once = two_opt_swap(&t, i, j);
            prop_assert!(is_permutation(&once, n));
            prop_assert_eq!(two_opt_swap(&once, i, j), t);
        }

        #[test]
        fn prop_length_deterministic_and_nonnegative(pts in points_strategy()) {
            let tour: Vec<usize> = (0..pts.len()).collect();
            let a = tour_length(&tour, &pts);
            let b = tour_length(&tour, &pts);
            prop_assert!(a >= 0.0);
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }

        #[test]
        fn prop_length_rotation_invariant(pts in points_strategy(), shift in 0usize..40) {
            let n = pts.len();
            let tour: Vec<usize> = (0..n).collect();
            let mut rotated = tour.clone();
            rotated.rotate_left(shift % n);
            let a = tour_length(&tour, &pts);
            let b = tour_length(&rotated, &pts);
            prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
        }
    }
}
