//! Loading point sets from text.
//!
//! The format is a whitespace-separated stream of integers read in pairs
//! `x y`. Line breaks carry no meaning. Lines starting with `#` are skipped.

use std::fs;
use std::path::Path;

use super::point::Point;
use crate::error::{Error, Result};

const BENCHMARK_DATA: &str = include_str!("../../data/points131.txt");

/// Parses integer coordinate pairs.
///
/// # Examples
///
/// ```
/// use tsp_anneal::tsp::{parse_points, Point};
///
/// let points = parse_points("0 0\n3 4\n").unwrap();
/// assert_eq!(points, vec![Point::new(0, 0), Point::new(3, 4)]);
/// ```
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut coords = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            let value = token.parse::<i32>().map_err(|e| {
                Error::invalid_data(format!(
                    "line {}: {token:?} is not an integer coordinate ({e})",
                    line_no + 1
                ))
            })?;
            coords.push(value);
        }
    }

    if coords.len() % 2 != 0 {
        return Err(Error::invalid_data(format!(
            "odd number of coordinates ({}): last point is missing its y value",
            coords.len()
        )));
    }

    Ok(coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}

/// Reads and parses a point file.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_points(&text)
}

/// The 131-point data set used for regression runs and benchmarks.
pub fn benchmark_points() -> Result<Vec<Point>> {
    parse_points(BENCHMARK_DATA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs_across_lines() {
        let points = parse_points("1 2 3\n4\n\n  -5   6  ").unwrap();
        assert_eq!(
            points,
            vec![Point::new(1, 2), Point::new(3, 4), Point::new(-5, 6)]
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blank() {
        let points = parse_points("# x y\n\n10 20\n   # trailing\n").unwrap();
        assert_eq!(points, vec![Point::new(10, 20)]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_points("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_bad_token() {
        let err = parse_points("1 2\n3 x\n").unwrap_err();
        match err {
            Error::InvalidData(msg) => assert!(msg.starts_with("line 2"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_dangling_coordinate() {
        assert!(matches!(
            parse_points("1 2 3"),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_points("/nonexistent/tsp-anneal/points.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_benchmark_points() {
        let points = benchmark_points().unwrap();
        assert_eq!(points.len(), 131);
        assert_eq!(points[0], Point::new(34, 15));
        assert_eq!(points[130], Point::new(28, 28));
    }
}
