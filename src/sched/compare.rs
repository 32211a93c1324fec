//! Side-by-side comparison of all algorithms
//!
//! Runs the six algorithms against one shared input and builds a table with one
//! row per algorithm. Rows always follow [`Algorithm::ALL`]; they are never
//! reordered by performance. SCAN and LOOK take the input's direction, the other
//! four ignore it.
//!
//! The runs share no state, so they are fanned out with rayon.
//!
//! # Example
//!
//! ```
//! use seekpulse::sched::{compare, Direction, SimulationInput};
//!
//! let input = SimulationInput::new(&[82, 170, 43, 140, 24, 16, 190], 50, 200, Direction::Up)
//!     .unwrap();
//! let comparison = compare(&input);
//!
//! assert_eq!(comparison.rows.len(), 6);
//! assert_eq!(comparison.rows[0].name, "FCFS");
//! assert_eq!(comparison.rows[0].total_seek_time, 642);
//! ```

use super::{Algorithm, SimulationInput, SimulationResult};
use rayon::prelude::*;
use serde::Serialize;

/// One row of the comparison table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub algorithm: Algorithm,
    pub name: String,
    pub total_seek_time: u64,
    pub average_seek_time: f64,
}

impl From<&SimulationResult> for ComparisonRow {
    fn from(result: &SimulationResult) -> Self {
        Self {
            algorithm: result.algorithm,
            name: result.algorithm.short_name().to_string(),
            total_seek_time: result.total_seek_time,
            average_seek_time: result.average_seek_time,
        }
    }
}

/// Comparison table plus the full per-algorithm results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    pub results: Vec<SimulationResult>,
}

impl Comparison {
    /// Row with the lowest total seek time (earliest row on ties)
    pub fn best(&self) -> Option<&ComparisonRow> {
        self.rows.iter().min_by_key(|row| row.total_seek_time)
    }

    /// Full result for one algorithm
    pub fn result(&self, algorithm: Algorithm) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }
}

/// Run every algorithm against `input`
pub fn compare(input: &SimulationInput) -> Comparison {
    let results: Vec<SimulationResult> = Algorithm::ALL[..]
        .par_iter()
        .map(|&algorithm| input.run(algorithm))
        .collect();

    let rows = results.iter().map(ComparisonRow::from).collect();

    Comparison { rows, results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::Direction;

    fn reference_input(direction: Direction) -> SimulationInput {
        SimulationInput::new(&[82, 170, 43, 140, 24, 16, 190], 50, 200, direction).unwrap()
    }

    #[test]
    fn test_rows_in_fixed_order() {
        let comparison = compare(&reference_input(Direction::Up));
        let order: Vec<Algorithm> = comparison.rows.iter().map(|r| r.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());

        let names: Vec<&str> = comparison.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["FCFS", "SSTF", "SCAN", "C-SCAN", "LOOK", "C-LOOK"]);
    }

    #[test]
    fn test_rows_match_individual_runs() {
        let input = reference_input(Direction::Up);
        let comparison = compare(&input);

        for (row, algorithm) in comparison.rows.iter().zip(Algorithm::ALL) {
            let single = input.run(algorithm);
            assert_eq!(row.total_seek_time, single.total_seek_time);
            assert_eq!(row.average_seek_time, single.average_seek_time);
            assert_eq!(comparison.result(algorithm), Some(&single));
        }
    }

    #[test]
    fn test_reference_totals() {
        let comparison = compare(&reference_input(Direction::Up));
        let totals: Vec<u64> = comparison.rows.iter().map(|r| r.total_seek_time).collect();
        assert_eq!(totals, vec![642, 208, 332, 391, 314, 341]);
    }

    #[test]
    fn test_direction_only_affects_scan_and_look() {
        let up = compare(&reference_input(Direction::Up));
        let down = compare(&reference_input(Direction::Down));

        for (a, b) in up.rows.iter().zip(down.rows.iter()) {
            if a.algorithm.uses_direction() {
                assert_ne!(a.total_seek_time, b.total_seek_time);
            } else {
                assert_eq!(a.total_seek_time, b.total_seek_time);
            }
        }
    }

    #[test]
    fn test_best_row() {
        let comparison = compare(&reference_input(Direction::Up));
        assert_eq!(comparison.best().map(|r| r.algorithm), Some(Algorithm::Sstf));
    }

    #[test]
    fn test_empty_input() {
        let input = SimulationInput::new(&[], 50, 200, Direction::Up).unwrap();
        let comparison = compare(&input);
        assert_eq!(comparison.rows.len(), 6);
        assert!(comparison.rows.iter().all(|r| r.average_seek_time == 0.0));
        assert_eq!(comparison.best().map(|r| r.algorithm), Some(Algorithm::Fcfs));
    }
}
