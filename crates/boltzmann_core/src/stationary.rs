//! Stationary distribution by iterative matrix powering.
//!
//! The accumulator starts at `T²` and is repeatedly right-multiplied by
//! `T`. After each multiplication every column is checked: all rows
//! must agree with row 0 within epsilon. The loop stops at the first
//! iteration satisfying this for every column simultaneously, and that
//! index is the reported iteration count. Assumes the chain is
//! irreducible and aperiodic; without that the rows never agree and the
//! solver reports non-convergence instead of a possibly-wrong vector.

use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};

/// Result of one stationary solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationaryOutcome {
    /// Row 0 of the last accumulator. Only a stationary distribution
    /// when `converged` is true.
    pub distribution: Vec<f64>,
    /// Multiplications performed past the initial square.
    pub iterations: usize,
    /// False when `max_iterations` elapsed without column agreement.
    pub converged: bool,
}

/// Power-iterate `transition` until all rows agree within `epsilon`,
/// or `max_iterations` multiplications have been performed.
pub fn solve(transition: &Matrix, epsilon: f64, max_iterations: usize) -> StationaryOutcome {
    let mut accumulator = transition.matmul(transition);
    for i in 0..max_iterations {
        accumulator = accumulator.matmul(transition);
        if rows_agree(&accumulator, epsilon) {
            return StationaryOutcome {
                distribution: accumulator.row(0).to_vec(),
                iterations: i + 1,
                converged: true,
            };
        }
    }
    StationaryOutcome {
        distribution: accumulator.row(0).to_vec(),
        iterations: max_iterations,
        converged: false,
    }
}

/// Every column's values within `epsilon` of row 0's value.
fn rows_agree(m: &Matrix, epsilon: f64) -> bool {
    let first = m.row(0);
    for r in 1..m.rows() {
        for (c, &value) in m.row(r).iter().enumerate() {
            if (first[c] - value).abs() > epsilon {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_state_chain() {
        // p(0->1) = 0.3, p(1->0) = 0.6; stationary = [2/3, 1/3].
        let t = Matrix::from_rows(vec![vec![0.7, 0.3], vec![0.6, 0.4]]).unwrap();
        let outcome = solve(&t, 1e-12, 9999);

        assert!(outcome.converged);
        assert!(outcome.iterations < 9999);
        assert!((outcome.distribution[0] - 2.0 / 3.0).abs() < 1e-9);
        assert!((outcome.distribution[1] - 1.0 / 3.0).abs() < 1e-9);

        let total: f64 = outcome.distribution.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_left_fixed_point() {
        let t = Matrix::from_rows(vec![
            vec![0.5, 0.25, 0.25],
            vec![0.2, 0.6, 0.2],
            vec![0.3, 0.3, 0.4],
        ])
        .unwrap();
        let outcome = solve(&t, 1e-12, 9999);
        assert!(outcome.converged);

        for c in 0..3 {
            let mapped: f64 = (0..3).map(|r| outcome.distribution[r] * t[(r, c)]).sum();
            assert!((mapped - outcome.distribution[c]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_periodic_chain_reports_non_convergence() {
        // A pure swap is periodic: its powers alternate and never settle.
        let t = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let outcome = solve(&t, 1e-12, 50);
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 50);
    }

    #[test]
    fn test_trivial_chain_converges_immediately() {
        let t = Matrix::from_rows(vec![vec![1.0]]).unwrap();
        let outcome = solve(&t, 1e-12, 9999);
        assert!(outcome.converged);
        assert_eq!(outcome.iterations, 1);
        assert_eq!(outcome.distribution, vec![1.0]);
    }
}
