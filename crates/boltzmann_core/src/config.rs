//! Immutable network definition and simulation options.
//!
//! The `(N, W, T)` triple is supplied once per run and validated here;
//! every downstream structure is a pure function of it. Weight symmetry
//! and a zero diagonal are a modeling assumption, not enforced.

use crate::error::CoreError;
use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};

/// Default temperature Θ of the logistic acceptance rule.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Default convergence tolerance of the stationary solver.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Default iteration cap of the stationary solver.
pub const DEFAULT_MAX_ITERATIONS: usize = 9999;

/// Default refusal limit on the unit count (2^16 states).
pub const DEFAULT_MAX_UNITS: usize = 16;

/// A fully-connected binary network: per-unit thresholds plus a square
/// weight matrix. Unit count is taken from the threshold vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    n: usize,
    weights: Matrix,
    thresholds: Vec<f64>,
}

impl NetworkConfig {
    pub fn new(weights: Matrix, thresholds: Vec<f64>) -> Result<Self, CoreError> {
        let n = thresholds.len();
        if weights.rows() != n || weights.cols() != n {
            return Err(CoreError::WeightShape {
                rows: weights.rows(),
                cols: weights.cols(),
                n,
            });
        }
        Ok(Self {
            n,
            weights,
            thresholds,
        })
    }

    pub fn units(&self) -> usize {
        self.n
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }
}

/// Tunable parameters of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOptions {
    /// Temperature Θ in `p1 = 1 / (1 + exp(-net / Θ))`.
    pub temperature: f64,
    /// Per-column agreement tolerance of the stationary solver.
    pub epsilon: f64,
    /// Iteration cap; exceeding it yields an explicit non-converged outcome.
    pub max_iterations: usize,
    /// Networks above this unit count are refused (exponential state space).
    pub max_units: usize,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_units: DEFAULT_MAX_UNITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let w = Matrix::zeros(2, 2);
        let config = NetworkConfig::new(w, vec![0.1, -0.2]).unwrap();
        assert_eq!(config.units(), 2);
        assert_eq!(config.thresholds(), &[0.1, -0.2]);
    }

    #[test]
    fn test_weight_shape_mismatch() {
        let w = Matrix::zeros(3, 3);
        let err = NetworkConfig::new(w, vec![0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            CoreError::WeightShape {
                rows: 3,
                cols: 3,
                n: 2
            }
        );
    }

    #[test]
    fn test_empty_network_is_valid() {
        let config = NetworkConfig::new(Matrix::zeros(0, 0), Vec::new()).unwrap();
        assert_eq!(config.units(), 0);
    }
}
