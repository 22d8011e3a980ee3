//! Stochastic single-unit flip probabilities.
//!
//! One asynchronous tick examines a uniformly chosen unit (probability
//! 1/N each) and sets it to 1 with the logistic acceptance probability
//! `1 / (1 + exp(-net / Θ))`. Both outcomes are pre-divided by N here,
//! so each unit's pair sums to exactly 1/N and the assembled chain rows
//! stay stochastic.

use crate::matrix::Matrix;

#[derive(Debug)]
pub struct FlipProbabilities {
    /// N x S probability of the examined unit ending at 0.
    to_zero: Matrix,
    /// N x S probability of the examined unit ending at 1.
    to_one: Matrix,
}

/// Evaluate both flip outcomes for every unit in every state from the
/// net-input matrix (N rows, S columns).
pub fn evaluate(net: &Matrix, temperature: f64) -> FlipProbabilities {
    let n = net.rows();
    let s = net.cols();
    let mut to_zero = Matrix::zeros(n, s);
    let mut to_one = Matrix::zeros(n, s);
    for i in 0..n {
        for k in 0..s {
            let p1 = 1.0 / (1.0 + (-net[(i, k)] / temperature).exp());
            to_one[(i, k)] = p1 / n as f64;
            to_zero[(i, k)] = (1.0 - p1) / n as f64;
        }
    }
    FlipProbabilities { to_zero, to_one }
}

impl FlipProbabilities {
    pub fn to_zero(&self, unit: usize, state: usize) -> f64 {
        self.to_zero[(unit, state)]
    }

    pub fn to_one(&self, unit: usize, state: usize) -> f64 {
        self.to_one[(unit, state)]
    }

    /// Probability mass of the examined unit ending at `value`.
    pub fn toward(&self, unit: usize, state: usize, value: u8) -> f64 {
        if value == 1 {
            self.to_one(unit, state)
        } else {
            self.to_zero(unit, state)
        }
    }

    pub fn to_zero_matrix(&self) -> &Matrix {
        &self.to_zero
    }

    pub fn to_one_matrix(&self) -> &Matrix {
        &self.to_one
    }
}
