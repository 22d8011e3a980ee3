//! Assembly of the S x S state-transition probability matrix.
//!
//! Single-flip asynchronous Glauber dynamics on the N-cube: one tick
//! moves the global state by at most one coordinate. Per state, each
//! unit contributes exactly one off-diagonal cell (toward its attractor
//! if it is not already there, away from it otherwise), so no
//! probability mass is double-booked and every row sums to exactly 1.

use crate::dynamics::UnitDynamics;
use crate::flip::FlipProbabilities;
use crate::matrix::Matrix;
use crate::state_space::{unit_bit, StateSpace};

/// Build the row-stochastic transition matrix over all global states.
pub fn build(space: &StateSpace, dynamics: &UnitDynamics, flips: &FlipProbabilities) -> Matrix {
    let n = space.units();
    let s = space.len();
    let mut transition = Matrix::zeros(s, s);

    for k in 0..s {
        let mut self_loop_mass = 1.0;
        for j in 0..n {
            let bit = n - 1 - j;
            let current = unit_bit(k, j, n);
            let attractor = dynamics.attractor(j, k);

            // A unit off its attractor moves toward it; a settled unit
            // can only leave by moving away.
            let target = if current != attractor {
                attractor
            } else {
                1 - current
            };
            let candidate = if target == 1 {
                k | (1 << bit)
            } else {
                k & !(1 << bit)
            };

            let mass = flips.toward(j, k, target);
            transition[(k, candidate)] = mass;
            self_loop_mass -= mass;
        }
        transition[(k, k)] = self_loop_mass;
    }

    transition
}
