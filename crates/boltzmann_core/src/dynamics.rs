//! Per-unit net input and deterministic attractor values.
//!
//! For every state column `k`: `net[i][k] = dot(W[i,:], state_k) - T[i]`,
//! and the attractor is the hard limit `net >= 0 -> 1, else 0`, the
//! value unit `i` would settle to if it were updated deterministically.

use crate::config::NetworkConfig;
use crate::matrix::Matrix;
use crate::state_space::StateSpace;

#[derive(Debug)]
pub struct UnitDynamics {
    /// N x S net inputs.
    net: Matrix,
    /// N rows of S attractor bits.
    attractors: Vec<Vec<u8>>,
}

/// Evaluate net inputs and attractors for every unit in every state.
pub fn evaluate(config: &NetworkConfig, space: &StateSpace) -> UnitDynamics {
    let n = config.units();
    let s = space.len();
    let w = config.weights();
    let t = config.thresholds();

    let mut net = Matrix::zeros(n, s);
    let mut attractors = vec![vec![0u8; s]; n];
    for i in 0..n {
        for (k, state) in space.iter().enumerate() {
            let mut acc = -t[i];
            for (j, &bit) in state.iter().enumerate() {
                acc += w[(i, j)] * f64::from(bit);
            }
            net[(i, k)] = acc;
            attractors[i][k] = u8::from(acc >= 0.0);
        }
    }
    UnitDynamics { net, attractors }
}

impl UnitDynamics {
    pub fn net(&self) -> &Matrix {
        &self.net
    }

    pub fn net_at(&self, unit: usize, state: usize) -> f64 {
        self.net[(unit, state)]
    }

    pub fn attractor(&self, unit: usize, state: usize) -> u8 {
        self.attractors[unit][state]
    }

    pub fn attractors(&self) -> &[Vec<u8>] {
        &self.attractors
    }

    /// Deterministic synchronous-update view: for each state, read its
    /// attractor column as a binary number (unit 0 most significant) to
    /// get the all-units-flip-together successor index. Informational;
    /// the stochastic chain never takes more than one flip per tick.
    pub fn synchronous_successors(&self) -> Vec<usize> {
        let s = self.net.cols();
        (0..s)
            .map(|k| {
                self.attractors
                    .iter()
                    .fold(0, |acc, row| (acc << 1) | row[k] as usize)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    fn reference_network() -> NetworkConfig {
        let w = Matrix::from_rows(vec![
            vec![0.0, -0.5, 0.4],
            vec![-0.5, 0.0, 0.5],
            vec![0.4, 0.5, 0.0],
        ])
        .unwrap();
        NetworkConfig::new(w, vec![-0.1, -0.2, 0.7]).unwrap()
    }

    #[test]
    fn test_net_input_values() {
        let config = reference_network();
        let space = StateSpace::enumerate(3);
        let dynamics = evaluate(&config, &space);

        // State 0 = [0,0,0]: net is just -T.
        assert!((dynamics.net_at(0, 0) - 0.1).abs() < 1e-12);
        assert!((dynamics.net_at(1, 0) - 0.2).abs() < 1e-12);
        assert!((dynamics.net_at(2, 0) + 0.7).abs() < 1e-12);

        // State 5 = [1,0,1]: unit 1 sees w10 + w12 - t1 = -0.5 + 0.5 + 0.2.
        assert!((dynamics.net_at(1, 5) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_attractor_hard_limit() {
        let config = reference_network();
        let space = StateSpace::enumerate(3);
        let dynamics = evaluate(&config, &space);

        for i in 0..3 {
            for k in 0..space.len() {
                let expected = u8::from(dynamics.net_at(i, k) >= 0.0);
                assert_eq!(dynamics.attractor(i, k), expected);
            }
        }
        // Unit 2 sees no drive in the empty state, only its 0.7 threshold.
        assert_eq!(dynamics.attractor(2, 0), 0);
    }

    #[test]
    fn test_synchronous_successors_msb_ordering() {
        let config = reference_network();
        let space = StateSpace::enumerate(3);
        let dynamics = evaluate(&config, &space);
        let successors = dynamics.synchronous_successors();

        assert_eq!(successors.len(), 8);
        for (k, &succ) in successors.iter().enumerate() {
            let expected = (0..3).fold(0, |acc, i| (acc << 1) | dynamics.attractor(i, k) as usize);
            assert_eq!(succ, expected);
        }
    }

    #[test]
    fn test_empty_network() {
        let config = NetworkConfig::new(Matrix::zeros(0, 0), Vec::new()).unwrap();
        let space = StateSpace::enumerate(0);
        let dynamics = evaluate(&config, &space);
        assert_eq!(dynamics.synchronous_successors(), vec![0]);
    }
}
