//! Hopfield-style scalar energy per global state.
//!
//! `E(s) = -0.5 * s'Ws + s'T`. Under the symmetric zero-diagonal
//! modeling assumption this is the energy the stochastic dynamics
//! descend on average; the all-zero state always has energy 0.

use crate::config::NetworkConfig;
use crate::state_space::StateSpace;

/// Energy of one state vector. Never mutates W or T.
pub fn energy(config: &NetworkConfig, state: &[u8]) -> f64 {
    let w = config.weights();
    let t = config.thresholds();

    let mut quadratic = 0.0;
    for (i, &si) in state.iter().enumerate() {
        if si == 0 {
            continue;
        }
        for (j, &sj) in state.iter().enumerate() {
            if sj != 0 {
                quadratic += w[(i, j)];
            }
        }
    }

    let linear: f64 = state
        .iter()
        .zip(t)
        .map(|(&si, &ti)| f64::from(si) * ti)
        .sum();

    -0.5 * quadratic + linear
}

/// Energies of every state in canonical order.
pub fn state_energies(config: &NetworkConfig, space: &StateSpace) -> Vec<f64> {
    space.iter().map(|state| energy(config, state)).collect()
}
