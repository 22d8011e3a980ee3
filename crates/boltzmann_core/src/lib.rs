//! Exact Markov-chain analysis of small Boltzmann machines.
//!
//! From an immutable `(N, W, T)` triple the pipeline derives the full
//! 2^N state space, per-unit net inputs and attractors, per-state
//! energies, stochastic single-flip probabilities under a logistic
//! rule, the row-stochastic transition matrix of the resulting Glauber
//! chain, and its stationary distribution by matrix powering.
//!
//! Everything is deterministic and single-threaded; the state space is
//! enumerated explicitly, so cost is exponential in N by design and
//! guarded by `SimulationOptions::max_units`.

pub mod chain;
pub mod config;
pub mod dynamics;
pub mod energy;
pub mod error;
pub mod flip;
pub mod matrix;
pub mod state_space;
pub mod stationary;

pub use config::{NetworkConfig, SimulationOptions};
pub use error::CoreError;

use dynamics::UnitDynamics;
use flip::FlipProbabilities;
use matrix::Matrix;
use state_space::StateSpace;
use stationary::StationaryOutcome;

/// Every structure derived from one network: the full forward pipeline
/// output, consumed by reporting.
#[derive(Debug)]
pub struct NetworkAnalysis {
    pub space: StateSpace,
    pub dynamics: UnitDynamics,
    /// Deterministic all-units-flip-together successor per state.
    pub synchronous_successors: Vec<usize>,
    pub energies: Vec<f64>,
    pub flips: FlipProbabilities,
    pub transition: Matrix,
    pub stationary: StationaryOutcome,
}

/// Run the whole pipeline: enumeration, dynamics, energies, flip
/// probabilities, chain assembly, stationary solve.
pub fn analyze(
    config: &NetworkConfig,
    options: &SimulationOptions,
) -> Result<NetworkAnalysis, CoreError> {
    let n = config.units();
    if n > options.max_units {
        return Err(CoreError::TooManyUnits {
            n,
            max: options.max_units,
        });
    }

    let space = StateSpace::enumerate(n);
    let dynamics = dynamics::evaluate(config, &space);
    let energies = energy::state_energies(config, &space);
    let flips = flip::evaluate(dynamics.net(), options.temperature);
    let transition = chain::build(&space, &dynamics, &flips);
    let stationary = stationary::solve(&transition, options.epsilon, options.max_iterations);
    let synchronous_successors = dynamics.synchronous_successors();

    Ok(NetworkAnalysis {
        space,
        dynamics,
        synchronous_successors,
        energies,
        flips,
        transition,
        stationary,
    })
}
