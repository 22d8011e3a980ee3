//! Report formatting.
//!
//! Renders every intermediate and final structure of one analysis as
//! aligned plaintext tables, or as a single JSON document. Layout is a
//! presentation concern only; all numbers come straight from the core.

use boltzmann_core::stationary::StationaryOutcome;
use boltzmann_core::{NetworkAnalysis, NetworkConfig, SimulationOptions};
use serde::Serialize;
use std::io::{self, Write};

/// Full human-readable report on `out`.
pub fn write_report(
    out: &mut impl Write,
    config: &NetworkConfig,
    analysis: &NetworkAnalysis,
) -> io::Result<()> {
    let n = config.units();
    let s = analysis.space.len();

    writeln!(out, "Thresholds\n")?;
    for &t in config.thresholds() {
        write!(out, "{:5.1}", t)?;
    }
    writeln!(out)?;

    writeln!(out, "\nWeights\n")?;
    for i in 0..n {
        for j in 0..n {
            write!(out, "{:5.1}", config.weights()[(i, j)])?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\nStates\n")?;
    for i in 0..n {
        for k in 0..s {
            write!(out, "{:4}", analysis.space.state(k)[i])?;
        }
        writeln!(out)?;
    }

    // W * S is net input with the threshold added back.
    writeln!(out, "\nW * S\n")?;
    for i in 0..n {
        for k in 0..s {
            let value = analysis.dynamics.net_at(i, k) + config.thresholds()[i];
            write!(out, "{:5.1}", value)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\nW * S - T\n")?;
    for i in 0..n {
        for k in 0..s {
            write!(out, "{:5.1}", analysis.dynamics.net_at(i, k))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\nHL[ W * S - T ]\n")?;
    for i in 0..n {
        for k in 0..s {
            write!(out, "{:4}", analysis.dynamics.attractor(i, k))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\nSynchronous Transitions\n")?;
    for k in 0..s {
        write!(out, "{:4}", k)?;
    }
    writeln!(out)?;
    for &succ in &analysis.synchronous_successors {
        write!(out, "{:4}", succ)?;
    }
    writeln!(out)?;

    writeln!(out, "\nEnergies\n")?;
    for k in 0..s {
        for &bit in analysis.space.state(k) {
            write!(out, "{:5}", bit)?;
        }
        writeln!(out, "   =   {:4.1}", analysis.energies[k])?;
    }

    writeln!(out, "\nProbabilities\n")?;
    for k in 0..s {
        for &bit in analysis.space.state(k) {
            write!(out, "{:3}", bit)?;
        }
        writeln!(out, "      P[0]     P[1]")?;
        writeln!(out, "|-")?;
        for j in 0..n {
            // Candidate: this state with unit j settled at its attractor.
            for (i, &bit) in analysis.space.state(k).iter().enumerate() {
                let value = if i == j {
                    analysis.dynamics.attractor(j, k)
                } else {
                    bit
                };
                write!(out, "{:3}", value)?;
            }
            write!(out, "  ")?;
            write!(out, "{:9.4}", analysis.flips.to_zero(j, k))?;
            writeln!(out, "{:9.4}", analysis.flips.to_one(j, k))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\nProbability Transition Matrix\n")?;
    for k in 0..s {
        write!(out, "{:8}", k)?;
    }
    writeln!(out, "\n  +-")?;
    for i in 0..s {
        write!(out, "{:<3}", i)?;
        for j in 0..s {
            let p = analysis.transition[(i, j)];
            if p != 0.0 {
                write!(out, "{:7.4} ", p)?;
            } else {
                write!(out, "   --   ")?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "\nSteady State Vector\n")?;
    write!(out, "   ")?;
    for &p in &analysis.stationary.distribution {
        write!(out, "{:8.4}", p)?;
    }
    writeln!(out)?;
    writeln!(out, "\n   iteration count: {}", analysis.stationary.iterations)?;
    if !analysis.stationary.converged {
        writeln!(
            out,
            "   WARNING: did not converge; the vector above is not stationary"
        )?;
    }

    Ok(())
}

/// Machine-readable rendering of the same analysis.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub units: usize,
    pub options: SimulationOptions,
    pub thresholds: Vec<f64>,
    pub weights: Vec<Vec<f64>>,
    pub states: Vec<Vec<u8>>,
    pub net_input: Vec<Vec<f64>>,
    pub attractors: Vec<Vec<u8>>,
    pub synchronous_transitions: Vec<usize>,
    pub energies: Vec<f64>,
    pub flip_to_zero: Vec<Vec<f64>>,
    pub flip_to_one: Vec<Vec<f64>>,
    pub transition_matrix: Vec<Vec<f64>>,
    pub stationary: StationaryOutcome,
}

pub fn json_report(
    config: &NetworkConfig,
    options: &SimulationOptions,
    analysis: &NetworkAnalysis,
) -> JsonReport {
    JsonReport {
        units: config.units(),
        options: options.clone(),
        thresholds: config.thresholds().to_vec(),
        weights: config.weights().to_rows(),
        states: analysis.space.iter().map(|s| s.to_vec()).collect(),
        net_input: analysis.dynamics.net().to_rows(),
        attractors: analysis.dynamics.attractors().to_vec(),
        synchronous_transitions: analysis.synchronous_successors.clone(),
        energies: analysis.energies.clone(),
        flip_to_zero: analysis.flips.to_zero_matrix().to_rows(),
        flip_to_one: analysis.flips.to_one_matrix().to_rows(),
        transition_matrix: analysis.transition.to_rows(),
        stationary: analysis.stationary.clone(),
    }
}
