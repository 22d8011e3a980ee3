//! Boundary collaborators of the `boltzmann` binary: the network file
//! loader and the report formatter. The core pipeline itself lives in
//! `boltzmann_core` and only ever sees validated input.

pub mod loader;
pub mod report;
