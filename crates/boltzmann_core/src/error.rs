//! Typed failures for network construction and analysis.
//!
//! All variants are construction-time configuration errors. The hot
//! numeric paths assume validated shapes and assert instead of
//! returning `Result` (see `Matrix::matmul`).

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A nested-row matrix literal had rows of unequal length.
    #[error("matrix row {row} has {found} values, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The weight matrix does not match the unit count implied by the
    /// threshold vector.
    #[error("weight matrix is {rows}x{cols}, expected {n}x{n} for {n} units")]
    WeightShape { rows: usize, cols: usize, n: usize },

    /// The network exceeds the configured unit limit. Cost and memory
    /// are exponential in the unit count, so this is a hard refusal
    /// rather than a warning.
    #[error("{n} units would enumerate 2^{n} states, above the configured limit of {max} units")]
    TooManyUnits { n: usize, max: usize },
}
