//! Network file loader.
//!
//! Plaintext format: an integer unit count, then N thresholds, then N
//! rows of N weights, all whitespace separated. Trailing tokens are
//! ignored. Parsing either yields a validated `NetworkConfig` or a
//! typed `LoadError`; the interactive retry loop lives in
//! `load_with_prompt` and never lets a malformed file reach the core.

use boltzmann_core::matrix::Matrix;
use boltzmann_core::{CoreError, NetworkConfig};
use std::fs;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Expected file layout, shown before the interactive prompt.
pub const FILE_TEMPLATE: &str = "\
===============================================
 <number units>
 <threshold 1> <threshold 2> ... <threshold n>
 <weight 1,1> <weight 1,2> ... <weight 1,n>
 <weight 2,1> <weight 2,2> ... <weight 2,n>
 .
 .
 .
 <weight n,1> <weight n,2> ... <weight n,n>
===============================================";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("file ended before {what}")]
    MissingValue { what: String },

    #[error("invalid {what}: {token:?}")]
    BadToken { what: String, token: String },

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: impl Fn() -> String,
) -> Result<&'a str, LoadError> {
    tokens.next().ok_or_else(|| LoadError::MissingValue { what: what() })
}

fn next_f64<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: impl Fn() -> String,
) -> Result<f64, LoadError> {
    let token = next_token(tokens, &what)?;
    token.parse().map_err(|_| LoadError::BadToken {
        what: what(),
        token: token.to_string(),
    })
}

/// Parse a network definition from file text.
pub fn parse_network(text: &str) -> Result<NetworkConfig, LoadError> {
    let mut tokens = text.split_whitespace();

    let count_token = next_token(&mut tokens, || "unit count".to_string())?;
    let n: usize = count_token.parse().map_err(|_| LoadError::BadToken {
        what: "unit count".to_string(),
        token: count_token.to_string(),
    })?;

    let mut thresholds = Vec::with_capacity(n);
    for i in 0..n {
        thresholds.push(next_f64(&mut tokens, || format!("threshold {}", i + 1))?);
    }

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            row.push(next_f64(&mut tokens, || {
                format!("weight {},{}", i + 1, j + 1)
            })?);
        }
        rows.push(row);
    }

    let weights = Matrix::from_rows(rows)?;
    Ok(NetworkConfig::new(weights, thresholds)?)
}

/// Read and parse a network file.
pub fn load_file(path: &str) -> Result<NetworkConfig, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_network(&text)
}

/// Interactive loop: prompt for a path, retry on any load failure.
/// Only a validated configuration ever escapes; end of input is an
/// `UnexpectedEof` error.
pub fn load_with_prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<NetworkConfig> {
    loop {
        write!(output, "file path: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no file path supplied",
            ));
        }
        let path = line.trim();
        if path.is_empty() {
            continue;
        }

        match load_file(path) {
            Ok(config) => return Ok(config),
            Err(e) => writeln!(output, "{}. Try again.", e)?,
        }
    }
}
