//! Enumeration of all 2^N global configurations.
//!
//! Canonical ordering: the state at index `k` is the N-bit binary
//! representation of `k` with unit 0 as the most significant bit.
//! Every downstream structure indexes states by this ordering, so it
//! must be reproduced exactly.

#[derive(Debug)]
pub struct StateSpace {
    n: usize,
    states: Vec<Vec<u8>>,
}

/// Bit of state index `k` belonging to `unit` in an `n`-unit network
/// (unit 0 is the most significant bit).
pub fn unit_bit(k: usize, unit: usize, n: usize) -> u8 {
    ((k >> (n - 1 - unit)) & 1) as u8
}

impl StateSpace {
    /// Enumerate all 2^n states in canonical order. Pure function of `n`;
    /// `n = 0` yields the single empty state.
    pub fn enumerate(n: usize) -> Self {
        let count = 1usize << n;
        let states = (0..count)
            .map(|k| (0..n).map(|unit| unit_bit(k, unit, n)).collect())
            .collect();
        Self { n, states }
    }

    pub fn units(&self) -> usize {
        self.n
    }

    /// Number of states, always `2^n` (so never zero).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, k: usize) -> &[u8] {
        &self.states[k]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.states.iter().map(Vec::as_slice)
    }

    /// Index of a binary vector under the canonical ordering.
    pub fn index_of(bits: &[u8]) -> usize {
        bits.iter().fold(0, |acc, &b| (acc << 1) | b as usize)
    }
}
