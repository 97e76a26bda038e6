// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prime pairs and the outcome of evaluating the property on them.

use std::fmt;

/// A pair (p, p+k) of primes. Constructed, evaluated and discarded per gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimePair {
    pub first: u64,
    pub second: u64,
}

impl PrimePair {
    pub fn new(first: u64, second: u64) -> Self {
        debug_assert!(first < second, "pair ({}, {}) is not ascending", first, second);
        Self { first, second }
    }

    pub fn gap(self) -> u64 {
        self.second - self.first
    }
}

impl fmt::Display for PrimePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.first, self.second)
    }
}

impl From<(u64, u64)> for PrimePair {
    fn from((first, second): (u64, u64)) -> Self {
        Self::new(first, second)
    }
}

/// Property results for both members of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairOutcome {
    pub first: bool,
    pub second: bool,
}

impl PairOutcome {
    /// A pair succeeds when at least one member satisfies the property.
    #[inline]
    pub fn succeeded(self) -> bool {
        self.first || self.second
    }
}
