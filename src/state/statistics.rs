// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Per-gap accumulators filled during a sweep over the prime set. Counts live
//! in a counter array indexed by [`Counters`]; the first `cap`
//! counterexamples are kept in ascending order of p and later ones are only
//! counted.

use crate::arith::{Gap, PairOutcome, PrimePair};
use crate::engine::PairSink;
use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    TotalPairs,
    Successes,
    Failures,
}

const COUNT: usize = Counters::COUNT;

/// Total pairs and successes, with a derived rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: u64,
    pub successes: u64,
}

impl Tally {
    pub fn record(&mut self, success: bool) {
        self.total += 1;
        if success {
            self.successes += 1;
        }
    }

    pub fn absorb(&mut self, other: Tally) {
        self.total += other.total;
        self.successes += other.successes;
    }

    pub fn failures(&self) -> u64 {
        self.total - self.successes
    }

    /// successes / total, or 0.0 when nothing was counted.
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.successes as f64 / self.total as f64
        }
    }

    pub fn status(&self) -> Status {
        if self.total == 0 {
            Status::NoPairs
        } else if self.successes == self.total {
            Status::Universal
        } else {
            Status::Partial(self.rate() * 100.0)
        }
    }
}

/// Report annotation for a tally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    /// No pairs below the bound.
    NoPairs,
    /// Every pair succeeded.
    Universal,
    /// Success rate as a percentage.
    Partial(f64),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NoPairs => write!(f, "N/A"),
            Status::Universal => write!(f, "100% (Universal)"),
            Status::Partial(percent) => write!(f, "{:.2}", percent),
        }
    }
}

/// Accumulator for one gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapStatistics {
    gap: Gap,
    cap: usize,
    stats: [u64; COUNT],
    counterexamples: Vec<PrimePair>,
}

impl GapStatistics {
    pub fn new(gap: Gap, cap: usize) -> Self {
        Self {
            gap,
            cap,
            stats: [0; COUNT],
            counterexamples: Vec::with_capacity(cap),
        }
    }

    /// Increment the specified counter by 1.
    fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn gap(&self) -> Gap {
        self.gap
    }

    /// Maximum number of counterexamples stored.
    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn total_pairs(&self) -> u64 {
        self.get(Counters::TotalPairs)
    }

    pub fn successes(&self) -> u64 {
        self.get(Counters::Successes)
    }

    /// All failing pairs, including those beyond the cap.
    pub fn failures(&self) -> u64 {
        self.get(Counters::Failures)
    }

    /// The first failing pairs, ascending by p, at most `cap` of them.
    pub fn counterexamples(&self) -> &[PrimePair] {
        &self.counterexamples
    }

    pub fn tally(&self) -> Tally {
        Tally {
            total: self.total_pairs(),
            successes: self.successes(),
        }
    }

    pub fn success_rate(&self) -> f64 {
        self.tally().rate()
    }

    pub fn status(&self) -> Status {
        self.tally().status()
    }
}

impl PairSink for GapStatistics {
    fn record(&mut self, pair: PrimePair, outcome: PairOutcome) {
        debug_assert_eq!(pair.gap(), self.gap.value());
        self.increment_counter(Counters::TotalPairs);
        if outcome.succeeded() {
            self.increment_counter(Counters::Successes);
        } else {
            self.increment_counter(Counters::Failures);
            if self.counterexamples.len() < self.cap {
                self.counterexamples.push(pair);
            }
        }
    }

    fn merge(&mut self, later: Self) {
        debug_assert_eq!(self.gap, later.gap);
        for (mine, theirs) in self.stats.iter_mut().zip(later.stats) {
            *mine += theirs;
        }
        let room = self.cap.saturating_sub(self.counterexamples.len());
        self.counterexamples
            .extend(later.counterexamples.into_iter().take(room));
    }
}
