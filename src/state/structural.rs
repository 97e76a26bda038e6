// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural breakdown for gaps divisible by 6.
//!
//! On top of the per-gap [`GapStatistics`], each gap records
//! - a tally per residue of p mod 6 (1 or 5, the only classes of primes ≥ 5),
//! - a tally per last-digit pattern Y₁→Y₂, with the first failing pair and
//!   the residues of its tens parts X₁, X₂ that cause the failure.
//!
//! Finished gaps are then grouped by gap mod 30 into [`ResidueStats`], whose
//! aggregate rates are compared with the heuristic predictions of
//! [`ResidueClass::predicted_rate`].

use crate::arith::{DigitProperty, Gap, PairOutcome, PrimePair, ResidueClass};
use crate::engine::PairSink;
use crate::state::statistics::{GapStatistics, Tally};
use std::collections::BTreeMap;
use std::fmt;
use strum::IntoEnumIterator;

/// Residues of p mod 6 that a prime ≥ 5 can take.
pub const P_MOD6_RESIDUES: [u64; 2] = [1, 5];

/// Last decimal digits of the two members of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitPattern {
    pub from: u8,
    pub to: u8,
}

impl DigitPattern {
    pub fn of(pair: PrimePair) -> Self {
        Self {
            from: (pair.first % 10) as u8,
            to: (pair.second % 10) as u8,
        }
    }
}

impl fmt::Display for DigitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.from, self.to)
    }
}

/// First failing pair of a pattern, with X₁ and X₂ reduced by the property
/// modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureWitness {
    pub pair: PrimePair,
    pub first_tens_residue: u64,
    pub second_tens_residue: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternStats {
    pub tally: Tally,
    pub first_failure: Option<FailureWitness>,
}

/// Structural accumulator for one gap.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralGapStatistics {
    property: DigitProperty,
    stats: GapStatistics,
    /// Indexed like [`P_MOD6_RESIDUES`].
    by_p_mod6: [Tally; 2],
    patterns: BTreeMap<DigitPattern, PatternStats>,
}

impl StructuralGapStatistics {
    pub fn new(gap: Gap, cap: usize, property: DigitProperty) -> Self {
        Self {
            property,
            stats: GapStatistics::new(gap, cap),
            by_p_mod6: [Tally::default(); 2],
            patterns: BTreeMap::new(),
        }
    }

    pub fn gap(&self) -> Gap {
        self.stats.gap()
    }

    /// Plain per-gap statistics, identical to a flat sweep of the same gap.
    pub fn statistics(&self) -> &GapStatistics {
        &self.stats
    }

    /// Tallies for p ≡ 1 and p ≡ 5 (mod 6).
    pub fn p_mod6(&self) -> impl Iterator<Item = (u64, Tally)> + '_ {
        P_MOD6_RESIDUES.iter().copied().zip(self.by_p_mod6.iter().copied())
    }

    /// Tallies per last-digit pattern, in pattern order.
    pub fn patterns(&self) -> &BTreeMap<DigitPattern, PatternStats> {
        &self.patterns
    }

    /// Patterns with at least one failing pair, with their first failure.
    pub fn failing_patterns(&self) -> impl Iterator<Item = (DigitPattern, FailureWitness)> + '_ {
        self.patterns
            .iter()
            .filter_map(|(&pattern, stats)| stats.first_failure.map(|witness| (pattern, witness)))
    }

    fn witness(&self, pair: PrimePair) -> FailureWitness {
        let window = self.property.window();
        let modulus = self.property.modulus() as u64;
        FailureWitness {
            pair,
            first_tens_residue: window.split(pair.first).tens % modulus,
            second_tens_residue: window.split(pair.second).tens % modulus,
        }
    }
}

impl PairSink for StructuralGapStatistics {
    fn record(&mut self, pair: PrimePair, outcome: PairOutcome) {
        let success = outcome.succeeded();
        self.stats.record(pair, outcome);

        debug_assert!(pair.first % 6 == 1 || pair.first % 6 == 5);
        let slot = usize::from(pair.first % 6 == 5);
        self.by_p_mod6[slot].record(success);

        let witness = (!success).then(|| self.witness(pair));
        let entry = self.patterns.entry(DigitPattern::of(pair)).or_default();
        entry.tally.record(success);
        if entry.first_failure.is_none() {
            entry.first_failure = witness;
        }
    }

    fn merge(&mut self, later: Self) {
        self.stats.merge(later.stats);
        for (mine, theirs) in self.by_p_mod6.iter_mut().zip(later.by_p_mod6) {
            mine.absorb(theirs);
        }
        for (pattern, theirs) in later.patterns {
            let entry = self.patterns.entry(pattern).or_default();
            entry.tally.absorb(theirs.tally);
            if entry.first_failure.is_none() {
                entry.first_failure = theirs.first_failure;
            }
        }
    }
}

/// Aggregate over all structural gaps sharing a residue class mod 30.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueStats {
    pub class: ResidueClass,
    pub gaps: Vec<Gap>,
    pub tally: Tally,
}

impl ResidueStats {
    pub fn success_rate(&self) -> f64 {
        self.tally.rate()
    }

    pub fn predicted_rate(&self) -> f64 {
        self.class.predicted_rate()
    }
}

/// Finished structural analysis: per-gap breakdowns and residue classes.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralReport {
    pub gaps: Vec<StructuralGapStatistics>,
    pub classes: Vec<ResidueStats>,
}

impl StructuralReport {
    /// Group finished gaps by residue class. Classes with no gaps are omitted;
    /// the rest appear in residue order.
    pub fn from_gaps(gaps: Vec<StructuralGapStatistics>) -> Self {
        let classes = ResidueClass::iter()
            .filter_map(|class| {
                let members: Vec<&StructuralGapStatistics> = gaps
                    .iter()
                    .filter(|g| g.gap().residue_class() == Some(class))
                    .collect();
                if members.is_empty() {
                    return None;
                }
                let mut tally = Tally::default();
                for member in &members {
                    tally.absorb(member.statistics().tally());
                }
                Some(ResidueStats {
                    class,
                    gaps: members.iter().map(|g| g.gap()).collect(),
                    tally,
                })
            })
            .collect();
        Self { gaps, classes }
    }
}
