// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use prime_delta::arith::{gaps_from, DigitProperty, DigitWindow};
use prime_delta::{AnalysisConfig, AnalysisContext, AnalysisSelection, GapStatistics};

/// A flat-sweep-only config for `bound` and `gaps`.
pub fn flat_config(bound: u64, gaps: &[u64]) -> AnalysisConfig {
    AnalysisConfig {
        bound,
        gaps: gaps_from(gaps).unwrap(),
        analyses: AnalysisSelection {
            flat_sweep: true,
            structural: false,
        },
        ..AnalysisConfig::default()
    }
}

/// A structural-only config covering multiples of 6 up to `limit`.
pub fn structural_config(bound: u64, limit: u64) -> AnalysisConfig {
    AnalysisConfig {
        bound,
        structural_gap_limit: limit,
        analyses: AnalysisSelection {
            flat_sweep: false,
            structural: true,
        },
        ..AnalysisConfig::default()
    }
}

/// Switch a config to the whole-number digit decomposition.
pub fn whole(mut config: AnalysisConfig) -> AnalysisConfig {
    config.property = DigitProperty::new(DigitWindow::Whole, 3).unwrap();
    config
}

pub fn context(config: AnalysisConfig) -> AnalysisContext {
    AnalysisContext::new(config).unwrap()
}

/// (gap, total pairs, successes) per gap.
pub fn summary(stats: &[GapStatistics]) -> Vec<(u64, u64, u64)> {
    stats
        .iter()
        .map(|s| (s.gap().value(), s.total_pairs(), s.successes()))
        .collect()
}

/// Counterexamples as plain tuples.
pub fn counterexamples(stats: &GapStatistics) -> Vec<(u64, u64)> {
    stats
        .counterexamples()
        .iter()
        .map(|pair| (pair.first, pair.second))
        .collect()
}
