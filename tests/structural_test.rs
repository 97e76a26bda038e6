// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the structural breakdown (Analysis 2).

mod common;

use common::{context, flat_config, structural_config, summary, whole};
use prime_delta::arith::{PrimePair, ResidueClass};
use prime_delta::state::{DigitPattern, FailureWitness, Tally};
use prime_delta::AnalysisEngine;

#[test]
fn test_gaps_and_residue_classes_bound_1000() {
    let ctx = context(structural_config(1_000, 30));
    let report = AnalysisEngine::new(&ctx).structural().unwrap();

    let per_gap: Vec<_> = report.gaps.iter().map(|g| g.statistics().clone()).collect();
    assert_eq!(
        summary(&per_gap),
        vec![(6, 72, 58), (12, 67, 67), (18, 72, 72), (24, 76, 63), (30, 96, 75)]
    );

    let classes: Vec<(ResidueClass, Tally)> =
        report.classes.iter().map(|c| (c.class, c.tally)).collect();
    assert_eq!(
        classes,
        vec![
            (ResidueClass::Zero, Tally { total: 96, successes: 75 }),
            (ResidueClass::Six, Tally { total: 72, successes: 58 }),
            (ResidueClass::Twelve, Tally { total: 67, successes: 67 }),
            (ResidueClass::Eighteen, Tally { total: 72, successes: 72 }),
            (ResidueClass::TwentyFour, Tally { total: 76, successes: 63 }),
        ]
    );
}

#[test]
fn test_gap_6_breakdown_bound_1000() {
    let ctx = context(structural_config(1_000, 6));
    let report = AnalysisEngine::new(&ctx).structural().unwrap();
    assert_eq!(report.gaps.len(), 1);
    let gap = &report.gaps[0];

    let mod6: Vec<(u64, Tally)> = gap.p_mod6().collect();
    assert_eq!(
        mod6,
        vec![
            (1, Tally { total: 32, successes: 27 }),
            (5, Tally { total: 40, successes: 31 }),
        ]
    );

    let patterns: Vec<(DigitPattern, Tally)> =
        gap.patterns().iter().map(|(&p, s)| (p, s.tally)).collect();
    assert_eq!(
        patterns,
        vec![
            (DigitPattern { from: 1, to: 7 }, Tally { total: 23, successes: 18 }),
            (DigitPattern { from: 3, to: 9 }, Tally { total: 24, successes: 15 }),
            (DigitPattern { from: 7, to: 3 }, Tally { total: 25, successes: 25 }),
        ]
    );

    let failing: Vec<_> = gap.failing_patterns().collect();
    assert_eq!(
        failing,
        vec![
            (
                DigitPattern { from: 1, to: 7 },
                FailureWitness {
                    pair: PrimePair::new(151, 157),
                    first_tens_residue: 2,
                    second_tens_residue: 2,
                }
            ),
            (
                DigitPattern { from: 3, to: 9 },
                FailureWitness {
                    pair: PrimePair::new(23, 29),
                    first_tens_residue: 2,
                    second_tens_residue: 2,
                }
            ),
        ]
    );
}

#[test]
fn test_whole_window_gap_30_breakdown() {
    let ctx = context(whole(structural_config(1_000, 30)));
    let report = AnalysisEngine::new(&ctx).structural().unwrap();
    let gap = report.gaps.last().unwrap();
    assert_eq!(gap.gap().value(), 30);

    let mod6: Vec<(u64, Tally)> = gap.p_mod6().collect();
    assert_eq!(
        mod6,
        vec![
            (1, Tally { total: 47, successes: 47 }),
            (5, Tally { total: 49, successes: 28 }),
        ]
    );

    let failing: Vec<(String, (u64, u64))> = gap
        .failing_patterns()
        .map(|(p, w)| (p.to_string(), (w.pair.first, w.pair.second)))
        .collect();
    assert_eq!(
        failing,
        vec![
            ("3→3".to_string(), (23, 53)),
            ("9→9".to_string(), (29, 59)),
        ]
    );
}

#[test]
fn test_structural_matches_flat_sweep() {
    let bound = 200_000;
    let flat_ctx = context(flat_config(bound, &[6, 12, 18, 24, 30, 36, 42, 48, 54, 60]));
    let flat = AnalysisEngine::new(&flat_ctx).flat_sweep();

    let structural_ctx = context(structural_config(bound, 60));
    let report = AnalysisEngine::new(&structural_ctx).structural().unwrap();

    let structural: Vec<_> = report.gaps.iter().map(|g| g.statistics().clone()).collect();
    assert_eq!(structural, flat);

    for gap in &report.gaps {
        let by_mod6: u64 = gap.p_mod6().map(|(_, t)| t.total).sum();
        let by_pattern: u64 = gap.patterns().values().map(|s| s.tally.total).sum();
        assert_eq!(by_mod6, gap.statistics().total_pairs());
        assert_eq!(by_pattern, gap.statistics().total_pairs());
    }
}

#[test]
fn test_residue_class_is_sum_of_member_gaps() {
    let ctx = context(structural_config(100_000, 120));
    let report = AnalysisEngine::new(&ctx).structural().unwrap();
    assert_eq!(report.classes.len(), 5);

    for class in &report.classes {
        assert_eq!(class.gaps.len(), 4);
        let mut expected = Tally::default();
        for gap in &report.gaps {
            if gap.gap().residue_class() == Some(class.class) {
                expected.absorb(gap.statistics().tally());
            }
        }
        assert_eq!(class.tally, expected);
    }
}

#[test]
fn test_whole_window_rates_approach_predictions() {
    let ctx = context(whole(structural_config(1_000_000, 180)));
    let report = AnalysisEngine::new(&ctx).structural().unwrap();

    for class in &report.classes {
        let observed = class.success_rate();
        let predicted = class.predicted_rate();
        assert!(
            (observed - predicted).abs() < 0.01,
            "{}: observed {:.4}, predicted {:.4}",
            class.class,
            observed,
            predicted
        );
    }
}
