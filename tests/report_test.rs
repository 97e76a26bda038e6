// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tests for the rendered text report.

use prime_delta::arith::gaps_from;
use prime_delta::report::{render, ReportOptions};
use prime_delta::{run, AnalysisConfig, DigitProperty, DigitWindow};

fn render_with(bound: u64, structural_gap_limit: u64, property: DigitProperty) -> String {
    let config = AnalysisConfig {
        bound,
        gaps: gaps_from(&[2, 4, 6]).unwrap(),
        structural_gap_limit,
        property,
        ..AnalysisConfig::default()
    };
    render(&run(config).unwrap(), &ReportOptions::default())
}

fn render_bound_100() -> String {
    render_with(100, 12, DigitProperty::default())
}

/// The residue-class table: its header and one row per class.
fn class_table(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| line.starts_with("Class ") || line.contains(" (mod 30) "))
        .collect()
}

fn class_row<'t>(text: &'t str, class: &str) -> &'t str {
    class_table(text)
        .into_iter()
        .find(|line| line.starts_with(class))
        .unwrap()
}

#[test]
fn test_flat_sweep_rows() {
    let text = render_bound_100();
    assert!(text.contains("Settings: Maximum prime = 100"));
    assert!(text.contains("Primes found = 25"));
    assert!(text.contains(
        "2        | Twin      |            6 |          6 |   100.00% | 100% (Universal)"
    ));
    assert!(text.contains(
        "4        | Cousin    |            6 |          6 |   100.00% | 100% (Universal)"
    ));
    assert!(text.contains(
        "6        | Sexy      |           13 |         10 |    76.92% | 76.92"
    ));
    assert!(text.contains("└─ Counterexamples: (23,29), (53,59), (83,89)\n"));
}

#[test]
fn test_structural_sections() {
    let text = render_bound_100();
    assert!(text.contains("ANALYSIS 2: STRUCTURAL ANALYSIS OF GAPS DIVISIBLE BY 6 (p >= 11)"));
    assert!(text.contains("Analysis for Gap 6"));
    assert!(text.contains("Analysis for Gap 12"));
    assert!(text.contains("  p ≡ 1 (mod 6): 6/6 pairs = 100.00% success"));
    assert!(text.contains("  p ≡ 5 (mod 6): 4/7 pairs = 57.14% success"));
    assert!(text.contains("  - Pattern 3→9: e.g., (23,29)."));
    assert!(text.contains("    (X₁≡2, X₂≡2 mod 3 cause failure)"));
    assert!(text.contains("6 (mod 30)"));
    assert!(text.contains("12 (mod 30)"));
    assert!(!text.contains("18 (mod 30)"));
    assert!(text.trim_end().ends_with("Analysis Complete.\n======================================================================"));
}

#[test]
fn test_render_is_stable() {
    assert_eq!(render_bound_100(), render_bound_100());
}

#[test]
fn test_predictions_only_for_whole_window_mod_3() {
    let last_two = render_bound_100();
    assert!(class_row(&last_two, "6 (mod 30)").ends_with("|       N/A"));
    assert!(class_row(&last_two, "12 (mod 30)").ends_with("|       N/A"));

    let whole = render_with(100, 12, DigitProperty::new(DigitWindow::Whole, 3).unwrap());
    assert!(class_row(&whole, "6 (mod 30)").ends_with("|    83.33%"));
    assert!(class_row(&whole, "12 (mod 30)").ends_with("|   100.00%"));

    let whole_mod5 = render_with(100, 12, DigitProperty::new(DigitWindow::Whole, 5).unwrap());
    assert!(class_row(&whole_mod5, "6 (mod 30)").ends_with("|       N/A"));
}

#[test]
fn test_class_table_columns_align_with_long_gap_lists() {
    let text = render_with(1_000, 180, DigitProperty::default());
    let table = class_table(&text);
    assert_eq!(table.len(), 6);
    assert!(table[1].contains("| 30,60,90,120,150,180 |"));

    let separators = |line: &str| -> Vec<usize> {
        line.char_indices()
            .filter(|&(_, c)| c == '|')
            .map(|(i, _)| i)
            .collect()
    };
    let header = separators(table[0]);
    assert_eq!(header.len(), 5);
    for row in &table[1..] {
        assert_eq!(separators(row), header, "{}", row);
    }
}
