// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text tables for finished analyses.
//!
//! Rendering only reads finished statistics, so it never runs inside a
//! sweep. The output contains no timings: the same outcome always renders to
//! the same text.

use crate::arith::constants::DEFAULT_COUNTEREXAMPLES_SHOWN;
use crate::arith::DigitProperty;
use crate::engine::AnalysisOutcome;
use crate::state::{GapStatistics, StructuralGapStatistics, StructuralReport, Tally};
use std::fmt::{self, Write};

const RULE_WIDTH: usize = 70;

/// Narrowest "Gaps" column in the residue-class table.
const GAPS_MIN_WIDTH: usize = 16;

/// Presentation choices that do not affect the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Counterexamples printed per gap; the rest are elided with `...`.
    pub counterexamples_shown: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            counterexamples_shown: DEFAULT_COUNTEREXAMPLES_SHOWN,
        }
    }
}

/// Render a full outcome to a string.
pub fn render(outcome: &AnalysisOutcome, options: &ReportOptions) -> String {
    let mut out = String::new();
    write_report(&mut out, outcome, options).expect("writing to a String cannot fail");
    out
}

/// Write the banner, every analysis present in `outcome`, and the footer.
pub fn write_report<W: Write>(
    w: &mut W,
    outcome: &AnalysisOutcome,
    options: &ReportOptions,
) -> fmt::Result {
    banner(w, "Prime Digit-Square Property Analyzer")?;
    writeln!(w)?;
    writeln!(w, "Settings: Maximum prime = {}", group_digits(outcome.bound))?;
    writeln!(
        w,
        "          Digit window = {}, modulus = {}",
        outcome.property.window(),
        outcome.property.modulus()
    )?;
    writeln!(w, "          Primes found = {}", group_digits(outcome.prime_count as u64))?;
    writeln!(w)?;

    if let Some(stats) = &outcome.flat_sweep {
        write_flat_sweep(w, stats, options)?;
    }
    if let Some(report) = &outcome.structural {
        write_structural(w, report, &outcome.property, options)?;
    }

    banner(w, "Analysis Complete.")
}

/// Analysis 1: one row per gap.
pub fn write_flat_sweep<W: Write>(
    w: &mut W,
    stats: &[GapStatistics],
    options: &ReportOptions,
) -> fmt::Result {
    banner(w, "ANALYSIS 1: PROPERTY SUCCESS RATE FOR VARIOUS PRIME GAPS (p >= 11)")?;
    writeln!(w)?;
    write_gap_table(w, stats.iter(), options)?;
    writeln!(w)
}

/// Analysis 2: per-gap table, residue classes, then per-gap breakdowns.
///
/// The predicted class rates are printed only for a property they were
/// derived for; other properties show `N/A` in that column.
pub fn write_structural<W: Write>(
    w: &mut W,
    report: &StructuralReport,
    property: &DigitProperty,
    options: &ReportOptions,
) -> fmt::Result {
    banner(w, "ANALYSIS 2: STRUCTURAL ANALYSIS OF GAPS DIVISIBLE BY 6 (p >= 11)")?;
    writeln!(w)?;
    write_gap_table(w, report.gaps.iter().map(|g| g.statistics()), options)?;
    writeln!(w)?;

    writeln!(w, "Breakdown by gap residue class (mod 30):")?;
    let rows: Vec<(String, String)> = report
        .classes
        .iter()
        .map(|class| {
            let gaps: Vec<String> = class.gaps.iter().map(|g| g.to_string()).collect();
            let predicted = if property.predicts_residue_rates() {
                format!("{:.2}%", class.predicted_rate() * 100.0)
            } else {
                "N/A".to_string()
            };
            (gaps.join(","), predicted)
        })
        .collect();
    let gaps_width = rows
        .iter()
        .map(|(gaps, _)| gaps.chars().count())
        .fold(GAPS_MIN_WIDTH, usize::max);

    writeln!(
        w,
        "{:<13} | {:<gaps_width$} | {:>12} | {:>10} | {:>9} | {:>9}",
        "Class",
        "Gaps",
        "Total Pairs",
        "Success",
        "Rate (%)",
        "Predicted",
        gaps_width = gaps_width
    )?;
    rule(w, '-')?;
    for (class, (gaps, predicted)) in report.classes.iter().zip(&rows) {
        writeln!(
            w,
            "{:<13} | {:<gaps_width$} | {:>12} | {:>10} | {:>9} | {:>9}",
            class.class.to_string(),
            gaps,
            group_digits(class.tally.total),
            group_digits(class.tally.successes),
            percent(class.tally),
            predicted,
            gaps_width = gaps_width
        )?;
    }
    writeln!(w)?;

    for gap in &report.gaps {
        write_gap_breakdown(w, gap, property.modulus())?;
    }
    Ok(())
}

fn write_gap_table<'s, W: Write>(
    w: &mut W,
    stats: impl Iterator<Item = &'s GapStatistics>,
    options: &ReportOptions,
) -> fmt::Result {
    writeln!(
        w,
        "{:<8} | {:<9} | {:>12} | {:>10} | {:>9} | Status",
        "Gap (k)", "Name", "Total Pairs", "Success", "Rate (%)"
    )?;
    rule(w, '-')?;
    for gap in stats {
        writeln!(
            w,
            "{:<8} | {:<9} | {:>12} | {:>10} | {:>9} | {}",
            gap.gap().to_string(),
            gap.gap().label(),
            group_digits(gap.total_pairs()),
            group_digits(gap.successes()),
            percent(gap.tally()),
            gap.status()
        )?;
        write_counterexamples(w, gap, options)?;
    }
    Ok(())
}

fn write_counterexamples<W: Write>(
    w: &mut W,
    gap: &GapStatistics,
    options: &ReportOptions,
) -> fmt::Result {
    let shown: Vec<String> = gap
        .counterexamples()
        .iter()
        .take(options.counterexamples_shown)
        .map(|pair| pair.to_string())
        .collect();
    if shown.is_empty() {
        return Ok(());
    }
    let elided = gap.failures() > shown.len() as u64;
    writeln!(
        w,
        "{:11}└─ Counterexamples: {}{}",
        "",
        shown.join(", "),
        if elided { ", ..." } else { "" }
    )
}

fn write_gap_breakdown<W: Write>(
    w: &mut W,
    gap: &StructuralGapStatistics,
    modulus: u32,
) -> fmt::Result {
    rule(w, '-')?;
    writeln!(w, "Analysis for Gap {}", gap.gap())?;
    rule(w, '-')?;

    writeln!(w, "\n(A) Breakdown by p (mod 6) residue class:")?;
    for (residue, tally) in gap.p_mod6() {
        if tally.total > 0 {
            writeln!(
                w,
                "  p ≡ {} (mod 6): {}/{} pairs = {} success",
                residue,
                group_digits(tally.successes),
                group_digits(tally.total),
                percent(tally)
            )?;
        }
    }

    writeln!(w, "\n(B) Breakdown by last digit pattern (Y₁ → Y₂):")?;
    for (pattern, stats) in gap.patterns() {
        let mark = if stats.tally.successes == stats.tally.total {
            "✓"
        } else {
            "✗"
        };
        writeln!(
            w,
            "  {:^5}: {:>5}/{:>5} pairs = {:>7} {}",
            pattern.to_string(),
            group_digits(stats.tally.successes),
            group_digits(stats.tally.total),
            percent(stats.tally),
            mark
        )?;
    }

    let mut failing = gap.failing_patterns().peekable();
    if failing.peek().is_some() {
        writeln!(w, "\n(C) Details on first counterexample for failing patterns:")?;
        for (pattern, witness) in failing {
            writeln!(w, "  - Pattern {}: e.g., {}.", pattern, witness.pair)?;
            writeln!(
                w,
                "    (X₁≡{}, X₂≡{} mod {} cause failure)",
                witness.first_tens_residue, witness.second_tens_residue, modulus
            )?;
        }
    }
    writeln!(w)
}

fn banner<W: Write>(w: &mut W, title: &str) -> fmt::Result {
    rule(w, '=')?;
    writeln!(w, "{}", title)?;
    rule(w, '=')
}

fn rule<W: Write>(w: &mut W, c: char) -> fmt::Result {
    let line: String = std::iter::repeat(c).take(RULE_WIDTH).collect();
    writeln!(w, "{}", line)
}

/// Success rate with two decimals and a percent sign, or `N/A`.
fn percent(tally: Tally) -> String {
    if tally.total == 0 {
        "N/A".to_string()
    } else {
        format!("{:.2}%", tally.rate() * 100.0)
    }
}

/// Decimal digits in groups of three: 1234567 → "1,234,567".
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::{Gap, PairOutcome, PrimePair};
    use crate::engine::PairSink;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(78_498), "78,498");
        assert_eq!(group_digits(1_000_000), "1,000,000");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(Tally::default()), "N/A");
        assert_eq!(percent(Tally { total: 13, successes: 10 }), "76.92%");
        assert_eq!(percent(Tally { total: 6, successes: 6 }), "100.00%");
    }

    #[test]
    fn test_counterexample_line() {
        let fail = PairOutcome {
            first: false,
            second: false,
        };
        let mut stats = GapStatistics::new(Gap::new(6).unwrap(), 10);
        for (p, q) in [(23, 29), (53, 59), (83, 89)] {
            stats.record(PrimePair::new(p, q), fail);
        }

        let mut out = String::new();
        let options = ReportOptions {
            counterexamples_shown: 2,
        };
        write_counterexamples(&mut out, &stats, &options).unwrap();
        assert_eq!(out, "           └─ Counterexamples: (23,29), (53,59), ...\n");

        out.clear();
        write_counterexamples(&mut out, &stats, &ReportOptions::default()).unwrap();
        assert_eq!(out, "           └─ Counterexamples: (23,29), (53,59), (83,89)\n");
    }

    #[test]
    fn test_empty_gap_row() {
        let stats = vec![GapStatistics::new(Gap::new(2).unwrap(), 10)];
        let mut out = String::new();
        write_gap_table(&mut out, stats.iter(), &ReportOptions::default()).unwrap();
        let row = out.lines().nth(2).unwrap();
        assert!(row.starts_with("2        | Twin "));
        assert!(row.ends_with("N/A | N/A"));
    }
}
