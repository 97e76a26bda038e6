// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `primedelta`: run the prime pair analyses and print the report.

use anyhow::{Context, Result};
use clap::Parser;
use prime_delta::arith::constants::{
    DEFAULT_BOUND, DEFAULT_COUNTEREXAMPLES_SHOWN, DEFAULT_COUNTEREXAMPLE_CAP,
    DEFAULT_STRUCTURAL_GAP_LIMIT, PROPERTY_MODULUS,
};
use prime_delta::arith::{default_gaps, gaps_from, DigitProperty, DigitWindow};
use prime_delta::report::{render, ReportOptions};
use prime_delta::{logging, AnalysisConfig, AnalysisSelection};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "primedelta",
    version,
    about = "Computational verification of the digit-square property for prime pairs (p >= 11)"
)]
struct Cli {
    /// Upper limit for prime generation.
    #[arg(short = 'n', long = "max-prime", default_value_t = DEFAULT_BOUND)]
    max_prime: u64,

    /// Run Analysis 1: success rates for a list of gaps.
    #[arg(short = 'b', long)]
    run_base10: bool,

    /// Run Analysis 2: mod-6 structural breakdown.
    #[arg(short = 'm', long)]
    run_mod6: bool,

    /// Run all analyses (default if no other run flag is set).
    #[arg(long)]
    run_all: bool,

    /// Gaps for Analysis 1, comma separated.
    #[arg(long, value_delimiter = ',')]
    gaps: Option<Vec<u64>>,

    /// Largest multiple of 6 examined by Analysis 2.
    #[arg(long, default_value_t = DEFAULT_STRUCTURAL_GAP_LIMIT)]
    structural_limit: u64,

    /// Counterexamples stored per gap.
    #[arg(long, default_value_t = DEFAULT_COUNTEREXAMPLE_CAP)]
    cap: usize,

    /// Counterexamples printed per gap.
    #[arg(long, default_value_t = DEFAULT_COUNTEREXAMPLES_SHOWN)]
    show: usize,

    /// Digits used for X and Y: `last-two` or `whole`.
    #[arg(long, default_value_t = DigitWindow::LastTwo)]
    window: DigitWindow,

    /// Modulus for Δ.
    #[arg(long, default_value_t = PROPERTY_MODULUS)]
    modulus: u32,

    /// Worker threads (default: one per core).
    #[arg(long)]
    threads: Option<usize>,

    /// Evaluate on the calling thread only.
    #[arg(long)]
    sequential: bool,
}

impl Cli {
    fn config(&self) -> Result<AnalysisConfig> {
        let run_all = self.run_all || !(self.run_base10 || self.run_mod6);
        let gaps = match &self.gaps {
            Some(values) => gaps_from(values).context("invalid --gaps")?,
            None => default_gaps(),
        };
        let property =
            DigitProperty::new(self.window, self.modulus).context("invalid --modulus")?;

        Ok(AnalysisConfig {
            bound: self.max_prime,
            gaps,
            structural_gap_limit: self.structural_limit,
            counterexample_cap: self.cap,
            property,
            analyses: AnalysisSelection {
                flat_sweep: run_all || self.run_base10,
                structural: run_all || self.run_mod6,
            },
            parallel: !self.sequential,
            threads: self.threads,
        })
    }
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let config = cli.config()?;
    info!(bound = config.bound, analyses = ?config.analyses, "starting analysis");

    let outcome = prime_delta::run(config)
        .with_context(|| format!("analysis failed for --max-prime {}", cli.max_prime))?;

    let options = ReportOptions {
        counterexamples_shown: cli.show,
    };
    print!("{}", render(&outcome, &options));
    Ok(())
}
