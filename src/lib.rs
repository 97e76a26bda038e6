// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Computational verification of the digit-square modular property for
//! prime pairs.
//!
//! For a prime p ≥ 11, split its last two decimal digits into X and Y, let
//! N = 10X + Y and Δ = X² + Y² − N. A pair (p, p+k) *succeeds* when Δ ≡ 0
//! (mod 3) for at least one member. This crate measures, for every prime
//! below a bound, how often that happens for each gap k.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! - The sorted primes ≤ N from a Sieve of Eratosthenes
//! - The sieve's bit marks, kept as an O(1) membership table for p + k
//!
//! ## Tier 2: Accumulated State
//!
//! - Per-gap statistics: totals, successes, capped counterexamples
//! - Structural breakdowns: by p mod 6, by last-digit pattern, by gap mod 30
//!
//! # Analyses
//!
//! 1. **Flat sweep**: success rate for each gap in a list (2, 4, 6, …)
//! 2. **Structural**: gaps divisible by 6, grouped by residue mod 30, whose
//!    rates the heuristic predicts converge to 3/4, 5/6 or 1
//!
//! Both analyses are the same sweep feeding different [`PairSink`]s.
//!
//! # Parallelization
//!
//! Gaps, and chunks of primes within a gap, are swept concurrently with
//! rayon. Partial results are merged in prime order, so parallel runs are
//! identical to sequential ones.
//!
//! # Example
//!
//! ```
//! use prime_delta::{run, AnalysisConfig};
//! use prime_delta::arith::gaps_from;
//!
//! let mut config = AnalysisConfig::with_bound(100);
//! config.gaps = gaps_from(&[2, 4, 6]).unwrap();
//! let outcome = run(config).unwrap();
//!
//! let flat = outcome.flat_sweep.unwrap();
//! assert_eq!(flat[0].status().to_string(), "100% (Universal)");
//! assert_eq!(flat[2].counterexamples()[0].to_string(), "(23,29)");
//! ```

pub mod arith;
pub mod context;
pub mod engine;
pub mod error;
pub mod logging;
pub mod memo;
pub mod report;
pub mod state;

// Re-export commonly used types
pub use arith::{satisfies_property, DigitProperty, DigitWindow, Gap, PrimePair};
pub use context::{AnalysisConfig, AnalysisContext, AnalysisSelection};
pub use engine::{AnalysisEngine, AnalysisOutcome, PairSink};
pub use error::AnalysisError;
pub use memo::{sieve_primes, PrimeSet};
pub use state::{GapStatistics, StructuralReport};

/// Sieve the primes for `config` and run every selected analysis.
pub fn run(config: AnalysisConfig) -> Result<AnalysisOutcome, AnalysisError> {
    let ctx = AnalysisContext::new(config)?;
    AnalysisEngine::new(&ctx).run()
}
