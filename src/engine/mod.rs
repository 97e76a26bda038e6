// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pair sweep engine.
//!
//! A sweep walks the primes p ≥ 11 in ascending order, forms (p, p+k) when
//! p + k is also prime, evaluates the digit-square property on both members
//! and hands the result to a [`PairSink`]. The two analyses differ only in
//! their sink:
//!
//! - **Flat sweep**: one [`GapStatistics`] per requested gap
//! - **Structural**: one [`StructuralGapStatistics`] per multiple of 6,
//!   grouped into residue classes mod 30 afterwards
//!
//! # Parallelization
//!
//! No pair depends on another, so work is split two ways with rayon:
//! - gaps are evaluated concurrently
//! - within a gap, the candidate primes are cut into chunks of
//!   [`SWEEP_CHUNK`], each swept into its own sink
//!
//! Chunk sinks are merged in chunk order, so counts and counterexample order
//! are identical to a sequential run. Workers share the [`PrimeSet`]
//! read-only and own everything they write.
//!
//! # Example
//!
//! ```
//! use prime_delta::context::{AnalysisConfig, AnalysisContext};
//! use prime_delta::engine::AnalysisEngine;
//! use prime_delta::arith::gaps_from;
//!
//! let mut config = AnalysisConfig::with_bound(100);
//! config.gaps = gaps_from(&[2, 4, 6]).unwrap();
//! let ctx = AnalysisContext::new(config).unwrap();
//!
//! let stats = AnalysisEngine::new(&ctx).flat_sweep();
//! assert_eq!(stats[0].total_pairs(), 6);
//! assert_eq!(stats[0].successes(), 6);
//! assert_eq!(stats[2].successes(), 10);
//! ```

pub mod sink;

pub use sink::PairSink;

use crate::arith::constants::{MIN_PAIR_PRIME, SWEEP_CHUNK};
use crate::arith::{DigitProperty, Gap, PrimePair};
use crate::context::AnalysisContext;
use crate::error::AnalysisError;
use crate::memo::PrimeSet;
use crate::state::{GapStatistics, StructuralGapStatistics, StructuralReport};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Sweep `candidates` for pairs at distance `gap`.
///
/// `candidates` must be ascending primes ≥ 11 drawn from `primes`. The sweep
/// stops at the first p with p + k beyond the bound.
#[inline]
pub fn sweep<S: PairSink>(
    primes: &PrimeSet,
    candidates: &[u64],
    gap: Gap,
    property: &DigitProperty,
    sink: &mut S,
) {
    let k = gap.value();
    let Some(last) = primes.bound().checked_sub(k) else {
        return;
    };
    for &p in candidates {
        debug_assert!(p >= MIN_PAIR_PRIME);
        if p > last {
            break;
        }
        if let Some(q) = primes.partner(p, k) {
            let pair = PrimePair::new(p, q);
            sink.record(pair, property.evaluate(pair));
        }
    }
}

/// Results of a run, one field per analysis performed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub bound: u64,
    pub prime_count: usize,
    pub property: DigitProperty,
    pub flat_sweep: Option<Vec<GapStatistics>>,
    pub structural: Option<StructuralReport>,
}

/// Runs analysis passes over a context's primes.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisEngine<'a> {
    ctx: &'a AnalysisContext,
}

impl<'a> AnalysisEngine<'a> {
    pub fn new(ctx: &'a AnalysisContext) -> Self {
        Self { ctx }
    }

    /// Primes eligible as the first member of a pair.
    fn candidates(&self) -> &'a [u64] {
        self.ctx.primes().primes_from(MIN_PAIR_PRIME)
    }

    /// Sweep one gap into sinks built by `make`.
    ///
    /// Runs sequentially when parallelism is off or there is at most one
    /// chunk of candidates; otherwise sweeps chunks concurrently and merges
    /// them in order.
    pub fn evaluate_gap<S, F>(&self, gap: Gap, make: F) -> S
    where
        S: PairSink,
        F: Fn() -> S + Sync,
    {
        let primes = self.ctx.primes();
        let property = self.ctx.config().property;
        let candidates = self.candidates();

        if !self.ctx.config().parallel || candidates.len() <= SWEEP_CHUNK {
            let mut sink = make();
            sweep(primes, candidates, gap, &property, &mut sink);
            return sink;
        }

        let partials: Vec<S> = candidates
            .par_chunks(SWEEP_CHUNK)
            .map(|chunk| {
                let mut sink = make();
                sweep(primes, chunk, gap, &property, &mut sink);
                sink
            })
            .collect();

        partials.into_iter().fold(make(), |mut merged, partial| {
            merged.merge(partial);
            merged
        })
    }

    /// Apply `f` to every gap, preserving gap order.
    fn map_gaps<T, F>(&self, gaps: &[Gap], f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(Gap) -> T + Sync + Send,
    {
        if self.ctx.config().parallel {
            gaps.par_iter().map(|&gap| f(gap)).collect()
        } else {
            gaps.iter().map(|&gap| f(gap)).collect()
        }
    }

    /// Flat gap sweep: one finished [`GapStatistics`] per configured gap, in
    /// configured order.
    pub fn flat_sweep(&self) -> Vec<GapStatistics> {
        let cap = self.ctx.config().counterexample_cap;
        let start = Instant::now();

        let results = self.map_gaps(&self.ctx.config().gaps, |gap| {
            let stats = self.evaluate_gap(gap, || GapStatistics::new(gap, cap));
            debug!(
                gap = gap.value(),
                total = stats.total_pairs(),
                successes = stats.successes(),
                "gap swept"
            );
            stats
        });

        info!(
            gaps = results.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "flat gap sweep complete"
        );
        results
    }

    /// Structural breakdown over the multiples of 6 up to the configured
    /// limit.
    pub fn structural(&self) -> Result<StructuralReport, AnalysisError> {
        let config = self.ctx.config();
        let gaps = config.structural_gaps()?;
        let cap = config.counterexample_cap;
        let property = config.property;
        let start = Instant::now();

        let results = self.map_gaps(&gaps, |gap| {
            let stats = self.evaluate_gap(gap, || StructuralGapStatistics::new(gap, cap, property));
            debug!(
                gap = gap.value(),
                total = stats.statistics().total_pairs(),
                successes = stats.statistics().successes(),
                patterns = stats.patterns().len(),
                "structural gap swept"
            );
            stats
        });

        info!(
            gaps = results.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "structural analysis complete"
        );
        Ok(StructuralReport::from_gaps(results))
    }

    /// Run every selected analysis, inside a dedicated worker pool when one
    /// is configured.
    pub fn run(&self) -> Result<AnalysisOutcome, AnalysisError> {
        let config = self.ctx.config();
        match config.threads {
            Some(threads) if config.parallel => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|err| AnalysisError::WorkerPool {
                        threads,
                        reason: err.to_string(),
                    })?;
                pool.install(|| self.run_passes())
            }
            _ => self.run_passes(),
        }
    }

    fn run_passes(&self) -> Result<AnalysisOutcome, AnalysisError> {
        let config = self.ctx.config();
        let flat_sweep = config.analyses.flat_sweep.then(|| self.flat_sweep());
        let structural = if config.analyses.structural {
            Some(self.structural()?)
        } else {
            None
        };
        Ok(AnalysisOutcome {
            bound: config.bound,
            prime_count: self.ctx.primes().len(),
            property: config.property,
            flat_sweep,
            structural,
        })
    }
}
