// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Accumulator trait for pair sweeps.
//!
//! The sweep forms pairs and evaluates the property; what is done with each
//! evaluated pair is up to the sink. Flat per-gap statistics and the
//! structural breakdown are both sinks over the same sweep.
//!
//! # Example
//!
//! ```
//! use prime_delta::arith::{DigitProperty, Gap, PairOutcome, PrimePair};
//! use prime_delta::engine::{sweep, PairSink};
//! use prime_delta::memo::PrimeSet;
//!
//! #[derive(Default)]
//! struct FailureCount(u64);
//!
//! impl PairSink for FailureCount {
//!     fn record(&mut self, _pair: PrimePair, outcome: PairOutcome) {
//!         if !outcome.succeeded() {
//!             self.0 += 1;
//!         }
//!     }
//!
//!     fn merge(&mut self, later: Self) {
//!         self.0 += later.0;
//!     }
//! }
//!
//! let primes = PrimeSet::sieve(100).unwrap();
//! let mut failures = FailureCount::default();
//! sweep(
//!     &primes,
//!     primes.primes_from(11),
//!     Gap::new(6).unwrap(),
//!     &DigitProperty::default(),
//!     &mut failures,
//! );
//! assert_eq!(failures.0, 3);
//! ```

use crate::arith::{PairOutcome, PrimePair};

/// Receives evaluated pairs from a sweep.
///
/// # Ordering
///
/// Within one sink, pairs arrive in ascending order of p. A parallel sweep
/// hands disjoint, consecutive runs of primes to separate sinks and then
/// folds them together with [`merge`](PairSink::merge), earliest first. A
/// sink whose `merge` appends `later` after its own contents therefore ends
/// up identical to one fed sequentially.
pub trait PairSink: Send {
    /// Record one evaluated pair.
    fn record(&mut self, pair: PrimePair, outcome: PairOutcome);

    /// Fold in the results of a sweep over primes that all follow the ones
    /// seen by `self`.
    fn merge(&mut self, later: Self)
    where
        Self: Sized;
}
