// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Analysis context combining configuration and MEMO data.
//!
//! An [`AnalysisConfig`] is an explicit, immutable description of a run: the
//! bound, which analyses to perform, their gaps and the property variant.
//! Nothing in the core reads process-wide state; the binary builds a config
//! from its flags and hands it in.
//!
//! An [`AnalysisContext`] owns a validated config together with the prime
//! set sieved for it. Analysis passes borrow the context read-only, so any
//! number of them can run concurrently against the same primes.

use crate::arith::constants::{
    DEFAULT_BOUND, DEFAULT_COUNTEREXAMPLE_CAP, DEFAULT_STRUCTURAL_GAP_LIMIT, MAX_BOUND, MIN_BOUND,
};
use crate::arith::{default_gaps, structural_gaps, DigitProperty, Gap};
use crate::error::AnalysisError;
use crate::memo::PrimeSet;
use std::time::Instant;
use tracing::info;

/// Which analyses a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSelection {
    /// Success rate per gap over a flat list of gaps.
    pub flat_sweep: bool,
    /// Mod-6 and mod-30 breakdown of gaps divisible by 6.
    pub structural: bool,
}

impl AnalysisSelection {
    pub fn all() -> Self {
        Self {
            flat_sweep: true,
            structural: true,
        }
    }
}

impl Default for AnalysisSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Immutable description of an analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Upper limit for prime generation.
    pub bound: u64,

    /// Gaps for the flat sweep, reported in this order.
    pub gaps: Vec<Gap>,

    /// The structural analysis covers multiples of 6 up to this limit.
    pub structural_gap_limit: u64,

    /// Counterexamples stored per gap.
    pub counterexample_cap: usize,

    pub property: DigitProperty,

    pub analyses: AnalysisSelection,

    /// Evaluate gaps, and chunks of primes within a gap, on worker threads.
    pub parallel: bool,

    /// Size of a dedicated worker pool; `None` uses the global pool.
    pub threads: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            gaps: default_gaps(),
            structural_gap_limit: DEFAULT_STRUCTURAL_GAP_LIMIT,
            counterexample_cap: DEFAULT_COUNTEREXAMPLE_CAP,
            property: DigitProperty::default(),
            analyses: AnalysisSelection::all(),
            parallel: true,
            threads: None,
        }
    }
}

impl AnalysisConfig {
    /// Default configuration with the given bound.
    pub fn with_bound(bound: u64) -> Self {
        Self {
            bound,
            ..Self::default()
        }
    }

    /// Check the config before any prime is sieved.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.bound < MIN_BOUND {
            return Err(AnalysisError::InvalidBound {
                bound: self.bound,
                minimum: MIN_BOUND,
            });
        }
        if self.bound > MAX_BOUND {
            return Err(AnalysisError::BoundTooLarge {
                bound: self.bound,
                maximum: MAX_BOUND,
            });
        }
        if self.analyses.flat_sweep && self.gaps.is_empty() {
            return Err(AnalysisError::NoGaps);
        }
        if self.analyses.structural {
            structural_gaps(self.structural_gap_limit)?;
        }
        if self.threads == Some(0) {
            return Err(AnalysisError::WorkerPool {
                threads: 0,
                reason: "at least one worker thread is required".to_string(),
            });
        }
        Ok(())
    }

    /// Gaps covered by the structural analysis.
    pub fn structural_gaps(&self) -> Result<Vec<Gap>, AnalysisError> {
        structural_gaps(self.structural_gap_limit)
    }
}

/// A validated config and the primes sieved for it.
#[derive(Debug)]
pub struct AnalysisContext {
    config: AnalysisConfig,
    primes: PrimeSet,
}

impl AnalysisContext {
    /// Validate `config` and sieve all primes up to its bound.
    ///
    /// Fails before sieving if the config is invalid.
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;

        let start = Instant::now();
        let primes = PrimeSet::sieve(config.bound)?;
        info!(
            bound = config.bound,
            primes = primes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "sieve complete"
        );

        Ok(Self { config, primes })
    }

    /// Create a context around an existing prime set.
    ///
    /// The config's bound is replaced by the prime set's. This is useful for
    /// running several configurations against one sieve.
    pub fn with_primes(mut config: AnalysisConfig, primes: PrimeSet) -> Result<Self, AnalysisError> {
        config.bound = primes.bound();
        config.validate()?;
        Ok(Self { config, primes })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn primes(&self) -> &PrimeSet {
        &self.primes
    }

    /// Give back the prime set, e.g. to reuse it with another config.
    pub fn into_primes(self) -> PrimeSet {
        self.primes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::DigitWindow;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert_eq!(config.bound, 1_000_000);
        assert_eq!(config.gaps.len(), 12);
        assert_eq!(config.counterexample_cap, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_bound_fails_before_sieving() {
        for bound in [0, 1, 2, 10] {
            assert_eq!(
                AnalysisContext::new(AnalysisConfig::with_bound(bound)).unwrap_err(),
                AnalysisError::InvalidBound { bound, minimum: 11 }
            );
        }
        assert!(AnalysisContext::new(AnalysisConfig::with_bound(11)).is_ok());
    }

    #[test]
    fn test_bound_too_large() {
        let config = AnalysisConfig::with_bound(MAX_BOUND + 1);
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::BoundTooLarge { .. })
        ));
    }

    #[test]
    fn test_no_gaps() {
        let mut config = AnalysisConfig::with_bound(100);
        config.gaps.clear();
        assert_eq!(config.validate(), Err(AnalysisError::NoGaps));

        config.analyses = AnalysisSelection {
            flat_sweep: false,
            structural: true,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_structural_limit() {
        let mut config = AnalysisConfig::with_bound(100);
        config.structural_gap_limit = 4;
        assert_eq!(
            config.validate(),
            Err(AnalysisError::InvalidStructuralLimit { limit: 4 })
        );

        config.analyses = AnalysisSelection {
            flat_sweep: true,
            structural: false,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_threads() {
        let mut config = AnalysisConfig::with_bound(100);
        config.threads = Some(0);
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::WorkerPool { threads: 0, .. })
        ));
    }

    #[test]
    fn test_with_primes_takes_bound_from_primes() {
        let primes = PrimeSet::sieve(1_000).unwrap();
        let mut config = AnalysisConfig::with_bound(5);
        config.property = DigitProperty::new(DigitWindow::Whole, 3).unwrap();
        let ctx = AnalysisContext::with_primes(config, primes).unwrap();
        assert_eq!(ctx.config().bound, 1_000);
        assert_eq!(ctx.primes().len(), 168);
    }
}
