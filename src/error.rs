// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for analysis runs.
//!
//! Every failure is an input or setup error reported with the offending
//! value. Nothing here is transient: a run that fails is not retried.
//! Empty results (a gap with no pairs below the bound) are not errors.

use thiserror::Error;

/// Errors raised before or while setting up an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Bound too small to contain any prime ≥ 11.
    #[error("bound {bound} is below the minimum of {minimum} needed to contain a prime >= 11")]
    InvalidBound { bound: u64, minimum: u64 },

    /// Bound too large for the sieve's marking array.
    #[error("bound {bound} exceeds the supported maximum of {maximum}")]
    BoundTooLarge { bound: u64, maximum: u64 },

    /// Sieve storage for an accepted bound could not be allocated.
    #[error("cannot allocate {bytes} bytes to sieve primes up to {bound}")]
    SieveAllocation { bound: u64, bytes: u64 },

    /// Gap is zero or odd.
    #[error("gap {gap} is not a positive even integer")]
    InvalidGap { gap: u64 },

    /// Flat sweep requested with no gaps.
    #[error("no gaps requested for the flat gap sweep")]
    NoGaps,

    /// Structural gap limit admits no multiple of 6.
    #[error("structural gap limit {limit} admits no multiple of 6")]
    InvalidStructuralLimit { limit: u64 },

    /// Property modulus below 2.
    #[error("property modulus must be at least 2, got {modulus}")]
    InvalidModulus { modulus: u32 },

    /// Worker pool could not be built.
    #[error("failed to build worker pool with {threads} threads: {reason}")]
    WorkerPool { threads: usize, reason: String },
}
