// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the prime pair analyses.
//!
//! These fix the numeric conventions shared by the sieve, the digit-square
//! property and the two analysis passes. Run-time choices (bound, gap list,
//! counterexample cap) live in [`AnalysisConfig`](crate::context::AnalysisConfig)
//! and default to the values defined here.

/// Smallest prime admitted as the first member of a pair.
///
/// The digit-square property is defined on two-digit decompositions, and the
/// twin/cousin theorems are stated for p ≥ 11.
pub const MIN_PAIR_PRIME: u64 = 11;

/// Smallest bound accepted by an analysis run.
///
/// Any smaller bound cannot contain a prime ≥ [`MIN_PAIR_PRIME`].
pub const MIN_BOUND: u64 = MIN_PAIR_PRIME;

/// Largest bound accepted by the sieve.
///
/// At 2^32 the sieve needs 512 MiB of marks and about 2 GB for the prime
/// list. Larger bounds are refused rather than attempted.
pub const MAX_BOUND: u64 = 1 << 32;

/// Default upper limit for prime generation.
pub const DEFAULT_BOUND: u64 = 1_000_000;

/// Modulus of the digit-square property (Δ ≡ 0 mod 3).
pub const PROPERTY_MODULUS: u32 = 3;

/// Gaps examined by the flat sweep unless others are requested.
pub const DEFAULT_GAPS: [u64; 12] = [2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 24, 30];

/// Step between gaps in the structural analysis.
pub const STRUCTURAL_GAP_STEP: u64 = 6;

/// Largest gap examined by the structural analysis unless configured.
pub const DEFAULT_STRUCTURAL_GAP_LIMIT: u64 = 30;

/// Modulus grouping structural gaps into residue classes.
pub const RESIDUE_MODULUS: u64 = 30;

/// Number of residue classes mod [`RESIDUE_MODULUS`] reachable by multiples
/// of [`STRUCTURAL_GAP_STEP`].
pub const RESIDUE_CLASS_COUNT: usize = (RESIDUE_MODULUS / STRUCTURAL_GAP_STEP) as usize;

/// Counterexamples retained per gap; further failures are only counted.
pub const DEFAULT_COUNTEREXAMPLE_CAP: usize = 10;

/// Counterexamples shown per gap in the text report.
pub const DEFAULT_COUNTEREXAMPLES_SHOWN: usize = 3;

/// Number of candidate primes handed to one parallel worker within a gap.
pub const SWEEP_CHUNK: usize = 1 << 14;

const _: () = assert!(MIN_BOUND >= MIN_PAIR_PRIME);
const _: () = assert!(RESIDUE_MODULUS % STRUCTURAL_GAP_STEP == 0);
const _: () = assert!(STRUCTURAL_GAP_STEP % 2 == 0, "structural gaps must be even");

/// Compile-time assertion that `usize` can index every bit up to [`MAX_BOUND`].
const _: () = assert!(
    std::mem::size_of::<usize>() == 8,
    "64-bit architecture required"
);
