// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! The prime set is sieved once per run and never changes afterwards. Every
//! analysis pass, and every worker within a pass, reads it through a shared
//! reference.

pub mod sieve;

pub use sieve::{sieve_primes, PrimeSet};
