// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sieve of Eratosthenes and the immutable prime set it produces.
//!
//! The sieve marks one bit per integer in `0..=bound`. Once sieving is done
//! the marks are kept: they are the O(1) membership table consulted for every
//! candidate partner p + k, shared read-only by all workers.
//!
//! # Examples
//!
//! ```
//! use prime_delta::memo::{sieve_primes, PrimeSet};
//!
//! assert_eq!(sieve_primes(30).unwrap(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! assert!(sieve_primes(1).unwrap().is_empty());
//!
//! let primes = PrimeSet::sieve(100).unwrap();
//! assert!(primes.contains(97));
//! assert!(!primes.contains(91));
//! ```

use crate::arith::constants::MAX_BOUND;
use crate::error::AnalysisError;
use bitvec::prelude::*;
use std::fmt;

/// All primes ≤ a bound, ascending, with a value-indexed membership bitset.
#[derive(Clone, PartialEq, Eq)]
pub struct PrimeSet {
    bound: u64,
    primes: Vec<u64>,
    /// Bit n is set iff n is prime, for n in 0..=bound.
    marks: BitVec,
}

impl PrimeSet {
    /// Sieve all primes ≤ `bound`.
    ///
    /// Bounds below 2 give an empty set. Fails when `bound` exceeds
    /// [`MAX_BOUND`], or when the storage for it cannot be allocated.
    ///
    /// O(bound log log bound) time, bound + 1 bits of marks.
    pub fn sieve(bound: u64) -> Result<Self, AnalysisError> {
        if bound > MAX_BOUND {
            return Err(AnalysisError::BoundTooLarge {
                bound,
                maximum: MAX_BOUND,
            });
        }
        let len = bound as usize + 1;
        if bound < 2 {
            return Ok(Self {
                bound,
                primes: Vec::new(),
                marks: bitvec![0; len],
            });
        }

        let mut marks = allocate_marks(bound, len)?;
        marks.set(0, false);
        marks.set(1, false);

        let mut i = 2usize;
        while i * i < len {
            if marks[i] {
                let mut multiple = i * i;
                while multiple < len {
                    marks.set(multiple, false);
                    multiple += i;
                }
            }
            i += 1;
        }

        let mut primes = Vec::new();
        primes
            .try_reserve_exact(prime_count_upper(bound))
            .map_err(|_| allocation_error(bound))?;
        primes.extend(marks.iter_ones().map(|n| n as u64));
        Ok(Self {
            bound,
            primes,
            marks,
        })
    }

    /// Upper estimate of the bytes [`PrimeSet::sieve`] allocates for `bound`.
    pub fn footprint(bound: u64) -> u64 {
        let mark_bytes = bound / 8 + 1;
        let prime_bytes = prime_count_upper(bound) as u64 * std::mem::size_of::<u64>() as u64;
        mark_bytes + prime_bytes
    }

    /// The bound the set was sieved to.
    pub fn bound(&self) -> u64 {
        self.bound
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// The primes in ascending order.
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.primes
    }

    /// Largest prime ≤ bound.
    pub fn largest(&self) -> Option<u64> {
        self.primes.last().copied()
    }

    /// O(1) membership test. Values above the bound are never members.
    #[inline]
    pub fn contains(&self, n: u64) -> bool {
        usize::try_from(n)
            .ok()
            .and_then(|index| self.marks.get(index).map(|bit| *bit))
            .unwrap_or(false)
    }

    /// The primes ≥ `min`, ascending.
    pub fn primes_from(&self, min: u64) -> &[u64] {
        let start = self.primes.partition_point(|&p| p < min);
        &self.primes[start..]
    }

    /// `p + gap` if it is a prime within the bound.
    #[inline]
    pub fn partner(&self, p: u64, gap: u64) -> Option<u64> {
        p.checked_add(gap).filter(|&q| self.contains(q))
    }
}

impl fmt::Debug for PrimeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimeSet")
            .field("bound", &self.bound)
            .field("len", &self.primes.len())
            .field("largest", &self.largest())
            .finish()
    }
}

/// All-ones marks for `0..len`, failing instead of aborting when the
/// allocator refuses.
fn allocate_marks(bound: u64, len: usize) -> Result<BitVec, AnalysisError> {
    let words = len.div_ceil(usize::BITS as usize);
    let mut storage: Vec<usize> = Vec::new();
    storage
        .try_reserve_exact(words)
        .map_err(|_| allocation_error(bound))?;
    storage.resize(words, usize::MAX);
    let mut marks = BitVec::from_vec(storage);
    marks.truncate(len);
    Ok(marks)
}

/// π(x) < 1.25506 x / ln x for x > 1 (Rosser and Schoenfeld).
fn prime_count_upper(bound: u64) -> usize {
    if bound < 2 {
        return 0;
    }
    let x = bound as f64;
    (1.25506 * x / x.ln()).ceil() as usize
}

fn allocation_error(bound: u64) -> AnalysisError {
    AnalysisError::SieveAllocation {
        bound,
        bytes: PrimeSet::footprint(bound),
    }
}

/// The ordered primes ≤ `bound`.
pub fn sieve_primes(bound: u64) -> Result<Vec<u64>, AnalysisError> {
    Ok(PrimeSet::sieve(bound)?.into_vec())
}
