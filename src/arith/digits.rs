// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The digit-square modular property.
//!
//! A number n is split into a tens part X and a units digit Y, giving
//! N = 10X + Y. The property holds when
//!
//! ```text
//! Δ(N) = X² + Y² − N ≡ 0 (mod 3)
//! ```
//!
//! Δ is negative for most two-digit N, so the test uses the Euclidean
//! remainder, which always lies in `0..modulus`.
//!
//! # Examples
//!
//! ```
//! use prime_delta::arith::{delta, satisfies_property};
//!
//! assert_eq!(delta(11), -9);
//! assert!(satisfies_property(11));
//! assert_eq!(delta(97), 33);
//! assert!(satisfies_property(97));
//! assert!(!satisfies_property(23));
//! ```

use crate::arith::constants::PROPERTY_MODULUS;
use crate::arith::pair::{PairOutcome, PrimePair};
use crate::error::AnalysisError;
use strum_macros::{Display, EnumString};

/// Which decomposition of n supplies the digits X and Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum DigitWindow {
    /// X is the tens digit, Y the units digit: N is formed from the last two
    /// decimal digits of n.
    #[default]
    LastTwo,

    /// X is ⌊n / 10⌋ without reduction, so N = n.
    ///
    /// Under this decomposition twin and cousin pairs satisfy the property
    /// for every p ≥ 11.
    Whole,
}

/// The (X, Y, N) decomposition of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSplit {
    pub tens: u64,
    pub units: u64,
    /// N = 10X + Y.
    pub value: u64,
}

impl DigitSplit {
    /// Δ = X² + Y² − N.
    ///
    /// Computed in i128: under [`DigitWindow::Whole`] X² exceeds 64 bits for
    /// large n.
    pub fn delta(self) -> i128 {
        let tens = self.tens as i128;
        let units = self.units as i128;
        tens * tens + units * units - self.value as i128
    }
}

impl DigitWindow {
    /// Split `n` into its (X, Y, N) decomposition.
    pub fn split(self, n: u64) -> DigitSplit {
        let units = n % 10;
        let tens = match self {
            DigitWindow::LastTwo => (n / 10) % 10,
            DigitWindow::Whole => n / 10,
        };
        DigitSplit {
            tens,
            units,
            value: 10 * tens + units,
        }
    }
}

/// A validated digit-square property: a digit window and a modulus ≥ 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitProperty {
    window: DigitWindow,
    modulus: u32,
}

impl DigitProperty {
    /// Create a property, rejecting moduli below 2.
    pub fn new(window: DigitWindow, modulus: u32) -> Result<Self, AnalysisError> {
        if modulus < 2 {
            return Err(AnalysisError::InvalidModulus { modulus });
        }
        Ok(Self { window, modulus })
    }

    pub fn window(&self) -> DigitWindow {
        self.window
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Does Δ(n) vanish modulo this property's modulus?
    #[inline]
    pub fn holds(&self, n: u64) -> bool {
        self.window
            .split(n)
            .delta()
            .rem_euclid(self.modulus as i128)
            == 0
    }

    /// Whether the per-class rates of [`ResidueClass::predicted_rate`] apply.
    ///
    /// They were derived for the whole-number decomposition with modulus 3.
    ///
    /// [`ResidueClass::predicted_rate`]: crate::arith::ResidueClass::predicted_rate
    pub fn predicts_residue_rates(&self) -> bool {
        self.window == DigitWindow::Whole && self.modulus == PROPERTY_MODULUS
    }

    /// Evaluate both members of a pair.
    #[inline]
    pub fn evaluate(&self, pair: PrimePair) -> PairOutcome {
        PairOutcome {
            first: self.holds(pair.first),
            second: self.holds(pair.second),
        }
    }
}

impl Default for DigitProperty {
    fn default() -> Self {
        Self {
            window: DigitWindow::LastTwo,
            modulus: PROPERTY_MODULUS,
        }
    }
}

/// Δ of the number formed by the last two decimal digits of `n`.
pub fn delta(n: u64) -> i128 {
    DigitWindow::LastTwo.split(n).delta()
}

/// Does `n` satisfy Δ ≡ 0 (mod 3) on its last two decimal digits?
///
/// Total over `u64`, but only meaningful for n ≥ 10; callers restrict pairs
/// to p ≥ 11.
pub fn satisfies_property(n: u64) -> bool {
    DigitProperty::default().holds(n)
}
