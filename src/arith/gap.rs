// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prime gaps and their residue classes mod 30.
//!
//! # Examples
//!
//! ```
//! use prime_delta::arith::{Gap, ResidueClass};
//!
//! let twin = Gap::new(2).unwrap();
//! assert_eq!(twin.name(), Some("Twin"));
//! assert_eq!(twin.label(), "Twin");
//!
//! let gap = Gap::new(36).unwrap();
//! assert_eq!(gap.label(), "Gap-36");
//! assert_eq!(gap.residue_class(), Some(ResidueClass::Six));
//!
//! assert!(Gap::new(3).is_err());
//! ```

use crate::arith::constants::{DEFAULT_GAPS, RESIDUE_MODULUS, STRUCTURAL_GAP_STEP};
use crate::error::AnalysisError;
use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// A positive even distance k between the members of a prime pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gap(u64);

impl Gap {
    /// Create a gap, rejecting zero and odd values.
    pub fn new(k: u64) -> Result<Self, AnalysisError> {
        if k == 0 || k % 2 != 0 {
            return Err(AnalysisError::InvalidGap { gap: k });
        }
        Ok(Self(k))
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Conventional name of small gaps.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            2 => Some("Twin"),
            4 => Some("Cousin"),
            6 => Some("Sexy"),
            _ => None,
        }
    }

    /// The name if there is one, else `Gap-k`.
    pub fn label(self) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => format!("Gap-{}", self.0),
        }
    }

    /// Residue class of a multiple of 6; `None` for other gaps.
    pub fn residue_class(self) -> Option<ResidueClass> {
        ResidueClass::of(self.0)
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a list of raw gap values, preserving order.
pub fn gaps_from(values: &[u64]) -> Result<Vec<Gap>, AnalysisError> {
    values.iter().map(|&k| Gap::new(k)).collect()
}

/// The gaps examined by the flat sweep by default.
pub fn default_gaps() -> Vec<Gap> {
    DEFAULT_GAPS.iter().map(|&k| Gap(k)).collect()
}

/// All multiples of 6 up to and including `limit`.
///
/// Fails when `limit` admits no multiple of 6.
pub fn structural_gaps(limit: u64) -> Result<Vec<Gap>, AnalysisError> {
    if limit < STRUCTURAL_GAP_STEP {
        return Err(AnalysisError::InvalidStructuralLimit { limit });
    }
    Ok((1..=limit / STRUCTURAL_GAP_STEP)
        .map(|i| Gap(i * STRUCTURAL_GAP_STEP))
        .collect())
}

/// Residue of a multiple-of-6 gap modulo 30.
///
/// The heuristic for gaps k ≡ 0 (mod 6) predicts that success rates converge
/// per class: 3/4 for k ≡ 0, 5/6 for k ≡ 6 or 24, and 1 for k ≡ 12 or 18
/// (mod 30). The predictions are derived for the whole-number digit
/// decomposition with modulus 3; see
/// [`DigitProperty::predicts_residue_rates`](crate::arith::DigitProperty::predicts_residue_rates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCountMacro)]
pub enum ResidueClass {
    Zero,
    Six,
    Twelve,
    Eighteen,
    TwentyFour,
}

impl ResidueClass {
    /// Class of a gap, if the gap is a multiple of 6.
    pub fn of(gap: u64) -> Option<Self> {
        if gap % STRUCTURAL_GAP_STEP != 0 {
            return None;
        }
        match gap % RESIDUE_MODULUS {
            0 => Some(ResidueClass::Zero),
            6 => Some(ResidueClass::Six),
            12 => Some(ResidueClass::Twelve),
            18 => Some(ResidueClass::Eighteen),
            24 => Some(ResidueClass::TwentyFour),
            _ => None,
        }
    }

    /// The residue k mod 30 shared by the class.
    pub fn residue(self) -> u64 {
        self.index() as u64 * STRUCTURAL_GAP_STEP
    }

    /// Position of the class in residue order.
    pub fn index(self) -> usize {
        match self {
            ResidueClass::Zero => 0,
            ResidueClass::Six => 1,
            ResidueClass::Twelve => 2,
            ResidueClass::Eighteen => 3,
            ResidueClass::TwentyFour => 4,
        }
    }

    /// Limiting success rate predicted for gaps in this class.
    pub fn predicted_rate(self) -> f64 {
        match self {
            ResidueClass::Zero => 3.0 / 4.0,
            ResidueClass::Six | ResidueClass::TwentyFour => 5.0 / 6.0,
            ResidueClass::Twelve | ResidueClass::Eighteen => 1.0,
        }
    }
}

impl fmt::Display for ResidueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.residue(), RESIDUE_MODULUS)
    }
}
