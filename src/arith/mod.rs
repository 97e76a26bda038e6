// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arithmetic primitives for the prime pair analyses.
//!
//! - `constants`: Compile-time defaults and limits
//! - `digits`: The digit-square modular property
//! - `gap`: Gap values, display names and residue classes mod 30
//! - `pair`: Prime pairs and per-member property outcomes

pub mod constants;
pub mod digits;
pub mod gap;
pub mod pair;

pub use constants::*;
pub use digits::{delta, satisfies_property, DigitProperty, DigitSplit, DigitWindow};
pub use gap::{default_gaps, gaps_from, structural_gaps, Gap, ResidueClass};
pub use pair::{PairOutcome, PrimePair};
