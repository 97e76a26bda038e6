// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: accumulated state (mutable during a pass, read-only after).
//!
//! - `statistics`: Per-gap counters and counterexamples
//! - `structural`: Mod-6 and mod-30 breakdowns for gaps divisible by 6
//!
//! Each worker owns its accumulators; partial results are merged in prime
//! order once the workers finish.

pub mod statistics;
pub mod structural;

pub use statistics::{Counters, GapStatistics, Status, Tally};
pub use structural::{
    DigitPattern, FailureWitness, PatternStats, ResidueStats, StructuralGapStatistics,
    StructuralReport,
};
