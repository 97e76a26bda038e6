// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Diagnostic tracing for analysis runs.
//!
//! Diagnostics (sieve time, per-gap progress) go to stderr through
//! `tracing`. The report itself goes to stdout and never contains timings,
//! so it stays identical between runs.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `info` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=prime_delta=debug primedelta -n 10000000
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
