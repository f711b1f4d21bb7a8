//! Tracing setup for the `grader` binary.
//!
//! Events cover suite loading, one `info` per divergent case (with actual and
//! expected values and the substitution flag), and `debug` per passing case
//! and per hypotenuse comparison. They go to stderr. The
//! `unexpected behaviour` lines and summaries are written to stdout by the
//! CLI and do not depend on the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber, filtered by `RUST_LOG` (default `warn`).
///
/// `RUST_LOG=grader=info` shows why each case failed alongside the stdout
/// diagnostics; `grader=debug` traces every comparison.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
