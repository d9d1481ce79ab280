//! Tracing setup for the rootfind binary.
//!
//! Events go to stderr. Stdout is reserved for result lines so it can be
//! piped or parsed as JSON.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when `--verbose` is not given
pub const QUIET_LEVEL: &str = "warn";

/// Level used with `--verbose`
pub const VERBOSE_LEVEL: &str = "debug";

/// Pick the default filter level for a verbosity flag
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        QUIET_LEVEL
    }
}

/// Install the subscriber for a CLI run
///
/// `RUST_LOG` wins over the verbosity flag when set.
pub fn init(verbose: bool) {
    init_with_level(level_for(verbose))
}

/// Install the subscriber with `default_level` as the fallback filter
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route debug events into the test harness output; safe to call repeatedly
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new(VERBOSE_LEVEL))
        .try_init();
}
