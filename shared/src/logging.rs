//! Process-wide logging bootstrap for both services.
//!
//! Log lines use `event=<name> key=value` pairs so they stay greppable.
//! `RUST_LOG` overrides the default `info` filter.

use env_logger::Env;

const DEFAULT_FILTER: &str = "info";

/// Installs the `env_logger` backend. Calling it more than once is harmless;
/// later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .try_init();
}
