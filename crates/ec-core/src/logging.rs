//! Optional `env_logger` bootstrap for binaries and tests linking the engine.
//!
//! The engine only emits through the `log` facade; nothing is printed unless
//! the host installs a logger.

use log::LevelFilter;

/// Environment variable holding an `env_logger` filter, e.g. `ec_core=trace`.
pub const LOG_ENV: &str = "EC_LOG";

/// Installs `env_logger`, reading the filter from [`LOG_ENV`] and falling back
/// to `default_filter`.
///
/// Returns `false` if a logger was already installed.
pub fn init(default_filter: &str) -> bool {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, default_filter))
        .try_init()
        .is_ok()
}

/// Installs a logger capturing output for the test harness.
pub fn init_for_tests() {
    let _ = env_logger::Builder::default()
        .filter_level(LevelFilter::Trace)
        .is_test(true)
        .try_init();
}
