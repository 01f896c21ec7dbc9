//! Logging configuration and initialization

use crate::app::config::Config;
use tracing::debug;

/// Initialize tracing/logging from `config`.
///
/// Later calls are no-ops once a global subscriber is installed, so tests
/// may call this freely.
pub fn init_logging(config: &Config) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(config.log_level())
        .with_target(config.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(config.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(config.verbose >= 3) // Show line numbers for -vvv
        .try_init()
        .is_ok();

    if installed {
        debug!("logging initialized at '{}'", config.log_level());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_is_harmless() {
        let config = Config {
            verbose: 1,
            ..Config::default()
        };

        init_logging(&config);
        init_logging(&config);
    }
}
