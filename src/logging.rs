//! Logging setup for the command-line tool

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SHARED_CONFIG_LOG";

static INIT: Once = Once::new();

/// Install the stderr log subscriber.
///
/// `SHARED_CONFIG_LOG` (e.g. `shared_config=debug`) takes precedence over
/// `default_directive`. Only the first call has any effect.
pub fn init_tracing(default_directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}

/// Default filter directive for a verbosity flag pair
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (true, _) => "shared_config=debug",
        (false, true) => "shared_config=error",
        (false, false) => "shared_config=info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, false), "shared_config=info");
        assert_eq!(default_directive(true, false), "shared_config=debug");
        assert_eq!(default_directive(false, true), "shared_config=error");
        assert_eq!(default_directive(true, true), "shared_config=debug");
    }
}
