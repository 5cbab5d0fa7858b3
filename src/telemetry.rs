use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "HEALTHPLANNER_LOG";

/// Install the global stderr subscriber. `default_level` applies when
/// `HEALTHPLANNER_LOG` is unset or invalid. Safe to call more than once.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
