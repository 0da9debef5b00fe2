use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Installs the stderr subscriber.
///
/// Interactive sessions log nothing unless debug is on, since stderr shares
/// the terminal with the alternate screen.
pub fn init_logging(config: &AppConfig, headless: bool) {
    let filter = if config.debug {
        "debug".to_string()
    } else if headless {
        config.log_filter.clone()
    } else {
        return;
    };

    let env_filter = EnvFilter::try_new(&filter).unwrap_or_else(|error| {
        eprintln!("Invalid log filter '{filter}': {error}");
        EnvFilter::new(crate::config::DEFAULT_LOG_FILTER)
    });

    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        eprintln!("Logging was already initialized");
    }
}
