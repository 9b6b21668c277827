//! Tracing subscriber setup for the CLI.

use crate::config::LoggingConfig;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Filter directive for the configured level and `-v` count.
///
/// `-v` raises everything to `debug`, `-vv` and above to `trace`.
pub fn filter_directive(config: &LoggingConfig, verbose: u8) -> String {
    match verbose {
        0 => config.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG`, when set and valid, takes precedence over the configured
/// level. Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(config: &LoggingConfig, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config, verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .try_init()
        .is_ok();

    if installed {
        debug!("shapes started with verbosity level: {verbose}");
        trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    }
}
