//! Log subscriber set-up for the binary.
//!
//! Library crates emit records through the `log` facade; the subscriber's
//! `tracing-log` bridge picks them up.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::{CliError, ENV_LOG};

/// Map `-v` repetitions to the default level filter.
pub(crate) const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr subscriber filtered by `ITINERANT_LOG`, falling back to
/// the level chosen by `verbosity`.
pub(crate) fn init_logging(verbosity: u8) -> Result<(), CliError> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbosity).into())
        .with_env_var(ENV_LOG)
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(CliError::Logging)
}
