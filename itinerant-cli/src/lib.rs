//! Command-line interface for rebuilding itineraries from ticket files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod logging;
mod solve;

pub use error::CliError;

use logging::init_logging;
use solve::{SolveArgs, run_solve};

const ARG_TICKETS: &str = "tickets";
const ARG_ORIGIN: &str = "origin";
const ARG_STRATEGY: &str = "strategy";
const ARG_FORMAT: &str = "format";
const ARG_ONLY_READ: &str = "only-read";
const ARG_SKIP_DEGREE_CHECK: &str = "skip-degree-check";
const ARG_OUTPUT: &str = "output";
const ENV_SOLVE_TICKETS: &str = "ITINERANT_CMDS_SOLVE_TICKETS";
const ENV_LOG: &str = "ITINERANT_LOG";

/// Stop an itinerary starts from when no origin is configured.
const DEFAULT_ORIGIN: &str = "JFK";

/// Run the Itinerant CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// ticket file cannot be read, or the tickets admit no itinerary.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "itinerant",
    about = "Rebuild the smallest itinerary that uses every ticket exactly once",
    version
)]
struct Cli {
    /// Raise log verbosity; repeat for more detail. `ITINERANT_LOG`
    /// overrides it.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Reconstruct an itinerary from a ticket file.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
