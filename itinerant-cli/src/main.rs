//! Entry point for the `itinerant` command-line interface.
#![forbid(unsafe_code)]

use itinerant_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    match itinerant_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("itinerant: {err}");
            std::process::exit(1);
        }
    }
}
