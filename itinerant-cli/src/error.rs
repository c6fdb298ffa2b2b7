//! Error types emitted by the Itinerant CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use itinerant_core::ItineraryError;
use itinerant_core::tickets::TicketParseError;
use thiserror::Error;

/// Errors emitted by the Itinerant CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Installing the log subscriber failed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Option name as shown on the command line.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the ticket file failed.
    #[error("failed to open ticket file at {path:?}: {source}")]
    OpenTickets {
        /// Ticket file path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The ticket file is malformed.
    #[error("failed to parse ticket file at {path:?}: {source}")]
    ParseTickets {
        /// Ticket file path.
        path: Utf8PathBuf,
        /// What was wrong with the contents.
        #[source]
        source: TicketParseError,
    },
    /// The tickets admit no itinerary from the requested origin.
    #[error("cannot build an itinerary from {path:?}: {source}")]
    Reconstruct {
        /// Ticket file path.
        path: Utf8PathBuf,
        /// Why no itinerary exists.
        #[source]
        source: ItineraryError,
    },
    /// Creating the output file failed.
    #[error("failed to create output file at {path:?}: {source}")]
    CreateOutput {
        /// Output path.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Serialising the itinerary report failed.
    #[error("failed to serialise itinerary: {0}")]
    SerialiseItinerary(#[source] serde_json::Error),
    /// Writing the itinerary failed.
    #[error("failed to write itinerary: {0}")]
    WriteOutput(#[source] std::io::Error),
}
