//! Solve command implementation for the Itinerant CLI.

use std::io::{BufReader, BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use itinerant_core::tickets::read_tickets;
use itinerant_core::{Edge, Itinerary, ItineraryReconstructor, ReconstructorConfig, Strategy};
use itinerant_fs::{create_output_file, is_regular_file, open_ticket_file};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_FORMAT, ARG_ONLY_READ, ARG_ORIGIN, ARG_OUTPUT, ARG_SKIP_DEGREE_CHECK, ARG_STRATEGY,
    ARG_TICKETS, CliError, DEFAULT_ORIGIN, ENV_SOLVE_TICKETS,
};

/// How the itinerary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum OutputFormat {
    /// One stop per line.
    #[default]
    Lines,
    /// A JSON report with the stops and the settings used.
    Json,
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read a ticket file (a ticket count followed by that many \
                 origin/destination pairs) and print the lexicographically \
                 smallest itinerary that uses every ticket exactly once. \
                 Options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Reconstruct an itinerary from a ticket file"
)]
#[ortho_config(prefix = "ITINERANT")]
pub(crate) struct SolveArgs {
    /// Path to the ticket file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) tickets: Option<Utf8PathBuf>,
    /// Stop the itinerary starts from (default: JFK).
    #[arg(long = ARG_ORIGIN, value_name = "label")]
    #[serde(default)]
    pub(crate) origin: Option<String>,
    /// Destination ordering strategy (default: sort-descending).
    #[arg(long = ARG_STRATEGY, value_name = "name")]
    #[serde(default)]
    pub(crate) strategy: Option<Strategy>,
    /// Output format (default: lines).
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Parse the ticket file and exit without reconstructing.
    #[arg(long = ARG_ONLY_READ, num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub(crate) only_read: Option<bool>,
    /// Walk the tickets without checking departure and arrival counts first.
    #[arg(long = ARG_SKIP_DEGREE_CHECK, num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub(crate) skip_degree_check: Option<bool>,
    /// Write the itinerary to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    pub(crate) tickets: Utf8PathBuf,
    pub(crate) origin: String,
    pub(crate) strategy: Strategy,
    pub(crate) format: OutputFormat,
    pub(crate) only_read: bool,
    pub(crate) check_degrees: bool,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.tickets, ARG_TICKETS)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub(crate) const fn reconstructor_config(&self) -> ReconstructorConfig {
        ReconstructorConfig {
            strategy: self.strategy,
            check_degrees: self.check_degrees,
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let tickets = args.tickets.ok_or(CliError::MissingArgument {
            field: ARG_TICKETS,
            env: ENV_SOLVE_TICKETS,
        })?;

        Ok(Self {
            tickets,
            origin: args.origin.unwrap_or_else(|| DEFAULT_ORIGIN.to_owned()),
            strategy: args.strategy.unwrap_or_default(),
            format: args.format.unwrap_or_default(),
            only_read: args.only_read.unwrap_or(false),
            check_degrees: !args.skip_degree_check.unwrap_or(false),
            output: args.output,
        })
    }
}

/// JSON shape of a solved itinerary.
#[derive(Debug, Serialize)]
struct ItineraryReport<'a> {
    origin: &'a str,
    strategy: Strategy,
    tickets: usize,
    stops: &'a Itinerary<String>,
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &mut stdout)
}

pub(crate) fn run_solve_with(args: SolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let edges = load_tickets(&config.tickets)?;

    if config.only_read {
        log::info!(
            "read {} tickets from {}; skipping reconstruction",
            edges.len(),
            config.tickets
        );
        return Ok(());
    }

    let itinerary = ItineraryReconstructor::with_config(config.reconstructor_config())
        .reconstruct(config.origin.clone(), edges)
        .map_err(|source| CliError::Reconstruct {
            path: config.tickets.clone(),
            source,
        })?;

    match &config.output {
        Some(path) => {
            let file = create_output_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            let mut buffered = BufWriter::new(file);
            write_itinerary(&mut buffered, &config, &itinerary)?;
            buffered.flush().map_err(CliError::WriteOutput)
        }
        None => write_itinerary(writer, &config, &itinerary),
    }
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads and parses a ticket file from disk.
pub(crate) fn load_tickets(path: &Utf8Path) -> Result<Vec<Edge<String>>, CliError> {
    let file = open_ticket_file(path).map_err(|source| CliError::OpenTickets {
        path: path.to_path_buf(),
        source,
    })?;
    let edges = read_tickets(BufReader::new(file)).map_err(|source| CliError::ParseTickets {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} tickets from {path}", edges.len());
    Ok(edges)
}

fn write_itinerary(
    writer: &mut dyn Write,
    config: &SolveConfig,
    itinerary: &Itinerary<String>,
) -> Result<(), CliError> {
    match config.format {
        OutputFormat::Lines => {
            for stop in itinerary.stops() {
                writeln!(writer, "{stop}").map_err(CliError::WriteOutput)?;
            }
        }
        OutputFormat::Json => {
            let report = ItineraryReport {
                origin: &config.origin,
                strategy: config.strategy,
                tickets: itinerary.ticket_count(),
                stops: itinerary,
            };
            let payload =
                serde_json::to_string_pretty(&report).map_err(CliError::SerialiseItinerary)?;
            writer
                .write_all(payload.as_bytes())
                .map_err(CliError::WriteOutput)?;
            writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
