//! Reader for the flat ticket text format.
//!
//! The format is a ticket count `M` followed by `M` whitespace-separated
//! `origin destination` pairs:
//!
//! ```text
//! 4
//! JFK SFO
//! JFK ATL
//! SFO ATL
//! ATL JFK
//! ```
//!
//! Line breaks carry no meaning. Anything after the `M`-th pair is ignored.

use std::io::{self, Read};

use thiserror::Error;

use crate::Edge;

/// Upper bound on tickets reserved up front; the count token is untrusted.
const MAX_PREALLOCATED_TICKETS: usize = 1 << 16;

/// Errors returned while reading a ticket list.
#[derive(Debug, Error)]
pub enum TicketParseError {
    /// The input held no tokens at all.
    #[error("ticket list is empty; expected a ticket count")]
    MissingCount,
    /// The first token was not a non-negative integer.
    #[error("invalid ticket count {token:?}")]
    InvalidCount {
        /// The rejected token.
        token: String,
        /// Why it failed to parse.
        #[source]
        source: std::num::ParseIntError,
    },
    /// Fewer label pairs followed than the count announced.
    #[error("expected {expected} tickets but found {found}")]
    Truncated {
        /// Tickets announced by the count.
        expected: usize,
        /// Complete pairs actually present.
        found: usize,
    },
    /// Reading the underlying source failed.
    #[error("failed to read ticket list: {0}")]
    Io(#[from] io::Error),
}

/// Parse a ticket list from text.
///
/// # Errors
///
/// Returns [`TicketParseError`] when the count is missing or malformed or
/// when fewer pairs follow than announced.
///
/// # Examples
///
/// ```
/// use itinerant_core::{Edge, tickets::parse_tickets};
///
/// # fn main() -> Result<(), itinerant_core::tickets::TicketParseError> {
/// let edges = parse_tickets("2\nJFK SFO\nSFO ATL\n")?;
/// assert_eq!(edges, vec![
///     Edge::new("JFK".to_owned(), "SFO".to_owned()),
///     Edge::new("SFO".to_owned(), "ATL".to_owned()),
/// ]);
/// # Ok(())
/// # }
/// ```
pub fn parse_tickets(input: &str) -> Result<Vec<Edge<String>>, TicketParseError> {
    let mut tokens = input.split_whitespace();
    let count_token = tokens.next().ok_or(TicketParseError::MissingCount)?;
    let expected: usize = count_token
        .parse()
        .map_err(|source| TicketParseError::InvalidCount {
            token: count_token.to_owned(),
            source,
        })?;

    let mut edges = Vec::with_capacity(expected.min(MAX_PREALLOCATED_TICKETS));
    while edges.len() < expected {
        let (Some(origin), Some(destination)) = (tokens.next(), tokens.next()) else {
            return Err(TicketParseError::Truncated {
                expected,
                found: edges.len(),
            });
        };
        edges.push(Edge::new(origin.to_owned(), destination.to_owned()));
    }

    let ignored = tokens.count();
    if ignored > 0 {
        log::warn!("ignoring {ignored} token(s) after the last of {expected} tickets");
    }
    Ok(edges)
}

/// Read and parse a ticket list from any reader.
///
/// # Errors
///
/// Returns [`TicketParseError::Io`] when reading fails (including invalid
/// UTF-8) and the errors of [`parse_tickets`] otherwise.
pub fn read_tickets<R: Read>(mut reader: R) -> Result<Vec<Edge<String>>, TicketParseError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_tickets(&input)
}
