//! Test-only helpers shared by unit tests and downstream crates.
//!
//! Available under `cfg(test)` or with the `test-support` feature.

use crate::Edge;

/// Build borrowed tickets from `(origin, destination)` pairs.
///
/// # Examples
/// ```rust
/// use itinerant_core::Edge;
/// use itinerant_core::test_support::tickets;
///
/// assert_eq!(tickets(&[("JFK", "SFO")]), vec![Edge::new("JFK", "SFO")]);
/// ```
#[must_use]
pub fn tickets(pairs: &[(&'static str, &'static str)]) -> Vec<Edge<&'static str>> {
    pairs.iter().copied().map(Edge::from).collect()
}

/// Build owned tickets from `(origin, destination)` pairs.
#[must_use]
pub fn owned_tickets(pairs: &[(&str, &str)]) -> Vec<Edge<String>> {
    pairs
        .iter()
        .map(|&(origin, destination)| Edge::new(origin.to_owned(), destination.to_owned()))
        .collect()
}

/// Render tickets in the flat text format read by
/// [`parse_tickets`](crate::tickets::parse_tickets).
#[must_use]
pub fn ticket_file(pairs: &[(&str, &str)]) -> String {
    let mut text = format!("{}\n", pairs.len());
    for (origin, destination) in pairs {
        text.push_str(origin);
        text.push(' ');
        text.push_str(destination);
        text.push('\n');
    }
    text
}
