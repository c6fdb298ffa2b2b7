//! Facade crate for the Itinerant itinerary reconstruction engine.
//!
//! This crate re-exports the core domain types and adds a one-call helper
//! for the common case of the default strategy.

#![forbid(unsafe_code)]

pub use itinerant_core::tickets::{TicketParseError, parse_tickets, read_tickets};
pub use itinerant_core::{
    Edge, Itinerary, ItineraryError, ItineraryReconstructor, ParseStrategyError,
    ReconstructorConfig, Strategy, TrailDefect,
};

#[cfg(feature = "test-support")]
pub use itinerant_core::test_support;

/// Reconstruct the smallest itinerary from `origin` with the default
/// configuration.
///
/// # Errors
///
/// Returns [`ItineraryError::NoEulerianTrail`] when the tickets cannot all
/// be used on a single trail from `origin`.
///
/// # Examples
///
/// ```
/// use itinerant::{Edge, reconstruct_itinerary};
///
/// # fn main() -> Result<(), itinerant::ItineraryError> {
/// let tickets = vec![Edge::new("MUC", "LHR"), Edge::new("JFK", "MUC")];
/// let itinerary = reconstruct_itinerary("JFK", tickets)?;
/// assert_eq!(itinerary.stops(), &["JFK", "MUC", "LHR"]);
/// # Ok(())
/// # }
/// ```
pub fn reconstruct_itinerary<L>(
    origin: L,
    tickets: Vec<Edge<L>>,
) -> Result<Itinerary<L>, ItineraryError>
where
    L: Ord + Clone,
{
    ItineraryReconstructor::new().reconstruct(origin, tickets)
}
