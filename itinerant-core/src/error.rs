//! Errors reported by itinerary reconstruction.

use thiserror::Error;

/// Errors returned by [`ItineraryReconstructor::reconstruct`](crate::ItineraryReconstructor::reconstruct)
/// and [`reconstruct`](crate::traversal::reconstruct).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItineraryError {
    /// The tickets do not form a trail from the origin that uses each of
    /// them exactly once.
    #[error("no itinerary from the origin uses every ticket exactly once: {0}")]
    NoEulerianTrail(#[source] TrailDefect),
}

/// Why a ticket set admits no Eulerian trail from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrailDefect {
    /// The origin must have at most one more departure than arrival, and
    /// never fewer departures than arrivals.
    #[error("origin has {out_degree} departures and {in_degree} arrivals")]
    UnbalancedOrigin {
        /// Tickets leaving the origin.
        out_degree: usize,
        /// Tickets arriving at the origin.
        in_degree: usize,
    },
    /// Stops other than the origin must balance departures and arrivals,
    /// except for a single final stop when the origin has a surplus.
    #[error("{count} stop(s) other than the origin have unbalanced departures and arrivals")]
    UnbalancedStops {
        /// Number of stops violating the balance rule.
        count: usize,
    },
    /// Backtracking reached a stop that no ticket joins to the one emitted
    /// after it, so the tickets cannot be chained into one trail.
    #[error("the tickets cannot be chained into a single trail from the origin")]
    BrokenTrail,
    /// The walk from the origin ended with tickets still unused, so they lie
    /// in a part of the graph the origin cannot reach.
    #[error("{remaining} ticket(s) cannot be reached from the origin")]
    UnreachableTickets {
        /// Tickets left unused once the walk finished.
        remaining: usize,
    },
}

impl From<TrailDefect> for ItineraryError {
    fn from(defect: TrailDefect) -> Self {
        Self::NoEulerianTrail(defect)
    }
}
