//! Hierholzer-style traversal producing the smallest itinerary.
//!
//! The walk always follows the smallest unused ticket first and records a
//! stop only once every ticket leaving it is spent (post-order). Reversing
//! that record gives the lexicographically smallest trail. A dead end
//! reached too early is simply emitted first and ends up last after the
//! reversal, which is why greedy choice never strands tickets.
//!
//! The walk keeps its own stack, so input size never bounds call depth.

use std::collections::BTreeMap;

use crate::error::{ItineraryError, TrailDefect};
use crate::selector::EdgeSelector;
use crate::{Edge, Itinerary};

/// Walk every ticket held by `selector`, starting at `origin`.
///
/// The selector is consumed: a traversal owns its adjacency data for its
/// whole lifetime.
///
/// Each stop is emitted only after the stop it was reached from has been
/// seen again on the way back, so every leg of a returned itinerary is a
/// ticket. A ticket set with no trail from `origin` is rejected even when
/// [`check_degrees`] was skipped.
///
/// # Errors
///
/// Returns [`TrailDefect::BrokenTrail`] when backtracking would join two
/// stops no ticket connects, and [`TrailDefect::UnreachableTickets`] when
/// the walk ends with tickets still unused.
///
/// # Examples
///
/// ```
/// use itinerant_core::traversal::reconstruct;
/// use itinerant_core::{AdjacencyMap, Edge, MinHeapQueue};
///
/// # fn main() -> Result<(), itinerant_core::ItineraryError> {
/// let tickets = vec![
///     Edge::new("JFK", "KUL"),
///     Edge::new("JFK", "NRT"),
///     Edge::new("NRT", "JFK"),
/// ];
/// let map = AdjacencyMap::<_, MinHeapQueue<_>>::build(tickets);
/// let itinerary = reconstruct("JFK", map)?;
/// assert_eq!(itinerary.stops(), &["JFK", "NRT", "JFK", "KUL"]);
/// # Ok(())
/// # }
/// ```
pub fn reconstruct<L, S>(origin: L, mut selector: S) -> Result<Itinerary<L>, ItineraryError>
where
    L: PartialEq,
    S: EdgeSelector<L>,
{
    let ticket_count = selector.remaining();
    let mut stack = Vec::with_capacity(ticket_count + 1);
    let mut post_order = Vec::with_capacity(ticket_count + 1);
    // Stack depth of the stop the last emitted one was reached from.
    let mut predecessor: Option<usize> = None;
    stack.push(origin);

    while let Some(node) = stack.last() {
        if selector.has_next(node) {
            let next = selector.pop_min(node);
            stack.push(next);
        } else if let Some(finished) = stack.pop() {
            let depth = stack.len();
            if let Some(expected) = predecessor
                && expected != depth
                && stack.get(expected) != Some(&finished)
            {
                log::warn!(
                    "walk backtracked onto a stop no ticket joins; {} of {ticket_count} tickets unused",
                    selector.remaining()
                );
                return Err(TrailDefect::BrokenTrail.into());
            }
            predecessor = depth.checked_sub(1);
            post_order.push(finished);
        }
    }

    let remaining = selector.remaining();
    if remaining > 0 {
        log::warn!("walk finished with {remaining} of {ticket_count} tickets unused");
        return Err(TrailDefect::UnreachableTickets { remaining }.into());
    }

    post_order.reverse();
    debug_assert_eq!(post_order.len(), ticket_count + 1);
    log::debug!("reconstructed itinerary of {} stops", post_order.len());
    Ok(Itinerary::from_stops(post_order))
}

/// Check the degree conditions for an Eulerian trail starting at `origin`.
///
/// The origin may have one more departure than arrival (the trail ends
/// elsewhere) or be balanced (the trail returns to it). Every other stop
/// must be balanced or, for the single final stop, have one more arrival
/// than departure. Connectivity is not checked here; [`reconstruct`]
/// reports tickets the walk could not reach.
///
/// # Errors
///
/// Returns [`TrailDefect::UnbalancedOrigin`] or
/// [`TrailDefect::UnbalancedStops`] when the conditions fail.
///
/// # Examples
///
/// ```
/// use itinerant_core::traversal::check_degrees;
/// use itinerant_core::{Edge, TrailDefect};
///
/// let tickets = [Edge::new("JFK", "SFO"), Edge::new("JFK", "ATL")];
/// assert_eq!(
///     check_degrees(&"JFK", &tickets),
///     Err(TrailDefect::UnbalancedOrigin { out_degree: 2, in_degree: 0 })
/// );
/// ```
pub fn check_degrees<L: Ord>(origin: &L, edges: &[Edge<L>]) -> Result<(), TrailDefect> {
    let degrees = degree_table(edges);

    let (out_degree, in_degree) = degrees.get(origin).copied().unwrap_or_default();
    if out_degree != in_degree && out_degree != in_degree + 1 {
        return Err(TrailDefect::UnbalancedOrigin {
            out_degree,
            in_degree,
        });
    }

    // Degree surpluses sum to zero, so once every other stop is balanced or
    // a sink, the single sink required by a surplus origin is implied.
    let count = degrees
        .iter()
        .filter(|(node, _)| **node != origin)
        .filter(|(_, (out, inbound))| out != inbound && *inbound != out + 1)
        .count();
    if count > 0 {
        return Err(TrailDefect::UnbalancedStops { count });
    }
    Ok(())
}

fn degree_table<L: Ord>(edges: &[Edge<L>]) -> BTreeMap<&L, (usize, usize)> {
    let mut degrees: BTreeMap<&L, (usize, usize)> = BTreeMap::new();
    for edge in edges {
        degrees.entry(&edge.origin).or_default().0 += 1;
        degrees.entry(&edge.destination).or_default().1 += 1;
    }
    degrees
}
