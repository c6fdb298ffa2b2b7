//! Proptest strategies and oracles for itinerary property tests.
//!
//! Ticket sets are generated two ways: as random walks, which always admit a
//! trail from their first stop, and as arbitrary pairs, which usually do
//! not. The exhaustive search below serves as the reference answer for both.

use itinerant_core::Edge;
use proptest::prelude::*;

/// Stop labels drawn on by the generators.
const LABELS: [&str; 6] = ["ATL", "JFK", "KUL", "LHR", "NRT", "SFO"];

/// A generated input: the origin and the tickets in arbitrary order.
#[derive(Debug, Clone)]
pub struct TicketSet {
    /// Stop the itinerary must start from.
    pub origin: String,
    /// Tickets to consume.
    pub edges: Vec<Edge<String>>,
}

fn label(index: usize) -> String {
    LABELS
        .get(index)
        .copied()
        .unwrap_or("ZZZ")
        .to_owned()
}

/// Strategy for ticket sets produced by a random walk over `stop_count`
/// labels.
///
/// The walk itself is a valid trail, so every generated set admits one.
pub fn walk_strategy(stop_count: usize, max_tickets: usize) -> impl Strategy<Value = TicketSet> {
    let stops = stop_count.clamp(1, LABELS.len());
    (0..stops, proptest::collection::vec(0..stops, 0..=max_tickets)).prop_flat_map(
        |(origin, steps)| {
            let mut previous = origin;
            let edges: Vec<Edge<String>> = steps
                .into_iter()
                .map(|next| {
                    let edge = Edge::new(label(previous), label(next));
                    previous = next;
                    edge
                })
                .collect();
            Just(edges)
                .prop_shuffle()
                .prop_map(move |shuffled| TicketSet {
                    origin: label(origin),
                    edges: shuffled,
                })
        },
    )
}

/// Strategy for arbitrary ticket pairs over `stop_count` labels.
pub fn arbitrary_strategy(
    stop_count: usize,
    max_tickets: usize,
) -> impl Strategy<Value = TicketSet> {
    let stops = stop_count.clamp(1, LABELS.len());
    (
        0..stops,
        proptest::collection::vec((0..stops, 0..stops), 0..=max_tickets),
    )
        .prop_map(|(origin, pairs)| TicketSet {
            origin: label(origin),
            edges: pairs
                .into_iter()
                .map(|(from, to)| Edge::new(label(from), label(to)))
                .collect(),
        })
}

/// Find the smallest trail from `origin` using every ticket by exhaustive
/// search.
///
/// Destinations are tried in ascending order, so the first complete trail
/// found is the smallest. Runtime is exponential; keep inputs small.
#[must_use]
pub fn smallest_trail_by_search<L: Ord + Clone>(origin: &L, edges: &[Edge<L>]) -> Option<Vec<L>> {
    let mut sorted: Vec<&Edge<L>> = edges.iter().collect();
    sorted.sort_by(|lhs, rhs| lhs.destination.cmp(&rhs.destination));
    let mut used = vec![false; sorted.len()];
    let mut path = vec![origin.clone()];
    extend_trail(&sorted, &mut used, &mut path).then_some(path)
}

#[expect(
    clippy::indexing_slicing,
    reason = "indices come from enumerating the same slices"
)]
fn extend_trail<L: Ord + Clone>(sorted: &[&Edge<L>], used: &mut [bool], path: &mut Vec<L>) -> bool {
    if path.len() == sorted.len() + 1 {
        return true;
    }
    let Some(current) = path.last().cloned() else {
        return false;
    };

    // Identical tickets lead to identical subtrees; skip repeats of a
    // destination that already failed.
    let mut last_failed: Option<&L> = None;
    for (index, edge) in sorted.iter().enumerate() {
        if used[index] || edge.origin != current || last_failed == Some(&edge.destination) {
            continue;
        }
        used[index] = true;
        path.push(edge.destination.clone());
        if extend_trail(sorted, used, path) {
            return true;
        }
        path.pop();
        used[index] = false;
        last_failed = Some(&edge.destination);
    }
    false
}

/// Sorted copy of a ticket multiset, for order-insensitive comparison.
#[must_use]
pub fn sorted_multiset<L: Ord + Clone>(edges: impl IntoIterator<Item = Edge<L>>) -> Vec<Edge<L>> {
    let mut sorted: Vec<Edge<L>> = edges.into_iter().collect();
    sorted.sort();
    sorted
}
