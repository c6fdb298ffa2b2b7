//! Adjacency builder: groups tickets by origin.

use std::collections::BTreeMap;

use crate::Edge;
use crate::selector::{DestinationQueue, EdgeSelector};

/// Unused tickets grouped by origin, each origin holding a queue `Q` of
/// destinations.
///
/// The total number of queued destinations equals the number of tickets
/// the map was built from and drops by one for every
/// [`pop_min`](EdgeSelector::pop_min). A traversal owns the map exclusively
/// while it drains it.
///
/// # Examples
///
/// ```
/// use itinerant_core::{AdjacencyMap, DescendingStack, Edge, EdgeSelector};
///
/// let tickets = vec![Edge::new("JFK", "SFO"), Edge::new("JFK", "ATL")];
/// let mut map = AdjacencyMap::<_, DescendingStack<_>>::build(tickets);
/// assert_eq!(map.remaining(), 2);
/// assert_eq!(map.pop_min(&"JFK"), "ATL");
/// assert!(!map.has_next(&"SFO"));
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyMap<L, Q> {
    queues: BTreeMap<L, Q>,
    remaining: usize,
}

impl<L, Q> AdjacencyMap<L, Q>
where
    L: Ord,
    Q: DestinationQueue<L>,
{
    /// Build the map from a ticket list.
    ///
    /// Every ticket contributes one destination to its origin's queue; there
    /// is no deduplication and no check that destinations appear as origins.
    /// When `Q` is [`PRESORTED`](DestinationQueue::PRESORTED) the tickets are
    /// first sorted descending by `(origin, destination)`.
    #[must_use]
    pub fn build(mut edges: Vec<Edge<L>>) -> Self {
        if Q::PRESORTED {
            edges.sort_unstable_by(|lhs, rhs| rhs.cmp(lhs));
        }

        let remaining = edges.len();
        let mut queues: BTreeMap<L, Q> = BTreeMap::new();
        for Edge {
            origin,
            destination,
        } in edges
        {
            queues.entry(origin).or_default().insert(destination);
        }
        for queue in queues.values_mut() {
            queue.seal();
        }

        Self { queues, remaining }
    }

    /// Number of distinct origins.
    #[must_use]
    pub fn origin_count(&self) -> usize {
        self.queues.len()
    }

    /// Unused tickets leaving `node`.
    #[must_use]
    pub fn out_degree(&self, node: &L) -> usize {
        self.queues.get(node).map_or(0, |queue| queue.len())
    }
}

impl<L, Q> EdgeSelector<L> for AdjacencyMap<L, Q>
where
    L: Ord,
    Q: DestinationQueue<L>,
{
    fn has_next(&self, node: &L) -> bool {
        self.queues.get(node).is_some_and(|queue| !queue.is_empty())
    }

    #[expect(
        clippy::expect_used,
        reason = "popping an exhausted node is a caller bug and must fail fast"
    )]
    fn pop_min(&mut self, node: &L) -> L {
        let destination = self
            .queues
            .get_mut(node)
            .and_then(|queue| queue.pop_min())
            .expect("pop_min called on a node without unused tickets");
        self.remaining -= 1;
        destination
    }

    fn remaining(&self) -> usize {
        self.remaining
    }
}
