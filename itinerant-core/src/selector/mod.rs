//! Edge selection strategies.
//!
//! Every strategy answers the same question for a node: which is the
//! smallest destination that still has an unused ticket? They differ only
//! in how they keep destinations ordered. [`DestinationQueue`] is the
//! per-node half of that contract; [`EdgeSelector`] is what the traversal
//! engine consumes, and [`AdjacencyMap`](crate::AdjacencyMap) implements it
//! for every queue type.

mod heap;
mod multiset;
mod sorted;

pub use heap::{HeapifiedQueue, MinHeapQueue};
pub use multiset::OrderedMultiset;
pub use sorted::{AscendingQueue, DescendingStack, PresortedStack};

/// Destinations reachable from one node by an unused ticket.
///
/// The adjacency builder calls [`insert`](Self::insert) once per ticket and
/// then [`seal`](Self::seal) exactly once. Traversal only calls
/// [`pop_min`](Self::pop_min) afterwards.
pub trait DestinationQueue<L>: Default {
    /// When `true`, the builder feeds tickets in descending
    /// `(origin, destination)` order, so each queue receives its
    /// destinations largest first.
    const PRESORTED: bool = false;

    /// Queue one more destination.
    fn insert(&mut self, destination: L);

    /// One-off ordering step run after the last insertion.
    fn seal(&mut self) {}

    /// Remove and return the smallest queued destination.
    fn pop_min(&mut self) -> Option<L>;

    /// Number of queued destinations, counting duplicates.
    fn len(&self) -> usize;

    /// Whether no destination is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Supplies the next ticket to follow during traversal.
pub trait EdgeSelector<L> {
    /// Whether `node` still has an unused outgoing ticket.
    fn has_next(&self, node: &L) -> bool;

    /// Remove the smallest unused destination leaving `node`.
    ///
    /// # Panics
    ///
    /// Panics when `node` has no unused ticket. Callers must check
    /// [`has_next`](Self::has_next) first.
    fn pop_min(&mut self, node: &L) -> L;

    /// Unused tickets left across every node.
    fn remaining(&self) -> usize;
}
