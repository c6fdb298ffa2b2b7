//! Destination queues sorted once after insertion.

use std::collections::VecDeque;

use super::DestinationQueue;

/// Destinations sorted descending once, then popped from the back.
///
/// Removal from the tail of a descending list yields ascending visiting
/// order in amortised `O(1)`.
#[derive(Debug, Clone)]
pub struct DescendingStack<L> {
    destinations: Vec<L>,
}

impl<L> Default for DescendingStack<L> {
    fn default() -> Self {
        Self {
            destinations: Vec::new(),
        }
    }
}

impl<L: Ord> DestinationQueue<L> for DescendingStack<L> {
    fn insert(&mut self, destination: L) {
        self.destinations.push(destination);
    }

    fn seal(&mut self) {
        self.destinations.sort_unstable_by(|lhs, rhs| rhs.cmp(lhs));
    }

    fn pop_min(&mut self) -> Option<L> {
        self.destinations.pop()
    }

    fn len(&self) -> usize {
        self.destinations.len()
    }
}

/// Destinations sorted ascending once, then popped from the front.
///
/// The ring buffer keeps a head index, so front removal is `O(1)` rather
/// than shifting the remaining destinations.
#[derive(Debug, Clone)]
pub struct AscendingQueue<L> {
    destinations: VecDeque<L>,
}

impl<L> Default for AscendingQueue<L> {
    fn default() -> Self {
        Self {
            destinations: VecDeque::new(),
        }
    }
}

impl<L: Ord> DestinationQueue<L> for AscendingQueue<L> {
    fn insert(&mut self, destination: L) {
        self.destinations.push_back(destination);
    }

    fn seal(&mut self) {
        self.destinations.make_contiguous().sort_unstable();
    }

    fn pop_min(&mut self) -> Option<L> {
        self.destinations.pop_front()
    }

    fn len(&self) -> usize {
        self.destinations.len()
    }
}

/// Stack filled from a globally pre-sorted ticket list.
///
/// The builder sorts all tickets descending by `(origin, destination)`
/// before bucketing, so each stack is already descending and needs no
/// per-node sort.
#[derive(Debug, Clone)]
pub struct PresortedStack<L> {
    destinations: Vec<L>,
}

impl<L> Default for PresortedStack<L> {
    fn default() -> Self {
        Self {
            destinations: Vec::new(),
        }
    }
}

impl<L: Ord> DestinationQueue<L> for PresortedStack<L> {
    const PRESORTED: bool = true;

    fn insert(&mut self, destination: L) {
        debug_assert!(
            self.destinations.last().is_none_or(|last| *last >= destination),
            "presorted stack fed out of order"
        );
        self.destinations.push(destination);
    }

    fn pop_min(&mut self) -> Option<L> {
        self.destinations.pop()
    }

    fn len(&self) -> usize {
        self.destinations.len()
    }
}
