//! Binary-heap backed destination queues.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::DestinationQueue;

/// Min-priority queue kept ordered on every insertion.
///
/// Both insertion and removal cost `O(log k)` for `k` queued destinations.
#[derive(Debug, Clone)]
pub struct MinHeapQueue<L> {
    heap: BinaryHeap<Reverse<L>>,
}

impl<L: Ord> Default for MinHeapQueue<L> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<L: Ord> DestinationQueue<L> for MinHeapQueue<L> {
    fn insert(&mut self, destination: L) {
        self.heap.push(Reverse(destination));
    }

    fn pop_min(&mut self) -> Option<L> {
        self.heap.pop().map(|Reverse(destination)| destination)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Min-heap built in one `O(k)` heapify pass once all destinations are
/// known.
///
/// Insertions are plain appends; removal costs `O(log k)`.
#[derive(Debug, Clone)]
pub struct HeapifiedQueue<L> {
    pending: Vec<Reverse<L>>,
    heap: BinaryHeap<Reverse<L>>,
}

impl<L: Ord> Default for HeapifiedQueue<L> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            heap: BinaryHeap::new(),
        }
    }
}

impl<L: Ord> DestinationQueue<L> for HeapifiedQueue<L> {
    fn insert(&mut self, destination: L) {
        self.pending.push(Reverse(destination));
    }

    fn seal(&mut self) {
        let mut built = BinaryHeap::from(std::mem::take(&mut self.pending));
        self.heap.append(&mut built);
    }

    fn pop_min(&mut self) -> Option<L> {
        debug_assert!(self.pending.is_empty(), "queue popped before sealing");
        self.heap.pop().map(|Reverse(destination)| destination)
    }

    fn len(&self) -> usize {
        self.heap.len() + self.pending.len()
    }
}
