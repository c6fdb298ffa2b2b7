//! Ordered multiset of destinations.

use std::collections::BTreeMap;

use super::DestinationQueue;

/// Destinations counted per distinct label in an ordered map.
///
/// Duplicate tickets share one entry, so both insertion and removal cost
/// `O(log d)` for `d` distinct destinations.
#[derive(Debug, Clone)]
pub struct OrderedMultiset<L> {
    counts: BTreeMap<L, usize>,
    len: usize,
}

impl<L> Default for OrderedMultiset<L> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            len: 0,
        }
    }
}

impl<L: Ord + Clone> DestinationQueue<L> for OrderedMultiset<L> {
    fn insert(&mut self, destination: L) {
        *self.counts.entry(destination).or_insert(0) += 1;
        self.len += 1;
    }

    fn pop_min(&mut self) -> Option<L> {
        let mut entry = self.counts.first_entry()?;
        self.len -= 1;
        if *entry.get() > 1 {
            *entry.get_mut() -= 1;
            Some(entry.key().clone())
        } else {
            Some(entry.remove_entry().0)
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}
