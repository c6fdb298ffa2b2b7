//! Reconstructed itineraries.
//!
//! An [`Itinerary`] is only produced by a completed traversal, so it always
//! holds one more stop than the number of tickets it consumed.

use std::iter::FusedIterator;
use std::slice::Windows;

use crate::Edge;

/// The ordered stops of a reconstructed trail, starting at the origin.
///
/// # Examples
///
/// ```
/// use itinerant_core::{Edge, ItineraryReconstructor};
///
/// # fn main() -> Result<(), itinerant_core::ItineraryError> {
/// let tickets = vec![Edge::new("JFK", "SFO"), Edge::new("SFO", "ATL")];
/// let itinerary = ItineraryReconstructor::new().reconstruct("JFK", tickets)?;
/// assert_eq!(itinerary.origin(), &"JFK");
/// assert_eq!(itinerary.stops(), &["JFK", "SFO", "ATL"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(transparent)
)]
pub struct Itinerary<L> {
    stops: Vec<L>,
}

impl<L> Itinerary<L> {
    /// Wrap stops already in travel order. Callers guarantee `stops` is
    /// non-empty.
    pub(crate) const fn from_stops(stops: Vec<L>) -> Self {
        Self { stops }
    }

    /// Stops in travel order.
    #[must_use]
    pub const fn stops(&self) -> &[L] {
        self.stops.as_slice()
    }

    /// The first stop, which is always the requested origin.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "itineraries are never empty; they always contain the origin"
    )]
    pub fn origin(&self) -> &L {
        &self.stops[0]
    }

    /// Number of stops, which is the ticket count plus one.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`: an itinerary contains at least its origin.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of tickets the itinerary uses.
    #[must_use]
    pub const fn ticket_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Iterate over consecutive stop pairs, i.e. the tickets in the order
    /// they are used.
    #[must_use]
    pub fn legs(&self) -> Legs<'_, L> {
        Legs {
            windows: self.stops.windows(2),
        }
    }

    /// Consume the itinerary, returning its stops.
    #[must_use]
    pub fn into_stops(self) -> Vec<L> {
        self.stops
    }
}

impl<L> AsRef<[L]> for Itinerary<L> {
    fn as_ref(&self) -> &[L] {
        &self.stops
    }
}

impl<L> IntoIterator for Itinerary<L> {
    type Item = L;
    type IntoIter = std::vec::IntoIter<L>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.into_iter()
    }
}

/// Iterator over the legs of an [`Itinerary`], yielding borrowed edges.
#[derive(Debug, Clone)]
pub struct Legs<'a, L> {
    windows: Windows<'a, L>,
}

impl<'a, L> Iterator for Legs<'a, L> {
    type Item = Edge<&'a L>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.windows.next()? {
            [origin, destination] => Some(Edge::new(origin, destination)),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl<L> ExactSizeIterator for Legs<'_, L> {}

impl<L> FusedIterator for Legs<'_, L> {}
