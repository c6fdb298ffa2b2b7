//! Directed tickets between two labelled stops.

/// A single used ticket from `origin` to `destination`.
///
/// Labels are opaque and only need a total order. Ordering on `Edge` is
/// lexicographic over `(origin, destination)`, so sorting a slice of edges
/// groups them by origin with destinations ascending.
///
/// # Examples
///
/// ```
/// use itinerant_core::Edge;
///
/// let edge = Edge::new("JFK", "SFO");
/// assert_eq!(edge.origin, "JFK");
/// assert!(Edge::new("JFK", "ATL") < edge);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<L> {
    /// Stop the ticket departs from.
    pub origin: L,
    /// Stop the ticket arrives at.
    pub destination: L,
}

impl<L> Edge<L> {
    /// Construct an edge from its two endpoints.
    #[must_use]
    pub const fn new(origin: L, destination: L) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Convert both labels, e.g. `&str` into `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerant_core::Edge;
    ///
    /// let owned: Edge<String> = Edge::new("JFK", "SFO").map(str::to_owned);
    /// assert_eq!(owned.destination, "SFO");
    /// ```
    #[must_use]
    pub fn map<M, F>(self, mut convert: F) -> Edge<M>
    where
        F: FnMut(L) -> M,
    {
        Edge {
            origin: convert(self.origin),
            destination: convert(self.destination),
        }
    }
}

impl<L> From<(L, L)> for Edge<L> {
    fn from((origin, destination): (L, L)) -> Self {
        Self::new(origin, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sorting_groups_by_origin_then_destination() {
        let mut edges = vec![
            Edge::new("SFO", "ATL"),
            Edge::new("JFK", "SFO"),
            Edge::new("ATL", "JFK"),
            Edge::new("JFK", "ATL"),
        ];
        edges.sort();
        assert_eq!(
            edges,
            vec![
                Edge::new("ATL", "JFK"),
                Edge::new("JFK", "ATL"),
                Edge::new("JFK", "SFO"),
                Edge::new("SFO", "ATL"),
            ]
        );
    }

    #[rstest]
    fn converts_from_tuple() {
        let edge: Edge<u8> = (1, 2).into();
        assert_eq!(edge, Edge::new(1, 2));
    }
}
