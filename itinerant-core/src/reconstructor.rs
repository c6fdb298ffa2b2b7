//! Strategy selection and the reconstruction entry point.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::selector::{
    AscendingQueue, DescendingStack, DestinationQueue, HeapifiedQueue, MinHeapQueue,
    OrderedMultiset, PresortedStack,
};
use crate::traversal::{self, check_degrees};
use crate::{AdjacencyMap, Edge, Itinerary, ItineraryError};

/// How destinations are kept ordered while the walk consumes them.
///
/// Every strategy yields the same itinerary for the same tickets; they only
/// differ in cost profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Strategy {
    /// Min-priority queue ordered on every insertion.
    MinHeap,
    /// Per-node list sorted descending once, popped from the back.
    #[default]
    SortDescending,
    /// Per-node list sorted ascending once, popped from the front.
    SortAscending,
    /// Whole ticket list sorted descending before bucketing into stacks.
    GlobalSort,
    /// Per-node list heapified once after insertion.
    Heapify,
    /// Ordered map counting duplicate destinations.
    Multiset,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::MinHeap,
        Self::SortDescending,
        Self::SortAscending,
        Self::GlobalSort,
        Self::Heapify,
        Self::Multiset,
    ];

    /// Kebab-case name used on the command line and in configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinHeap => "min-heap",
            Self::SortDescending => "sort-descending",
            Self::SortAscending => "sort-ascending",
            Self::GlobalSort => "global-sort",
            Self::Heapify => "heapify",
            Self::Multiset => "multiset",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Strategy`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {name:?}; expected one of: min-heap, sort-descending, sort-ascending, global-sort, heapify, multiset")]
pub struct ParseStrategyError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStrategyError { name: s.to_owned() })
    }
}

/// Configuration for [`ItineraryReconstructor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconstructorConfig {
    /// Destination ordering strategy.
    pub strategy: Strategy,
    /// Reject tickets whose departure and arrival counts rule out a trail
    /// before walking them.
    ///
    /// The walk rejects unchainable tickets on its own, so disabling this
    /// only changes which [`TrailDefect`](crate::TrailDefect) is reported.
    pub check_degrees: bool,
}

impl Default for ReconstructorConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            check_degrees: true,
        }
    }
}

/// Rebuilds the lexicographically smallest itinerary from used tickets.
///
/// The reconstructor holds configuration only; each call builds and drains
/// its own adjacency map.
///
/// # Examples
///
/// ```
/// use itinerant_core::{Edge, ItineraryReconstructor, ReconstructorConfig, Strategy};
///
/// # fn main() -> Result<(), itinerant_core::ItineraryError> {
/// let tickets = vec![
///     Edge::new("JFK", "SFO"),
///     Edge::new("JFK", "ATL"),
///     Edge::new("SFO", "ATL"),
///     Edge::new("ATL", "JFK"),
/// ];
/// let reconstructor = ItineraryReconstructor::with_config(ReconstructorConfig {
///     strategy: Strategy::MinHeap,
///     ..ReconstructorConfig::default()
/// });
/// let itinerary = reconstructor.reconstruct("JFK", tickets)?;
/// assert_eq!(itinerary.stops(), &["JFK", "ATL", "JFK", "SFO", "ATL"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ItineraryReconstructor {
    config: ReconstructorConfig,
}

impl ItineraryReconstructor {
    /// Construct a reconstructor using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a reconstructor with explicit configuration.
    #[must_use]
    pub const fn with_config(config: ReconstructorConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReconstructorConfig {
        &self.config
    }

    /// Reconstruct the smallest itinerary from `origin` using every ticket
    /// exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`ItineraryError::NoEulerianTrail`] when the tickets cannot
    /// all be used on a single trail from `origin`.
    pub fn reconstruct<L>(
        &self,
        origin: L,
        edges: Vec<Edge<L>>,
    ) -> Result<Itinerary<L>, ItineraryError>
    where
        L: Ord + Clone,
    {
        let strategy = self.config.strategy;
        log::debug!(
            "reconstructing itinerary from {} tickets with the {strategy} strategy",
            edges.len()
        );

        if self.config.check_degrees {
            check_degrees(&origin, &edges).inspect_err(|defect| {
                log::warn!("rejecting tickets before traversal: {defect}");
            })?;
        }

        match strategy {
            Strategy::MinHeap => walk::<L, MinHeapQueue<L>>(origin, edges),
            Strategy::SortDescending => walk::<L, DescendingStack<L>>(origin, edges),
            Strategy::SortAscending => walk::<L, AscendingQueue<L>>(origin, edges),
            Strategy::GlobalSort => walk::<L, PresortedStack<L>>(origin, edges),
            Strategy::Heapify => walk::<L, HeapifiedQueue<L>>(origin, edges),
            Strategy::Multiset => walk::<L, OrderedMultiset<L>>(origin, edges),
        }
    }
}

fn walk<L, Q>(origin: L, edges: Vec<Edge<L>>) -> Result<Itinerary<L>, ItineraryError>
where
    L: Ord,
    Q: DestinationQueue<L>,
{
    traversal::reconstruct(origin, AdjacencyMap::<L, Q>::build(edges))
}
