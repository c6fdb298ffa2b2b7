//! Core itinerary reconstruction for the Itinerant workspace.
//!
//! Given a multiset of used tickets and a starting stop, the crate rebuilds
//! the lexicographically smallest itinerary that uses every ticket exactly
//! once (an Eulerian trail). The pipeline has three stages:
//!
//! 1. [`AdjacencyMap::build`] groups tickets by origin into per-stop
//!    [`DestinationQueue`]s.
//! 2. The map acts as an [`EdgeSelector`], handing out the smallest unused
//!    destination for a stop.
//! 3. [`traversal::reconstruct`] walks the tickets depth first and reverses
//!    the post-order record into an [`Itinerary`].
//!
//! [`ItineraryReconstructor`] wraps those stages behind a [`Strategy`]
//! choice and rejects ticket sets that admit no trail with
//! [`ItineraryError::NoEulerianTrail`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjacency;
mod edge;
mod error;
mod itinerary;
mod reconstructor;
pub mod selector;
pub mod tickets;
pub mod traversal;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use adjacency::AdjacencyMap;
pub use edge::Edge;
pub use error::{ItineraryError, TrailDefect};
pub use itinerary::{Itinerary, Legs};
pub use reconstructor::{ItineraryReconstructor, ParseStrategyError, ReconstructorConfig, Strategy};
pub use selector::{
    AscendingQueue, DescendingStack, DestinationQueue, EdgeSelector, HeapifiedQueue, MinHeapQueue,
    OrderedMultiset, PresortedStack,
};
