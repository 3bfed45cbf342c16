//! Visiting orders over a distance matrix.
//!
//! [`build_tour`] turns a [`DistanceMatrix`](crate::DistanceMatrix) into an
//! open [`Tour`] using a randomised nearest-neighbour construction. All
//! randomness comes from a caller-supplied [`RandomSource`], so concurrent
//! callers each bring their own source and share nothing.

mod error;
mod heuristic;
mod random;

pub use error::TourError;
pub use heuristic::{GREEDY_PROBABILITY, RANDOM_WINDOW, Tour, build_tour};
pub use random::{RandomSource, SequenceSource};
