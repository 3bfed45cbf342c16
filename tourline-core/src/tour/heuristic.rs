//! Randomised nearest-neighbour tour construction.

use std::cmp::Ordering;

use log::{debug, trace};

use super::{RandomSource, TourError};
use crate::DistanceMatrix;

/// Probability of extending the path to the single closest candidate.
pub const GREEDY_PROBABILITY: f64 = 0.7;

/// Number of closest candidates eligible when the greedy branch is skipped.
pub const RANDOM_WINDOW: usize = 3;

/// An open visiting order over `0..n`.
///
/// Tours produced by [`build_tour`] are permutations: every index appears
/// exactly once and the start is not repeated at the end.
///
/// # Examples
/// ```
/// use tourline_core::Tour;
///
/// let tour = Tour::from(vec![2, 0, 1]);
/// let labels = tour.apply(&["a", "b", "c"])?;
/// assert_eq!(labels, vec!["c", "a", "b"]);
/// # Ok::<(), tourline_core::TourError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Visiting order as indices.
    #[must_use]
    pub const fn indices(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of stops.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tour visits nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the tour, returning its indices.
    #[must_use]
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Reorder `items` into visiting order.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::LengthMismatch`] if `items` and the tour differ
    /// in length, and [`TourError::IndexOutOfRange`] if the tour references
    /// an index beyond `items`.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Result<Vec<T>, TourError> {
        if items.len() != self.len() {
            return Err(TourError::LengthMismatch {
                expected: self.len(),
                actual: items.len(),
            });
        }
        self.0
            .iter()
            .map(|&index| {
                items
                    .get(index)
                    .cloned()
                    .ok_or(TourError::IndexOutOfRange {
                        index,
                        len: items.len(),
                    })
            })
            .collect()
    }
}

impl From<Vec<usize>> for Tour {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// Build a visiting order over every item in `matrix`.
///
/// The start is drawn uniformly from `rng`. Each step sorts the unvisited
/// candidates by distance from the current end of the path (ties keep index
/// order), then draws again: below [`GREEDY_PROBABILITY`] the closest
/// candidate is taken, otherwise a further draw picks uniformly among the
/// [`RANDOM_WINDOW`] closest. A fixed sequence of draws always produces the
/// same tour.
///
/// An empty matrix yields an empty tour without drawing; a single item
/// yields `[0]` after drawing the start.
///
/// # Errors
///
/// Returns [`TourError::IndexOutOfRange`] if a matrix row cannot be read,
/// which a [`DistanceMatrix`] rules out by construction.
///
/// # Examples
/// ```
/// use tourline_core::{SequenceSource, Waypoint, build_matrix, build_tour, coordinate};
///
/// let stops = [
///     Waypoint::new("a", "A", coordinate(0.0, 0.0)),
///     Waypoint::new("b", "B", coordinate(0.0, 1.0)),
///     Waypoint::new("c", "C", coordinate(0.0, 2.0)),
/// ];
/// let matrix = build_matrix(&stops);
/// // Always 0.0: start at index 0 and take the greedy branch every step.
/// let tour = build_tour(&matrix, &mut SequenceSource::constant(0.0))?;
/// assert_eq!(tour.indices(), &[0, 1, 2]);
/// # Ok::<(), tourline_core::TourError>(())
/// ```
pub fn build_tour<R>(matrix: &DistanceMatrix, rng: &mut R) -> Result<Tour, TourError>
where
    R: RandomSource + ?Sized,
{
    let n = matrix.len();
    if n == 0 {
        return Ok(Tour::default());
    }

    let start = scaled_index(rng.next_unit(), n);
    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n);
    mark(&mut visited, start);
    path.push(start);
    debug!("building tour over {n} stops from start index {start}");

    while path.len() < n {
        let Some(&last) = path.last() else {
            break;
        };
        let candidates = ranked_candidates(matrix, &visited, last)?;
        let Some(next) = choose(&candidates, rng) else {
            break;
        };
        mark(&mut visited, next);
        path.push(next);
    }

    Ok(Tour(path))
}

/// Unvisited indices paired with their distance from `from`, closest first.
fn ranked_candidates(
    matrix: &DistanceMatrix,
    visited: &[bool],
    from: usize,
) -> Result<Vec<(usize, f64)>, TourError> {
    let row = matrix.row(from).ok_or(TourError::IndexOutOfRange {
        index: from,
        len: matrix.len(),
    })?;
    let mut candidates: Vec<(usize, f64)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|&(index, _)| visited.get(index) == Some(&false))
        .collect();
    // `sort_by` is stable, so equal distances keep ascending index order.
    candidates.sort_by(|lhs, rhs| by_distance(lhs.1, rhs.1));
    Ok(candidates)
}

/// Orders distances ascending with NaN after every number.
fn by_distance(lhs: f64, rhs: f64) -> Ordering {
    lhs.partial_cmp(&rhs)
        .unwrap_or_else(|| lhs.is_nan().cmp(&rhs.is_nan()))
}

fn choose<R>(candidates: &[(usize, f64)], rng: &mut R) -> Option<usize>
where
    R: RandomSource + ?Sized,
{
    let draw = rng.next_unit();
    let position = if draw < GREEDY_PROBABILITY {
        0
    } else {
        let window = RANDOM_WINDOW.min(candidates.len());
        scaled_index(rng.next_unit(), window)
    };
    let &(index, distance) = candidates.get(position)?;
    trace!(
        "draw {draw:.3} picked candidate {position} of {}: index {index} at {distance:.3} km",
        candidates.len()
    );
    Some(index)
}

/// Map a unit draw onto `0..len`, clamping draws outside `[0, 1)`.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "scaling a unit draw onto an index range is a float-to-index conversion"
)]
fn scaled_index(draw: f64, len: usize) -> usize {
    let scaled = (draw * len as f64).floor() as usize;
    scaled.min(len.saturating_sub(1))
}

fn mark(visited: &mut [bool], index: usize) {
    if let Some(slot) = visited.get_mut(index) {
        *slot = true;
    }
}
