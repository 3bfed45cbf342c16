//! Pairwise distance matrices over waypoints.

use crate::{Tour, TourError, Waypoint, haversine_km};

/// Square matrix of distances in kilometres.
///
/// `get(i, j)` is the distance from item `i` to item `j`. Matrices built by
/// [`build_matrix`] are symmetric with a zero diagonal; matrices supplied
/// through [`DistanceMatrix::from_rows`] are only checked for squareness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Wrap caller-supplied rows after checking that the matrix is square.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::NotSquare`] for the first row whose length
    /// differs from the number of rows.
    ///
    /// # Examples
    /// ```
    /// use tourline_core::{DistanceMatrix, TourError};
    ///
    /// let matrix = DistanceMatrix::from_rows(vec![vec![0.0, 2.0], vec![2.0, 0.0]])?;
    /// assert_eq!(matrix.get(0, 1), Some(2.0));
    ///
    /// let err = DistanceMatrix::from_rows(vec![vec![0.0], vec![1.0, 0.0]]).unwrap_err();
    /// assert!(matches!(err, TourError::NotSquare { row: 0, .. }));
    /// # Ok::<(), TourError>(())
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TourError> {
        let expected = rows.len();
        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(TourError::NotSquare {
                row,
                expected,
                actual,
            });
        }
        Ok(Self { rows })
    }

    /// Side length of the matrix.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix describes no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance from `from` to `to`, if both indices are in range.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.rows.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Distances from `index` to every item.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Length of the open path visiting `tour` in order.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::IndexOutOfRange`] if the tour references an
    /// index the matrix does not cover.
    pub fn path_length(&self, tour: &Tour) -> Result<f64, TourError> {
        self.sum_legs(tour.indices().windows(2).filter_map(|leg| match leg {
            [from, to] => Some((*from, *to)),
            _ => None,
        }))
    }

    /// Length of the closed cycle visiting `tour` and returning to its start.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::IndexOutOfRange`] if the tour references an
    /// index the matrix does not cover.
    #[expect(
        clippy::float_arithmetic,
        reason = "tour lengths are sums of floating-point distances"
    )]
    pub fn closed_length(&self, tour: &Tour) -> Result<f64, TourError> {
        let open = self.path_length(tour)?;
        let indices = tour.indices();
        match (indices.last(), indices.first()) {
            (Some(&last), Some(&first)) => Ok(open + self.checked(last, first)?),
            _ => Ok(open),
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "tour lengths are sums of floating-point distances"
    )]
    fn sum_legs(&self, legs: impl Iterator<Item = (usize, usize)>) -> Result<f64, TourError> {
        legs.map(|(from, to)| self.checked(from, to))
            .try_fold(0.0, |total, leg| leg.map(|km| total + km))
    }

    fn checked(&self, from: usize, to: usize) -> Result<f64, TourError> {
        let len = self.len();
        self.get(from, to).ok_or(TourError::IndexOutOfRange {
            index: if from < len { to } else { from },
            len,
        })
    }
}

/// Build the pairwise great-circle distance matrix for `waypoints`.
///
/// Runs in `O(n²)` time and space. An empty slice yields an empty matrix;
/// callers wanting a meaningful tour should require at least two waypoints.
///
/// # Examples
/// ```
/// use tourline_core::{Waypoint, build_matrix, coordinate};
///
/// let stops = [
///     Waypoint::new("a", "A", coordinate(0.0, 0.0)),
///     Waypoint::new("b", "B", coordinate(0.0, 1.0)),
/// ];
/// let matrix = build_matrix(&stops);
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.get(0, 0), Some(0.0));
/// assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
/// ```
#[must_use]
pub fn build_matrix(waypoints: &[Waypoint]) -> DistanceMatrix {
    let rows = waypoints
        .iter()
        .enumerate()
        .map(|(i, from)| {
            waypoints
                .iter()
                .enumerate()
                .map(|(j, to)| {
                    if i == j {
                        0.0
                    } else {
                        haversine_km(from.location, to.location)
                    }
                })
                .collect()
        })
        .collect();
    DistanceMatrix { rows }
}
