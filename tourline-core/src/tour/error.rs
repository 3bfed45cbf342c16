use thiserror::Error;

/// Errors raised for malformed tour-construction input.
///
/// Each variant is a programming error on the caller's side; nothing here is
/// transient and no partial tour is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// A matrix row does not have one entry per row.
    #[error("distance matrix row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        /// Index of the first offending row.
        row: usize,
        /// Number of rows in the matrix.
        expected: usize,
        /// Number of entries found in that row.
        actual: usize,
    },
    /// The matrix side does not match the number of items it describes.
    #[error("distance matrix has side {actual}, expected {expected}")]
    LengthMismatch {
        /// Number of items supplied alongside the matrix.
        expected: usize,
        /// Side length of the matrix.
        actual: usize,
    },
    /// A tour referenced an index the matrix does not cover.
    #[error("tour index {index} is out of range for {len} waypoints")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of waypoints covered by the matrix.
        len: usize,
    },
}
