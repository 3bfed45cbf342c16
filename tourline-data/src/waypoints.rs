//! Waypoint lists stored as JSON.
//!
//! A waypoint file is an array of `{ "id", "name", "lat", "lon" }` records.
//! `name` may be omitted. Every record is range checked and identifiers
//! must be unique within the file.

use std::collections::HashSet;
use std::io::Read;

use thiserror::Error;
use tourline_core::{Waypoint, WaypointError};

/// Errors returned by [`read_waypoints`].
#[derive(Debug, Error)]
pub enum WaypointFileError {
    /// The document is not a JSON array of waypoint records.
    #[error("failed to parse waypoint JSON: {source}")]
    Json {
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// A waypoint has an out-of-range coordinate.
    #[error("waypoint at position {index} is invalid: {source}")]
    Invalid {
        /// Zero-based position in the file.
        index: usize,
        /// Validation failure.
        #[source]
        source: WaypointError,
    },
    /// Two waypoints share an identifier.
    #[error("duplicate waypoint id {id:?}")]
    DuplicateId {
        /// Repeated identifier.
        id: String,
    },
}

/// Read and validate a waypoint list from `reader`.
///
/// # Errors
///
/// Returns [`WaypointFileError::Json`] for malformed documents,
/// [`WaypointFileError::Invalid`] for out-of-range coordinates and
/// [`WaypointFileError::DuplicateId`] for repeated identifiers.
///
/// # Examples
/// ```
/// use tourline_data::read_waypoints;
///
/// let json = r#"[
///     { "id": "a", "name": "Depot", "lat": 52.5, "lon": 13.4 },
///     { "id": "b", "lat": 52.6, "lon": 13.5 }
/// ]"#;
/// let waypoints = read_waypoints(json.as_bytes())?;
/// assert_eq!(waypoints.len(), 2);
/// assert_eq!(waypoints[0].name, "Depot");
/// # Ok::<(), tourline_data::WaypointFileError>(())
/// ```
pub fn read_waypoints<R: Read>(reader: R) -> Result<Vec<Waypoint>, WaypointFileError> {
    let records: Vec<Waypoint> =
        serde_json::from_reader(reader).map_err(|source| WaypointFileError::Json { source })?;

    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            if !seen.insert(record.id.clone()) {
                return Err(WaypointFileError::DuplicateId { id: record.id });
            }
            Waypoint::validated(record.id, record.name, record.location)
                .map_err(|source| WaypointFileError::Invalid { index, source })
        })
        .collect()
}
