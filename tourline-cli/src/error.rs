//! Error types emitted by the tourline CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tourline_core::{RoadRouteError, TourError};
use tourline_data::{ProviderBuildError, RoadNetworkError, WaypointFileError};

/// Errors emitted by the tourline CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected or opened.
    #[error("failed to open {field} path {path:?}: {source}")]
    OpenSource {
        /// Option naming the path.
        field: &'static str,
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The waypoint file could not be read.
    #[error("failed to read waypoints from {path:?}: {source}")]
    ReadWaypoints {
        /// Waypoint file path.
        path: Utf8PathBuf,
        /// Parse or validation failure.
        #[source]
        source: WaypointFileError,
    },
    /// Tour planning rejected the waypoints.
    #[error("tour planning failed: {0}")]
    Plan(#[from] TourError),
    /// The OSRM route provider could not be set up.
    #[error("failed to set up OSRM client for {base_url}: {source}")]
    BuildRouteProvider {
        /// Configured OSRM base URL.
        base_url: String,
        /// Client or runtime construction failure.
        #[source]
        source: ProviderBuildError,
    },
    /// Routing the planned tour by road failed.
    #[error("road routing failed: {0}")]
    Route(#[from] RoadRouteError),
    /// Road data could not be loaded.
    #[error("failed to load road data from {path:?}: {source}")]
    LoadRoadData {
        /// Road data path.
        path: Utf8PathBuf,
        /// Parse or decode failure.
        #[source]
        source: RoadNetworkError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
