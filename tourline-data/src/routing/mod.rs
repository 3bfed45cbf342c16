//! Road routes fetched from an OSRM routing service.
//!
//! [`OsrmRouteProvider`] implements [`tourline_core::RoadRouteProvider`] on
//! top of the OSRM Route API. The trait is synchronous, so the provider
//! blocks on its HTTP calls internally and stays usable from plain threads.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use tourline_core::{RoadRouteProvider, coordinate};
//! use tourline_data::routing::{OsrmRouteProvider, OsrmRouteProviderConfig};
//!
//! let config = OsrmRouteProviderConfig::new("http://localhost:5000")
//!     .with_profile("foot")
//!     .with_timeout(Duration::from_secs(10));
//! let provider = OsrmRouteProvider::with_config(config)?;
//!
//! let route = provider.fetch_route(&[
//!     coordinate(52.5200, 13.4050),
//!     coordinate(52.5163, 13.3777),
//! ])?;
//! println!("{:.0} m along {} points", route.distance_m, route.polyline.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod osrm;
mod provider;

pub use provider::{
    DEFAULT_PROFILE, DEFAULT_USER_AGENT, OsrmRouteProvider, OsrmRouteProviderConfig,
    ProviderBuildError,
};
