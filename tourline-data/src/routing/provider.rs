//! Blocking `RoadRouteProvider` over OSRM's Route API.
//!
//! The provider owns a `current_thread` Tokio runtime and blocks on the
//! async `reqwest` call inside [`RoadRouteProvider::fetch_route`]. Inside a
//! multi-threaded runtime it borrows that runtime through
//! [`tokio::task::block_in_place`] instead.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use tourline_core::{Coordinate, RoadRoute, RoadRouteError, RoadRouteProvider, coordinate};

use super::osrm::RouteResponse;

/// Default user agent for OSRM requests.
pub const DEFAULT_USER_AGENT: &str = "tourline-routing/0.1";

/// Default OSRM routing profile.
pub const DEFAULT_PROFILE: &str = "driving";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors building an [`OsrmRouteProvider`].
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The Tokio runtime could not be built.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`OsrmRouteProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsrmRouteProviderConfig {
    /// Base URL of the OSRM service, e.g. `"http://localhost:5000"`.
    pub base_url: String,
    /// Routing profile segment of the URL, e.g. `"driving"` or `"foot"`.
    pub profile: String,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for OsrmRouteProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_owned(),
            profile: DEFAULT_PROFILE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OsrmRouteProviderConfig {
    /// Configuration for `base_url` with default profile and timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the routing profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// [`RoadRouteProvider`] backed by an OSRM server.
///
/// Requests `overview=full` GeoJSON geometry and converts the `[lon, lat]`
/// positions back into [`Coordinate`]s. The first route OSRM returns is
/// used.
pub struct OsrmRouteProvider {
    client: Client,
    config: OsrmRouteProviderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for OsrmRouteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsrmRouteProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl OsrmRouteProvider {
    /// Provider for `base_url` with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderBuildError`] if the HTTP client or runtime cannot
    /// be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(OsrmRouteProviderConfig::new(base_url))
    }

    /// Provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderBuildError`] if the HTTP client or runtime cannot
    /// be built.
    pub fn with_config(config: OsrmRouteProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Borrow the provider configuration.
    #[must_use]
    pub const fn config(&self) -> &OsrmRouteProviderConfig {
        &self.config
    }

    /// `{base}/route/v1/{profile}/{lon,lat;...}?overview=full&geometries=geojson`
    fn build_route_url(&self, locations: &[Coordinate]) -> String {
        let coords = locations
            .iter()
            .map(|location| format!("{},{}", location.x, location.y))
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coords
        )
    }

    async fn fetch_route_async(&self, locations: &[Coordinate]) -> Result<RoadRoute, RoadRouteError> {
        let url = self.build_route_url(locations);
        debug!("requesting OSRM route through {} locations", locations.len());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        // OSRM reports routing failures such as `NoRoute` with a 400 status
        // and a JSON body, so the body is read before the status is checked.
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;
        match serde_json::from_str::<RouteResponse>(&body) {
            Ok(parsed) => convert_response(parsed),
            Err(_) if !status.is_success() => Err(RoadRouteError::Http {
                url,
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_owned(),
            }),
            Err(err) => Err(RoadRouteError::InvalidResponse {
                message: err.to_string(),
            }),
        }
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> RoadRouteError {
        if error.is_timeout() {
            return RoadRouteError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }
        if let Some(status) = error.status() {
            return RoadRouteError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }
        RoadRouteError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

fn convert_response(response: RouteResponse) -> Result<RoadRoute, RoadRouteError> {
    if !response.is_ok() {
        return Err(RoadRouteError::Service {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }
    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| RoadRouteError::InvalidResponse {
            message: "OSRM response contains no routes".to_owned(),
        })?;
    let polyline = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lon, lat]| coordinate(lat, lon))
        .collect();
    Ok(RoadRoute {
        polyline,
        distance_m: route.distance,
    })
}

impl RoadRouteProvider for OsrmRouteProvider {
    /// Fetch the road route through `locations` in order.
    ///
    /// Inside a `current_thread` Tokio runtime the provider falls back to
    /// its own runtime, which blocks the caller's executor for the duration
    /// of the request.
    fn fetch_route(&self, locations: &[Coordinate]) -> Result<RoadRoute, RoadRouteError> {
        if locations.len() < 2 {
            return Err(RoadRouteError::TooFewLocations {
                count: locations.len(),
            });
        }

        let future = self.fetch_route_async(locations);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}
