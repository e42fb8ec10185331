//! PaleoDB main client.
//!
//! Provides the primary interface for talking to the PBDB data service.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::{IntervalsClient, OccurrencesClient, TaxaClient};
use crate::error::Error;
use crate::params::QueryParams;
use crate::transport::HttpTransport;
use crate::types::{ApiResponse, RawResponse};

/// Default base URL for the PBDB data service.
pub const DEFAULT_BASE_URL: &str = "https://paleobiodb.org/data1.2";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Anything that can perform a generic endpoint call.
///
/// Implemented by [`PaleoDbClient`] and by the mock in [`crate::testing`].
#[async_trait]
pub trait ApiCaller: Send + Sync {
    /// GET `<base>/<endpoint>.json` with `params`, returning status and body
    /// text whatever the status.
    async fn fetch(&self, endpoint: &str, params: &QueryParams) -> Result<RawResponse, Error>;

    /// GET `<base>/<endpoint>.json` with `params` and parse the JSON body.
    async fn call(&self, endpoint: &str, params: &QueryParams) -> Result<ApiResponse, Error> {
        self.fetch(endpoint, params).await?.decode()
    }

    /// URL that `call` would request, without the query string.
    fn endpoint_url(&self, endpoint: &str) -> Result<String, Error>;
}

/// Main client for the PBDB data service.
///
/// # Example
///
/// ```rust,ignore
/// use paleodb::PaleoDbClient;
///
/// let client = PaleoDbClient::from_env()?;
/// let taxa = client
///     .taxa()
///     .list("Tyrannosaurus", Some("all_children"), &["attr", "app"])
///     .await?;
/// println!("{} records", taxa.summary().record_count);
/// ```
pub struct PaleoDbClient {
    transport: Arc<HttpTransport>,
    taxa: TaxaClient,
    occurrences: OccurrencesClient,
    intervals: IntervalsClient,
}

impl PaleoDbClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (default: <https://paleobiodb.org/data1.2>)
    /// * `timeout` - Request timeout (default: 30 seconds)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(base_url: Option<&str>, timeout: Option<Duration>) -> Result<Self, Error> {
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let transport = Arc::new(HttpTransport::new(base_url, Some(timeout))?);

        Ok(Self {
            taxa: TaxaClient::new(Arc::clone(&transport)),
            occurrences: OccurrencesClient::new(Arc::clone(&transport)),
            intervals: IntervalsClient::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `PALEODB_BASE_URL` - Base URL for API (optional, default: <https://paleobiodb.org/data1.2>)
    /// * `PALEODB_TIMEOUT_SECS` - Request timeout in seconds (optional, default: 30)
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = env::var("PALEODB_BASE_URL").ok();

        let timeout = match env::var("PALEODB_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|_| {
                Error::Configuration(format!(
                    "Invalid PALEODB_TIMEOUT_SECS: {raw}. Must be a whole number of seconds"
                ))
            })?)),
            Err(_) => None,
        };

        Self::new(base_url.as_deref(), timeout)
    }

    /// Generic endpoint call.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::get_json`].
    pub async fn get(&self, endpoint: &str, params: &QueryParams) -> Result<ApiResponse, Error> {
        self.transport.get_json(endpoint, params).await
    }

    /// Get the underlying HTTP transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Get the taxa client.
    #[must_use]
    pub fn taxa(&self) -> &TaxaClient {
        &self.taxa
    }

    /// Get the occurrences client.
    #[must_use]
    pub fn occurrences(&self) -> &OccurrencesClient {
        &self.occurrences
    }

    /// Get the intervals client.
    #[must_use]
    pub fn intervals(&self) -> &IntervalsClient {
        &self.intervals
    }
}

#[async_trait]
impl ApiCaller for PaleoDbClient {
    async fn fetch(&self, endpoint: &str, params: &QueryParams) -> Result<RawResponse, Error> {
        self.transport.fetch(endpoint, params).await
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<String, Error> {
        self.transport.endpoint_url(endpoint)
    }
}
