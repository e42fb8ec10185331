//! Intervals resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::params::QueryParams;
use crate::transport::HttpTransport;
use crate::types::ApiResponse;

/// Endpoint for geologic time interval searches.
pub const INTERVALS_LIST: &str = "intervals/list";

/// Client for geologic time interval lookups.
pub struct IntervalsClient {
    transport: Arc<HttpTransport>,
}

impl IntervalsClient {
    /// Create a new intervals client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List intervals by name (e.g. "Cretaceous").
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, name: &str) -> Result<ApiResponse, Error> {
        let params = QueryParams::new().with("name", name);
        self.transport.get_json(INTERVALS_LIST, &params).await
    }
}
