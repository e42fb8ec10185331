//! Occurrences resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::params::{join_show, QueryParams};
use crate::transport::HttpTransport;
use crate::types::ApiResponse;

/// Endpoint for fossil occurrence searches.
pub const OCCS_LIST: &str = "occs/list";

/// Client for fossil occurrence lookups.
pub struct OccurrencesClient {
    transport: Arc<HttpTransport>,
}

impl OccurrencesClient {
    /// Create a new occurrences client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Parameters for an `occs/list` query.
    #[must_use]
    pub fn list_params(base_name: &str, show: &[&str], limit: Option<u32>) -> QueryParams {
        let mut params = QueryParams::new().with("base_name", base_name);
        let show = join_show(show);
        if !show.is_empty() {
            params.insert("show", show);
        }
        if let Some(limit) = limit {
            params.insert("limit", limit);
        }
        params
    }

    /// List occurrences of a taxon and everything beneath it.
    ///
    /// # Arguments
    ///
    /// * `base_name` - Base taxon name
    /// * `show` - Extra output blocks (e.g. `["coords", "loc", "paleoloc", "stratext"]`)
    /// * `limit` - Maximum number of records
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(
        &self,
        base_name: &str,
        show: &[&str],
        limit: Option<u32>,
    ) -> Result<ApiResponse, Error> {
        let params = Self::list_params(base_name, show, limit);
        self.transport.get_json(OCCS_LIST, &params).await
    }

    /// List occurrences restricted to an age range in Ma.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `min_ma > max_ma`, or an error if the
    /// request fails.
    pub async fn list_in_range(
        &self,
        base_name: &str,
        show: &[&str],
        limit: Option<u32>,
        min_ma: f64,
        max_ma: f64,
    ) -> Result<ApiResponse, Error> {
        if min_ma > max_ma {
            return Err(Error::Configuration(format!(
                "min_ma ({min_ma}) must not exceed max_ma ({max_ma})"
            )));
        }

        let params = Self::list_params(base_name, show, limit)
            .with("min_ma", min_ma)
            .with("max_ma", max_ma);
        self.transport.get_json(OCCS_LIST, &params).await
    }
}
