//! Taxa resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::params::{join_show, QueryParams};
use crate::transport::HttpTransport;
use crate::types::ApiResponse;

/// Endpoint for taxon name searches.
pub const TAXA_LIST: &str = "taxa/list";
/// Endpoint for a single taxon by identifier.
pub const TAXA_SINGLE: &str = "taxa/single";

/// Client for taxonomic name lookups.
pub struct TaxaClient {
    transport: Arc<HttpTransport>,
}

impl TaxaClient {
    /// Create a new taxa client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Parameters for a `taxa/list` query.
    #[must_use]
    pub fn list_params(name: &str, rel: Option<&str>, show: &[&str]) -> QueryParams {
        let mut params = QueryParams::new().with("name", name);
        if let Some(rel) = rel {
            params.insert("rel", rel);
        }
        let show = join_show(show);
        if !show.is_empty() {
            params.insert("show", show);
        }
        params
    }

    /// List taxa matching a name.
    ///
    /// # Arguments
    ///
    /// * `name` - Taxon name (e.g. "Tyrannosaurus")
    /// * `rel` - Relationship mode (e.g. "all_children")
    /// * `show` - Extra output blocks (e.g. `["attr", "app", "size", "class"]`)
    ///
    /// A name that matches nothing is not an error; the response simply has
    /// an empty `records` array.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(
        &self,
        name: &str,
        rel: Option<&str>,
        show: &[&str],
    ) -> Result<ApiResponse, Error> {
        let params = Self::list_params(name, rel, show);
        self.transport.get_json(TAXA_LIST, &params).await
    }

    /// Fetch one taxon by its PBDB identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` for a blank `id` without sending
    /// anything, or an error if the request fails.
    pub async fn single(&self, id: &str, show: &[&str]) -> Result<ApiResponse, Error> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::Configuration("Taxon id must not be empty".to_string()));
        }
        let mut params = QueryParams::new().with("id", id);
        let show = join_show(show);
        if !show.is_empty() {
            params.insert("show", show);
        }
        self.transport.get_json(TAXA_SINGLE, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params() {
        let params =
            TaxaClient::list_params("Tyrannosaurus", Some("all_children"), &["attr", "app", "size", "class"]);

        assert_eq!(
            params.to_string(),
            r#"{"name": "Tyrannosaurus", "rel": "all_children", "show": "attr,app,size,class"}"#
        );
    }

    #[test]
    fn test_list_params_omit_optional() {
        let params = TaxaClient::list_params("Allosaurus", None, &[]);

        assert_eq!(params.len(), 1);
        assert!(params.get("rel").is_none());
        assert!(params.get("show").is_none());
    }

    #[tokio::test]
    async fn test_single_rejects_blank_id() {
        // Nothing listens on port 9; a request would fail with Error::Http.
        let transport = Arc::new(
            HttpTransport::new("http://127.0.0.1:9/data1.2", None).expect("transport creation should succeed"),
        );
        let taxa = TaxaClient::new(transport);

        for id in ["", "   "] {
            let err = taxa.single(id, &["attr"]).await.unwrap_err();
            assert!(matches!(err, Error::Configuration(_)));
        }
    }
}
