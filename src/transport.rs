//! HTTP Transport for the PaleoDB client.
//!
//! Builds endpoint URLs, performs GET requests and turns responses into
//! either parsed JSON or a typed error. There is no retry: the first failure
//! is returned to the caller.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, PaleoDbError};
use crate::params::QueryParams;
use crate::types::{ApiResponse, RawResponse};

/// HTTP transport bound to one base URL.
pub struct HttpTransport {
    base_url: String,
    client: Client,
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (e.g., "<https://paleobiodb.org/data1.2>")
    /// * `timeout` - Request timeout; `None` waits for the server indefinitely
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout,
        })
    }

    /// Build `<base>/<endpoint>.json`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty endpoint.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<String, Error> {
        build_endpoint_url(&self.base_url, endpoint)
    }

    /// GET an endpoint and return the status and raw body text.
    ///
    /// Any status is returned as-is; nothing is checked or parsed yet.
    ///
    /// # Errors
    ///
    /// `Error::Http` if the request could not be sent or the body not read.
    pub async fn fetch(&self, endpoint: &str, params: &QueryParams) -> Result<RawResponse, Error> {
        let url = self.endpoint_url(endpoint)?;
        debug!(%url, %params, "Calling PaleoDB");

        let response = self
            .client
            .get(&url)
            .query(&params.to_query_pairs())
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status().as_u16();
        debug!(%url, status, "PaleoDB responded");

        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;

        Ok(RawResponse { url, status, body })
    }

    /// GET an endpoint and parse the JSON body.
    ///
    /// # Errors
    ///
    /// * `Error::Http` if the request could not be sent or the body not read
    /// * `Error::Api` if the status is 4xx or 5xx
    /// * `Error::Parse` if a successful body is not valid JSON
    pub async fn get_json(&self, endpoint: &str, params: &QueryParams) -> Result<ApiResponse, Error> {
        self.fetch(endpoint, params).await?.decode()
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured timeout.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Join a base URL and an endpoint into `<base>/<endpoint>.json`.
///
/// # Errors
///
/// Returns a configuration error for an empty endpoint.
pub fn build_endpoint_url(base_url: &str, endpoint: &str) -> Result<String, Error> {
    let endpoint = endpoint.trim_start_matches('/');
    if endpoint.is_empty() {
        return Err(Error::Configuration("endpoint must not be empty".to_string()));
    }
    Ok(format!("{}/{}.json", base_url.trim_end_matches('/'), endpoint))
}

/// Check the status, then parse the body.
///
/// The status is checked first, so an error page that is not JSON still
/// yields a status error.
///
/// # Errors
///
/// `Error::Api` for 4xx/5xx statuses, `Error::Parse` for invalid JSON.
pub fn decode_response(url: &str, status: u16, body: &str) -> Result<Value, Error> {
    if status >= 400 {
        return Err(PaleoDbError::from_status(status, error_message(status, body)).into());
    }

    serde_json::from_str(body).map_err(|e| Error::Parse {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Extract the PBDB `errors` list from an error body.
fn error_message(status: u16, body: &str) -> String {
    let errors: Vec<String> = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("errors").and_then(Value::as_array).cloned())
        .unwrap_or_default()
        .iter()
        .filter_map(|e| e.as_str().map(String::from))
        .collect();

    if errors.is_empty() {
        format!("HTTP {status}")
    } else {
        errors.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://paleobiodb.org/data1.2/taxa/list.json";

    #[test]
    fn test_endpoint_url() {
        let transport = create_test_transport("https://paleobiodb.org/data1.2/");

        assert_eq!(
            transport.endpoint_url("taxa/list").expect("valid endpoint"),
            "https://paleobiodb.org/data1.2/taxa/list.json"
        );
        assert_eq!(
            transport.endpoint_url("/occs/list").expect("valid endpoint"),
            "https://paleobiodb.org/data1.2/occs/list.json"
        );
        assert!(matches!(
            transport.endpoint_url(""),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_build_endpoint_url_trims_both_sides() {
        assert_eq!(
            build_endpoint_url("http://localhost:8080/data1.2/", "/intervals/list").expect("valid endpoint"),
            "http://localhost:8080/data1.2/intervals/list.json"
        );
        assert!(build_endpoint_url("http://localhost:8080", "/").is_err());
    }

    #[test]
    fn test_decode_success() {
        let value = decode_response(URL, 200, r#"{"records": []}"#).expect("Should decode");
        assert_eq!(value["records"], serde_json::json!([]));
    }

    #[test]
    fn test_decode_scalar_and_null_bodies() {
        assert_eq!(decode_response(URL, 200, "null").expect("null is JSON"), Value::Null);
        assert_eq!(decode_response(URL, 200, "7").expect("number is JSON"), serde_json::json!(7));
    }

    #[test]
    fn test_decode_status_error_uses_pbdb_errors() {
        let body = r#"{"status_code": 400, "errors": ["bad value 'x' for 'rel'", "unknown parameter 'foo'"]}"#;
        let err = decode_response(URL, 400, body).expect_err("400 should fail");

        match err {
            Error::Api(PaleoDbError::Client { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "bad value 'x' for 'rel'; unknown parameter 'foo'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_status_checked_before_parse() {
        let err = decode_response(URL, 502, "<html>Bad Gateway</html>").expect_err("502 should fail");

        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("HTTP 502"));
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode_response(URL, 200, "<html>not json</html>").expect_err("should fail");

        assert!(err.is_parse_failure());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_redirect_status_is_not_an_error() {
        assert!(decode_response(URL, 304, "{}").is_ok());
    }

    fn create_test_transport(base_url: &str) -> HttpTransport {
        HttpTransport::new(base_url, Some(Duration::from_secs(30)))
            .expect("transport creation should succeed")
    }
}
