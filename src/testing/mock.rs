//! Mock PaleoDB client for testing.
//!
//! `MockPaleoDbClient` implements [`ApiCaller`] without touching the network.
//! Responses are configured per endpoint and every call is recorded.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::client::{ApiCaller, DEFAULT_BASE_URL};
use crate::error::Error;
use crate::params::QueryParams;
use crate::transport::build_endpoint_url;
use crate::types::RawResponse;

/// Record of an endpoint call.
#[derive(Debug, Clone, Serialize)]
pub struct MockCall {
    /// Endpoint path segment (e.g., "taxa/list")
    pub endpoint: String,
    /// Query parameters as sent
    pub params: Vec<(String, String)>,
    /// Timestamp of the call
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    /// Create a new mock call record.
    pub fn new(endpoint: &str, params: &QueryParams) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            params: params.to_query_pairs(),
            timestamp: Utc::now(),
        }
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Successful response with a JSON body
    Body { status: u16, body: Value },
    /// Non-success status with a PBDB-style `errors` body
    Status { status: u16, message: String },
    /// Successful status with a body that is not JSON
    Unparseable { body: String },
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::with_body(json!({ "records": [] }))
    }
}

impl MockResponse {
    /// Respond 200 with `body`.
    pub fn with_body(body: Value) -> Self {
        Self::Body { status: 200, body }
    }

    /// Respond 200 with a `records` array of `count` placeholder records.
    pub fn with_records(count: usize) -> Self {
        let records: Vec<Value> = (0..count).map(|i| json!({ "oid": format!("rec:{i}") })).collect();
        Self::with_body(json!({ "elapsed_time": 0.001, "records": records }))
    }

    /// Fail with an HTTP status error.
    pub fn with_status(status: u16, message: &str) -> Self {
        Self::Status {
            status,
            message: message.to_string(),
        }
    }

    /// Respond 200 with a body that does not parse as JSON.
    pub fn unparseable(body: &str) -> Self {
        Self::Unparseable {
            body: body.to_string(),
        }
    }

    fn into_raw(self, url: String) -> RawResponse {
        match self {
            Self::Body { status, body } => RawResponse {
                url,
                status,
                body: body.to_string(),
            },
            Self::Status { status, message } => RawResponse {
                url,
                status,
                body: json!({ "status_code": status, "errors": [message] }).to_string(),
            },
            Self::Unparseable { body } => RawResponse {
                url,
                status: 200,
                body,
            },
        }
    }
}

#[derive(Default)]
struct MockClientState {
    calls: Vec<MockCall>,
    responses: HashMap<String, MockResponse>,
}

/// Mock client for testing code written against [`ApiCaller`].
pub struct MockPaleoDbClient {
    base_url: String,
    state: Mutex<MockClientState>,
}

impl Default for MockPaleoDbClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl MockPaleoDbClient {
    /// Create a new mock client reporting URLs under `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            state: Mutex::new(MockClientState::default()),
        }
    }

    /// Configure the response for calls to `endpoint`.
    pub fn configure(&self, endpoint: &str, response: MockResponse) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .responses
            .insert(endpoint.to_string(), response);
    }

    /// Check if an endpoint was called.
    #[must_use]
    pub fn was_called(&self, endpoint: &str) -> bool {
        self.call_count(endpoint) > 0
    }

    /// Get the number of times an endpoint was called.
    #[must_use]
    pub fn call_count(&self, endpoint: &str) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .filter(|call| call.endpoint == endpoint)
            .count()
    }

    /// Get recorded calls, optionally filtered by endpoint.
    #[must_use]
    pub fn get_calls(&self, endpoint: Option<&str>) -> Vec<MockCall> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match endpoint {
            Some(ep) => state.calls.iter().filter(|call| call.endpoint == ep).cloned().collect(),
            None => state.calls.clone(),
        }
    }

    /// Reset all recorded calls. Configured responses are kept.
    pub fn reset(&self) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).calls.clear();
    }
}

#[async_trait]
impl ApiCaller for MockPaleoDbClient {
    async fn fetch(&self, endpoint: &str, params: &QueryParams) -> Result<RawResponse, Error> {
        let url = self.endpoint_url(endpoint)?;
        let response = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.calls.push(MockCall::new(endpoint, params));
            state.responses.get(endpoint).cloned().unwrap_or_default()
        };
        Ok(response.into_raw(url))
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<String, Error> {
        build_endpoint_url(&self.base_url, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_response() {
        let mock = MockPaleoDbClient::default();
        let response = mock
            .call("taxa/list", &QueryParams::new().with("name", "Tyrannosaurus"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.url, "https://paleobiodb.org/data1.2/taxa/list.json");
        assert_eq!(response.summary().record_count, 0);
        assert!(mock.was_called("taxa/list"));
        assert_eq!(mock.call_count("taxa/list"), 1);
    }

    #[tokio::test]
    async fn test_mock_configured_records() {
        let mock = MockPaleoDbClient::default();
        mock.configure("occs/list", MockResponse::with_records(5));

        let response = mock.call("occs/list", &QueryParams::new()).await.unwrap();
        assert_eq!(response.summary().record_count, 5);
        assert_eq!(response.summary().keys, vec!["elapsed_time", "records"]);
    }

    #[tokio::test]
    async fn test_mock_status_and_parse_errors() {
        let mock = MockPaleoDbClient::default();
        mock.configure("taxa/list", MockResponse::with_status(400, "bad value for 'rel'"));
        mock.configure("intervals/list", MockResponse::unparseable("<html>maintenance</html>"));

        let status_err = mock.call("taxa/list", &QueryParams::new()).await.unwrap_err();
        assert_eq!(status_err.status(), Some(400));
        assert!(status_err.to_string().ends_with("bad value for 'rel'"));

        let parse_err = mock.call("intervals/list", &QueryParams::new()).await.unwrap_err();
        assert!(parse_err.is_parse_failure());
    }

    #[tokio::test]
    async fn test_mock_records_params() {
        let mock = MockPaleoDbClient::default();
        let params = QueryParams::new().with("base_name", "Tyrannosaurus").with("limit", 5_u32);
        mock.call("occs/list", &params).await.unwrap();

        let calls = mock.get_calls(Some("occs/list"));
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].params,
            vec![
                ("base_name".to_string(), "Tyrannosaurus".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_mock_fetch_keeps_error_status() {
        let mock = MockPaleoDbClient::default();
        mock.configure("occs/list", MockResponse::with_status(503, "down for maintenance"));

        let raw = mock.fetch("occs/list", &QueryParams::new()).await.unwrap();
        assert_eq!(raw.status, 503);
        assert_eq!(raw.url, "https://paleobiodb.org/data1.2/occs/list.json");
    }

    #[test]
    fn test_mock_url_matches_transport() {
        let mock = MockPaleoDbClient::new("http://localhost:8080/data1.2/");
        let transport = crate::transport::HttpTransport::new("http://localhost:8080/data1.2/", None)
            .expect("transport creation should succeed");

        for endpoint in ["taxa/list", "/occs/list", "intervals/list"] {
            assert_eq!(
                mock.endpoint_url(endpoint).unwrap(),
                transport.endpoint_url(endpoint).unwrap()
            );
        }
        assert!(mock.endpoint_url("").is_err());
    }

    #[tokio::test]
    async fn test_mock_reset() {
        let mock = MockPaleoDbClient::default();
        mock.call("taxa/list", &QueryParams::new()).await.unwrap();
        assert_eq!(mock.call_count("taxa/list"), 1);

        mock.reset();
        assert_eq!(mock.call_count("taxa/list"), 0);
        assert!(mock.get_calls(None).is_empty());
    }
}
