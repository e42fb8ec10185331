//! Response models.
//!
//! PBDB bodies are treated as opaque JSON; only the top-level key names and
//! the length of `records` are interpreted.

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::transport::decode_response;

/// A response as it came off the wire, before status and JSON checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Request URL without the query string
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Body text
    pub body: String,
}

impl RawResponse {
    /// Check the status and parse the body.
    ///
    /// # Errors
    ///
    /// `Error::Api` for 4xx/5xx statuses, `Error::Parse` for invalid JSON.
    pub fn decode(self) -> Result<ApiResponse, Error> {
        let body = decode_response(&self.url, self.status, &self.body)?;
        Ok(ApiResponse {
            url: self.url,
            status: self.status,
            body,
        })
    }
}

/// A successful response from the data service.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Request URL without the query string
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Parsed JSON body
    pub body: Value,
}

impl ApiResponse {
    /// Summarize the body.
    #[must_use]
    pub fn summary(&self) -> ResponseSummary {
        ResponseSummary::from_value(&self.body)
    }

    /// The `records` array, if the body has one.
    #[must_use]
    pub fn records(&self) -> Option<&Vec<Value>> {
        self.body.get("records").and_then(Value::as_array)
    }

    /// Identifier of the first record: `oid` in the compact vocabulary,
    /// `taxon_no` in the PBDB one.
    #[must_use]
    pub fn first_record_id(&self) -> Option<String> {
        let first = self.records()?.first()?;
        ["oid", "taxon_no"]
            .iter()
            .filter_map(|key| first.get(*key))
            .find_map(|v| match v {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }
}

/// Top-level key names and record count of a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseSummary {
    /// Top-level key names, in document order
    pub keys: Vec<String>,
    /// Length of `records`, zero when absent or not an array
    pub record_count: usize,
}

impl ResponseSummary {
    #[must_use]
    pub fn from_value(body: &Value) -> Self {
        let keys = body
            .as_object()
            .map(|obj| obj.keys().cloned().collect())
            .unwrap_or_default();
        let record_count = body
            .get("records")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);

        Self { keys, record_count }
    }
}
