//! Diagnostic rendering for smoke runs.
//!
//! Kept apart from the transport so that fetching never writes to stdout.

use std::io::Write;

use serde_json::Value;

use crate::error::Error;
use crate::params::QueryParams;
use crate::types::ResponseSummary;

/// Number of characters of pretty-printed JSON shown per response.
pub const PREVIEW_CHARS: usize = 1000;

/// Pretty-print `body` with two-space indentation, cut to `limit` characters.
///
/// # Errors
///
/// Returns a serialization error if the value cannot be rendered.
pub fn preview(body: &Value, limit: usize) -> Result<String, Error> {
    let pretty = serde_json::to_string_pretty(body)?;
    Ok(match pretty.char_indices().nth(limit) {
        Some((idx, _)) => pretty[..idx].to_string(),
        None => pretty,
    })
}

/// Render key names as `["records", "elapsed_time"]`.
#[must_use]
pub fn format_keys(keys: &[String]) -> String {
    format!("{keys:?}")
}

/// Lines written before the request goes out.
pub fn write_request(out: &mut impl Write, url: &str, params: &QueryParams) -> Result<(), Error> {
    writeln!(out)?;
    writeln!(out, "Calling: {url}")?;
    writeln!(out, "Params: {params}")?;
    Ok(())
}

/// Status line, written for every response that arrives.
pub fn write_status(out: &mut impl Write, status: u16) -> Result<(), Error> {
    writeln!(out, "Status code: {status}")?;
    Ok(())
}

/// Truncated pretty-printed body.
pub fn write_preview(out: &mut impl Write, body: &Value) -> Result<(), Error> {
    writeln!(out, "{}", preview(body, PREVIEW_CHARS)?)?;
    Ok(())
}

/// Key names and record count.
pub fn write_summary(out: &mut impl Write, summary: &ResponseSummary) -> Result<(), Error> {
    writeln!(out)?;
    writeln!(out, "Keys in response: {}", format_keys(&summary.keys))?;
    writeln!(out, "Number of records: {}", summary.record_count)?;
    Ok(())
}

/// Final line of a failed run, using the error's description.
pub fn write_failure(out: &mut impl Write, error: &Error) -> Result<(), Error> {
    writeln!(out, "Error: {error}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaleoDbError;
    use serde_json::json;

    #[test]
    fn test_preview_truncates_to_limit() {
        let records: Vec<Value> = (0..200).map(|i| json!({"oid": format!("occ:{i}")})).collect();
        let body = json!({ "records": records });

        let text = preview(&body, PREVIEW_CHARS).expect("Should render");
        assert_eq!(text.chars().count(), PREVIEW_CHARS);
        assert!(text.starts_with("{\n  \"records\": ["));
    }

    #[test]
    fn test_preview_short_body_untouched() {
        let body = json!({"records": []});
        assert_eq!(preview(&body, PREVIEW_CHARS).expect("Should render"), "{\n  \"records\": []\n}");
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let body = json!("Ménégoz");
        // "\"Ménégoz\"" is 9 characters but 11 bytes.
        assert_eq!(preview(&body, 4).expect("Should render"), "\"Mén");
    }

    #[test]
    fn test_write_summary() {
        let summary = ResponseSummary {
            keys: vec!["elapsed_time".to_string(), "records".to_string()],
            record_count: 3,
        };
        let mut out = Vec::new();
        write_summary(&mut out, &summary).expect("Should write");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "\nKeys in response: [\"elapsed_time\", \"records\"]\nNumber of records: 3\n"
        );
    }

    #[test]
    fn test_write_failure_uses_display() {
        let error: Error = PaleoDbError::from_status(500, "HTTP 500".to_string()).into();
        let mut out = Vec::new();
        write_failure(&mut out, &error).expect("Should write");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Error: HTTP request failed with status 500: HTTP 500\n"
        );

        let parse = Error::Parse {
            url: "https://paleobiodb.org/data1.2/intervals/list.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        let mut out = Vec::new();
        write_failure(&mut out, &parse).expect("Should write");
        assert!(String::from_utf8(out)
            .expect("utf8")
            .starts_with("Error: Response parse failure for https://paleobiodb.org/data1.2/intervals/list.json"));
    }

    #[test]
    fn test_write_status() {
        let mut out = Vec::new();
        write_status(&mut out, 404).expect("Should write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "Status code: 404\n");
    }

    #[test]
    fn test_write_request() {
        let params = QueryParams::new().with("name", "Cretaceous");
        let mut out = Vec::new();
        write_request(&mut out, "https://paleobiodb.org/data1.2/intervals/list.json", &params)
            .expect("Should write");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "\nCalling: https://paleobiodb.org/data1.2/intervals/list.json\nParams: {\"name\": \"Cretaceous\"}\n"
        );
    }
}
