//! Query parameters for PBDB requests.
//!
//! Parameters are passed to the service verbatim; the service is the only
//! authority on which keys and values it accepts.

use std::fmt;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Free text, e.g. a taxon name
    Text(String),
    /// Integer, e.g. a result limit
    Integer(i64),
    /// Float, e.g. an age bound in Ma
    Float(f64),
}

impl ParamValue {
    /// Render the value as it appears in the query string.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Ordered mapping of query parameters.
///
/// Insertion order is preserved so that diagnostics and query strings are
/// stable. Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Look up a parameter by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Key/value pairs ready for `reqwest::RequestBuilder::query`.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_query_value()))
            .collect()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: {value}")?;
        }
        f.write_str("}")
    }
}

/// Join a field list the way PBDB expects it (`attr,app,size`, no spaces).
#[must_use]
pub fn join_show(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order_and_replaces() {
        let mut params = QueryParams::new()
            .with("name", "Tyrannosaurus")
            .with("rel", "all_children");
        params.insert("name", "Allosaurus");

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "rel"]);
        assert_eq!(params.get("name"), Some(&ParamValue::from("Allosaurus")));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_display_quotes_text_and_leaves_numbers_bare() {
        let params = QueryParams::new()
            .with("base_name", "Tyrannosaurus")
            .with("limit", 5_u32);

        assert_eq!(params.to_string(), r#"{"base_name": "Tyrannosaurus", "limit": 5}"#);
        assert_eq!(QueryParams::new().to_string(), "{}");
    }

    #[test]
    fn test_query_pairs() {
        let params = QueryParams::new()
            .with("limit", 5_u32)
            .with("min_ma", 66.0)
            .with("max_ma", 145.5);

        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("limit".to_string(), "5".to_string()),
                ("min_ma".to_string(), "66".to_string()),
                ("max_ma".to_string(), "145.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_untyped_integer_literal() {
        let params = QueryParams::new().with("limit", 5).with("offset", -1);

        assert_eq!(params.get("limit"), Some(&ParamValue::Integer(5)));
        assert_eq!(params.get("offset").map(ParamValue::to_query_value), Some("-1".to_string()));
    }

    #[test]
    fn test_join_show_strips_spaces() {
        assert_eq!(join_show(&["attr", " app", "size ", "", "class"]), "attr,app,size,class");
        assert_eq!(join_show(&[]), "");
    }
}
