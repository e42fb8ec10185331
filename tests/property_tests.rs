//! Property-based tests for response summaries and previews.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use paleodb::report::{format_keys, preview};
use paleodb::ResponseSummary;

/// Strategy for generating JSON-compatible primitive values.
fn json_primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000_i64..1_000_000_i64).prop_map(|n| json!(n)),
        "[a-zA-Z0-9 _\\-\\.é]{0,30}".prop_map(|s| json!(s)),
    ]
}

/// Strategy for generating nested JSON values.
fn json_value() -> impl Strategy<Value = Value> {
    json_primitive().prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..5)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

/// Strategy for top-level response objects, with or without `records`.
fn response_object() -> impl Strategy<Value = (Value, Option<usize>)> {
    (
        prop::collection::btree_map("[a-z_]{1,12}", json_value(), 0..6),
        prop::option::of(prop::collection::vec(json_value(), 0..20)),
    )
        .prop_map(|(fields, records)| {
            let mut obj: Map<String, Value> = fields.into_iter().filter(|(k, _)| k != "records").collect();
            let count = records.as_ref().map(Vec::len);
            if let Some(records) = records {
                obj.insert("records".to_string(), Value::Array(records));
            }
            (Value::Object(obj), count)
        })
}

proptest! {
    /// The reported key list is exactly the object's top-level key set.
    #[test]
    fn test_summary_keys_equal_object_keys((body, _) in response_object()) {
        let summary = ResponseSummary::from_value(&body);
        let expected: Vec<String> = body.as_object().map(|o| o.keys().cloned().collect()).unwrap_or_default();

        prop_assert_eq!(&summary.keys, &expected);
        prop_assert_eq!(format_keys(&summary.keys), format!("{expected:?}"));
    }

    /// The record count is the length of `records`, or zero without it.
    #[test]
    fn test_summary_record_count((body, count) in response_object()) {
        let summary = ResponseSummary::from_value(&body);
        prop_assert_eq!(summary.record_count, count.unwrap_or(0));
    }

    /// The preview is a prefix of the full rendering and never exceeds the limit.
    #[test]
    fn test_preview_is_bounded_prefix(body in json_value(), limit in 0_usize..400) {
        let full = serde_json::to_string_pretty(&body).expect("Should render");
        let text = preview(&body, limit).expect("Should render");

        prop_assert!(text.chars().count() <= limit);
        prop_assert!(full.starts_with(&text));
        if full.chars().count() <= limit {
            prop_assert_eq!(text, full);
        }
    }
}
