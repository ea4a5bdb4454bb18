//! JSON entry list decoding.

use serde_json::Value;

use crate::error::EntryError;
use crate::types::{Entry, EntryFeature};

/// Decode a JSON array of entries, preserving input order.
///
/// Syntax errors carry a line and column; schema violations carry the index
/// of the offending element.
pub fn parse_entries(json: &str) -> Result<Vec<Entry>, EntryError> {
    let value: Value = serde_json::from_str(json).map_err(EntryError::Parse)?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(EntryError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let entry: Entry = serde_json::from_value(item).map_err(|e| EntryError::Schema {
            index,
            message: e.to_string(),
        })?;
        check_value(index, &entry)?;

        if let EntryFeature::Unrecognized(name) = entry.feature() {
            log::warn!("entry {index}: unrecognized feature '{name}', entry will never be emitted");
        }

        entries.push(entry);
    }

    log::debug!("decoded {} entries", entries.len());
    Ok(entries)
}

/// Reject values that would produce an empty or multi-line rule.
fn check_value(index: usize, entry: &Entry) -> Result<(), EntryError> {
    let value = entry.value();
    let field = entry.field_name();

    if value.trim().is_empty() {
        return Err(EntryError::Schema {
            index,
            message: format!("`{field}` must not be empty"),
        });
    }

    if value.contains(['\n', '\r']) {
        return Err(EntryError::Schema {
            index,
            message: format!("`{field}` must be a single line"),
        });
    }

    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeatureFlag, MatchMethod};

    fn index_of(err: &EntryError) -> Option<usize> {
        match err {
            EntryError::Schema { index, .. } => Some(*index),
            _ => None,
        }
    }

    #[test]
    fn parses_both_variants_in_order() {
        let json = r#"[
            {"type":"domain","match":"literal","domain":"bad.example"},
            {"type":"path","match":"literal","path":"https://x.example/bad"}
        ]"#;
        let entries = parse_entries(json).expect("entries should parse");
        assert_eq!(
            entries,
            vec![Entry::domain("bad.example"), Entry::path("https://x.example/bad")]
        );
    }

    #[test]
    fn parses_feature_tags() {
        let json = r#"[
            {"type":"domain","match":"literal","domain":"a.example","feature":"GoogleSearchPrefix"},
            {"type":"domain","match":"literal","domain":"b.example","feature_flag":"Base"},
            {"type":"domain","match":"literal","domain":"c.example","feature":"Bing"},
            {"type":"domain","match":"literal","domain":"d.example","feature":null}
        ]"#;
        let entries = parse_entries(json).expect("entries should parse");
        assert_eq!(entries[0].feature(), &EntryFeature::Known(FeatureFlag::GoogleSearchPrefix));
        assert_eq!(entries[1].feature(), &EntryFeature::Known(FeatureFlag::Base));
        assert_eq!(entries[2].feature(), &EntryFeature::Unrecognized("Bing".to_string()));
        assert_eq!(entries[3].feature(), &EntryFeature::default());
    }

    #[test]
    fn ignores_unknown_keys() {
        let json = r#"[{"type":"path","match":"literal","path":"a.example/x","note":"spam"}]"#;
        let entries = parse_entries(json).expect("entries should parse");
        assert_eq!(entries[0].match_method(), MatchMethod::Literal);
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_entries("[]").expect("entries should parse").is_empty());
    }

    #[test]
    fn missing_field_is_schema_error() {
        let err = parse_entries(r#"[{"type":"domain"}]"#).unwrap_err();
        assert!(matches!(err, EntryError::Schema { index: 0, .. }), "{err}");
    }

    #[test]
    fn payload_must_match_type() {
        let json = r#"[
            {"type":"domain","match":"literal","domain":"ok.example"},
            {"type":"domain","match":"literal","path":"x.example/y"}
        ]"#;
        let err = parse_entries(json).unwrap_err();
        assert_eq!(index_of(&err), Some(1));
        assert!(err.to_string().contains("domain"), "{err}");
    }

    #[test]
    fn unknown_type_and_match_are_schema_errors() {
        let err = parse_entries(r#"[{"type":"regex","match":"literal","regex":"x"}]"#).unwrap_err();
        assert_eq!(index_of(&err), Some(0));

        let err = parse_entries(r#"[{"type":"domain","match":"wildcard","domain":"x"}]"#).unwrap_err();
        assert_eq!(index_of(&err), Some(0));
        assert!(err.to_string().contains("wildcard"), "{err}");
    }

    #[test]
    fn empty_and_multiline_values_are_rejected() {
        let err = parse_entries(r#"[{"type":"domain","match":"literal","domain":"  "}]"#).unwrap_err();
        assert!(err.to_string().contains("must not be empty"), "{err}");

        let err = parse_entries(r#"[{"type":"path","match":"literal","path":"a\nb"}]"#).unwrap_err();
        assert!(err.to_string().contains("single line"), "{err}");
    }

    #[test]
    fn malformed_json_reports_position() {
        let err = parse_entries("[\n  {\"type\": \"domain\",\n").unwrap_err();
        let EntryError::Parse(source) = &err else {
            panic!("expected a syntax error, got {err}");
        };
        assert!(source.line() >= 2);
        assert!(err.to_string().contains("line"), "{err}");
        assert_eq!(index_of(&err), None);
    }

    #[test]
    fn top_level_must_be_array() {
        let err = parse_entries(r#"{"type":"domain"}"#).unwrap_err();
        assert!(matches!(err, EntryError::NotAnArray { found: "an object" }));
    }
}
