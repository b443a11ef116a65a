//! Specification normalization.
//!
//! The client submits a loosely-structured JSON object; every field is
//! optional and the feature list may arrive either as an array (the form
//! splits the textarea itself) or as one newline-delimited block. The only
//! structurally invalid inputs are non-objects. Everything else normalizes:
//! missing or blank fields fall back to fixed defaults, feature entries are
//! trimmed and empty ones dropped, order preserved.

use serde_json::Value;

use crate::error_handler::{CodegenError, Result};

/// Default application name when the spec omits one.
pub const DEFAULT_APP_NAME: &str = "My Simple App";

/// Default description when the spec omits one.
pub const DEFAULT_DESCRIPTION: &str = "A basic web application.";

/// Fully-defaulted application specification.
///
/// Constructed once per request by [`normalize`] and immutable afterwards.
/// `features` may be empty; the prompt builder substitutes a sentinel phrase
/// in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSpec {
    pub app_name: String,
    pub description: String,
    pub features: Vec<String>,
}

/// Normalizes a raw specification payload.
///
/// # Errors
/// Returns [`CodegenError::InvalidSpec`] when `raw` is not a JSON object
/// (null, number, string, bool, or array). Any object input succeeds.
pub fn normalize(raw: &Value) -> Result<AppSpec> {
    let obj = raw.as_object().ok_or(CodegenError::InvalidSpec)?;

    let app_name = text_field(obj.get("appName")).unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

    let description = text_field(obj.get("description"))
        .or_else(|| text_field(obj.get("appDescription")))
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let features = feature_list(obj.get("features").or_else(|| obj.get("appFeatures")));

    Ok(AppSpec {
        app_name,
        description,
        features,
    })
}

/// Trimmed text value of an optional field; `None` when missing, not a
/// string, or blank.
fn text_field(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Feature entries from either representation.
///
/// Arrays keep string elements only; a plain string is treated as one
/// newline-delimited block. Entries are trimmed, empties dropped, order
/// preserved. No cap, no deduplication.
fn feature_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(block)) => block
            .lines()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_inputs() {
        for raw in [
            Value::Null,
            json!(123),
            json!("hello"),
            json!(true),
            json!(["appName"]),
        ] {
            let err = normalize(&raw).unwrap_err();
            assert!(matches!(err, CodegenError::InvalidSpec), "input: {raw}");
        }
    }

    #[test]
    fn empty_object_gets_all_defaults() {
        let spec = normalize(&json!({})).unwrap();
        assert_eq!(spec.app_name, DEFAULT_APP_NAME);
        assert_eq!(spec.description, DEFAULT_DESCRIPTION);
        assert!(spec.features.is_empty());
    }

    #[test]
    fn blank_fields_fall_back_to_defaults() {
        let spec = normalize(&json!({ "appName": "   ", "description": "" })).unwrap();
        assert_eq!(spec.app_name, DEFAULT_APP_NAME);
        assert_eq!(spec.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn accepts_client_field_aliases() {
        let spec = normalize(&json!({
            "appDescription": "Tracks tasks.",
            "appFeatures": ["Add task", "Delete task"],
        }))
        .unwrap();
        assert_eq!(spec.description, "Tracks tasks.");
        assert_eq!(spec.features, vec!["Add task", "Delete task"]);
    }

    #[test]
    fn trims_features_and_drops_empties_preserving_order() {
        let spec = normalize(&json!({
            "features": ["  User login ", "", "   ", "Display data", 42, "Submit form"],
        }))
        .unwrap();
        assert_eq!(
            spec.features,
            vec!["User login", "Display data", "Submit form"]
        );
    }

    #[test]
    fn splits_newline_delimited_feature_block() {
        let spec = normalize(&json!({
            "features": "User login\n\n  Display data  \nSubmit form\n",
        }))
        .unwrap();
        assert_eq!(
            spec.features,
            vec!["User login", "Display data", "Submit form"]
        );
    }

    #[test]
    fn all_blank_feature_list_normalizes_to_empty() {
        let spec = normalize(&json!({ "features": ["", "  ", "\t"] })).unwrap();
        assert!(spec.features.is_empty());
    }
}
