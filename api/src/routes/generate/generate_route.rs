//! POST /api/generate — generates app code from a user specification.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde_json::Value;

use llm_codegen_service::pipeline::generate_app_code;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::generate::generate_response::GenerateResponse,
};

/// Handler: POST /api/generate
///
/// The body is accepted loosely typed; the pipeline owns defaulting and
/// validation. Shallow per-field type checks run first so that fundamentally
/// malformed payloads are rejected before a prompt is ever built.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3001/api/generate \
///   -H 'content-type: application/json' \
///   -d '{"appName":"Todo","description":"A todo list.","features":["Add item"]}'
/// ```
pub async fn generate_app(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> AppResult<Json<GenerateResponse>> {
    check_field_types(&body)?;

    let code = generate_app_code(state.codegen.as_ref(), &body).await?;

    Ok(Json(GenerateResponse { code }))
}

/// Rejects present-but-mistyped fields with a specific message.
///
/// The pipeline tolerates missing fields, but a field of the wrong shape is
/// almost certainly a broken client, so answer 400 early.
fn check_field_types(body: &Value) -> AppResult<()> {
    let Some(obj) = body.as_object() else {
        // Non-object bodies fall through to the pipeline, which classifies
        // them as invalid specifications.
        return Ok(());
    };

    for key in ["appName", "description", "appDescription"] {
        if let Some(v) = obj.get(key) {
            if !v.is_string() && !v.is_null() {
                return Err(AppError::BadRequest(format!(
                    "invalid type for {key}, expected string"
                )));
            }
        }
    }

    for key in ["features", "appFeatures"] {
        if let Some(v) = obj.get(key) {
            if !v.is_array() && !v.is_string() && !v.is_null() {
                return Err(AppError::BadRequest(format!(
                    "invalid type for {key}, expected array or string"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_well_typed_bodies() {
        assert!(check_field_types(&json!({})).is_ok());
        assert!(check_field_types(&json!({ "appName": "Todo" })).is_ok());
        assert!(check_field_types(&json!({ "features": ["a", "b"] })).is_ok());
        assert!(check_field_types(&json!({ "features": "a\nb" })).is_ok());
        assert!(check_field_types(&json!({ "appName": null })).is_ok());
    }

    #[test]
    fn rejects_mistyped_text_fields() {
        let err = check_field_types(&json!({ "appName": 42 })).unwrap_err();
        assert!(err.to_string().contains("appName"));

        let err = check_field_types(&json!({ "description": ["x"] })).unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn rejects_mistyped_feature_fields() {
        let err = check_field_types(&json!({ "features": { "a": 1 } })).unwrap_err();
        assert!(err.to_string().contains("features"));
    }

    #[test]
    fn non_object_bodies_are_left_to_the_pipeline() {
        assert!(check_field_types(&json!("hello")).is_ok());
        assert!(check_field_types(&Value::Null).is_ok());
    }
}
