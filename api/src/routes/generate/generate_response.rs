use serde::Serialize;

/// Success body for `POST /api/generate`.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Generated source text, verbatim from the model.
    pub code: String,
}
