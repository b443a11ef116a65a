use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use llm_codegen_service::error_handler::CodegenError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Classified failure from the generation pipeline. The inner display
    /// message is stable and pre-classified as safe for clients.
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            AppError::Codegen(e) => match e {
                CodegenError::InvalidSpec => StatusCode::BAD_REQUEST,
                CodegenError::EmptyCompletion => StatusCode::BAD_GATEWAY,
                CodegenError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                // Misconfigured or rejected credential is an internal
                // problem from the client's point of view.
                CodegenError::AuthFailed | CodegenError::Config(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                CodegenError::Api { .. } | CodegenError::Transport(_) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",

            AppError::Codegen(e) => match e {
                CodegenError::InvalidSpec => "INVALID_SPEC",
                CodegenError::EmptyCompletion => "EMPTY_COMPLETION",
                CodegenError::RateLimited => "RATE_LIMITED",
                CodegenError::AuthFailed => "AUTH_FAILED",
                CodegenError::Config(_) => "CONFIG_ERROR",
                CodegenError::Api { .. } => "PROVIDER_ERROR",
                CodegenError::Transport(_) => "TRANSPORT_ERROR",
                _ => "INTERNAL_ERROR",
            },
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;
