//! Generation request pipeline.
//!
//! Sequences normalization, prompt construction, the single completion call,
//! and response validation. Invalid specifications short-circuit before any
//! network traffic; every other failure keeps the category assigned at the
//! point it was detected.

use std::future::Future;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::{
    error_handler::Result,
    prompt::{self, PromptPair},
    response::{self, ChatCompletionResponse},
    spec,
};

/// Seam between the pipeline and the completion provider.
///
/// The production implementation is
/// [`crate::services::open_ai_service::OpenAiCodegenService`]; tests drive
/// the pipeline with an in-memory backend instead.
pub trait CompletionBackend {
    /// Performs one completion call for the given prompt pair.
    fn complete(
        &self,
        prompt: &PromptPair,
    ) -> impl Future<Output = Result<ChatCompletionResponse>> + Send;
}

/// Generates application code for a raw specification payload.
///
/// Stages: normalize → build prompt → complete → validate. Exactly one
/// provider call per invocation; nothing is retried here.
///
/// # Errors
/// - [`crate::error_handler::CodegenError::InvalidSpec`] for non-object
///   input, before the backend is touched
/// - backend failures pass through with their category unchanged
/// - [`crate::error_handler::CodegenError::EmptyCompletion`] when the
///   payload has no usable completion text
pub async fn generate_app_code<B: CompletionBackend>(backend: &B, raw: &Value) -> Result<String> {
    let spec = spec::normalize(raw)?;
    let prompt = prompt::build_prompt(&spec);

    debug!(
        app_name = %spec.app_name,
        feature_count = spec.features.len(),
        user_prompt_len = prompt.user.len(),
        "built generation prompt"
    );

    let started = Instant::now();
    let payload = match backend.complete(&prompt).await {
        Ok(payload) => payload,
        Err(e) => {
            error!(error = %e, "completion request failed");
            return Err(e);
        }
    };

    let code = response::completion_text(payload)?;

    info!(
        latency_ms = started.elapsed().as_millis() as u64,
        code_len = code.len(),
        "app code generated"
    );

    Ok(code)
}
