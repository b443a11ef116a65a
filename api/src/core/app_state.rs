use std::sync::Arc;

use llm_codegen_service::{
    config::default_config::config_openai_codegen, error_handler::CodegenError,
    services::open_ai_service::OpenAiCodegenService,
};

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Long-lived OpenAI client; constructed once, shared by every request.
    pub codegen: Arc<OpenAiCodegenService>,
}

impl AppState {
    /// Loads config from environment variables and builds the client.
    ///
    /// # Errors
    /// Returns [`CodegenError::Config`] when `OPENAI_API_KEY` is missing,
    /// blank, or still the sample placeholder. Treat this as fatal.
    pub fn from_env() -> Result<Self, CodegenError> {
        let cfg = config_openai_codegen()?;
        let codegen = Arc::new(OpenAiCodegenService::new(cfg)?);
        Ok(Self { codegen })
    }
}
