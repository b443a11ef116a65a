//! Default code-generation config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`  = API key (mandatory, non-blank, not the placeholder)
//! - `OPENAI_API_BASE` = optional API base URL (default `https://api.openai.com`)
//!
//! Sampling parameters are deliberately constant: one completion, 2048
//! output tokens, temperature 0.3. One user action maps to one provider
//! call, so there is nothing to tune per request.

use crate::{
    config::codegen_model_config::CodegenModelConfig,
    error_handler::{CodegenError, ConfigError, must_env},
};

/// Model used for app-code generation.
pub const CODEGEN_MODEL: &str = "gpt-3.5-turbo";

/// Upper bound on generated output length.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Low temperature for reproducible code output.
pub const TEMPERATURE: f32 = 0.3;

/// A single completion per request.
pub const COMPLETION_COUNT: u32 = 1;

/// Sample value shipped in `.env.example`; never a real credential.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_OPENAI_API_KEY_HERE";

/// Constructs the OpenAI code-generation config from the environment.
///
/// # Errors
/// - [`ConfigError::MissingVar`] if `OPENAI_API_KEY` is absent or blank
/// - [`ConfigError::PlaceholderApiKey`] if the key equals the sample value
/// - [`ConfigError::InvalidEndpoint`] if `OPENAI_API_BASE` has no http scheme
pub fn config_openai_codegen() -> Result<CodegenModelConfig, CodegenError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    if api_key.trim() == API_KEY_PLACEHOLDER {
        return Err(ConfigError::PlaceholderApiKey.into());
    }

    let endpoint = std::env::var("OPENAI_API_BASE")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "https://api.openai.com".to_string());
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        return Err(ConfigError::InvalidEndpoint(endpoint).into());
    }

    Ok(CodegenModelConfig {
        model: CODEGEN_MODEL.to_string(),
        endpoint,
        api_key: Some(api_key),
        max_tokens: MAX_OUTPUT_TOKENS,
        temperature: TEMPERATURE,
        completion_count: COMPLETION_COUNT,
        timeout_secs: None,
    })
}
