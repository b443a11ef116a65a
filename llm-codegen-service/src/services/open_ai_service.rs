//! OpenAI chat completion client for app-code generation.
//!
//! Minimal, non-streaming client around the OpenAI REST API:
//! - POST {endpoint}/v1/chat/completions
//!
//! Constructor validation:
//! - `cfg.api_key` must be present, non-blank, and not the sample placeholder
//! - `cfg.endpoint` must start with http:// or https://
//!
//! One invocation performs exactly one outbound call. No retries, no
//! backoff; a failed request surfaces as a classified [`CodegenError`] and
//! retrying is left to the user resubmitting the form.

use std::time::{Duration, Instant};

use reqwest::{StatusCode, header};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::{
    config::{codegen_model_config::CodegenModelConfig, default_config::API_KEY_PLACEHOLDER},
    error_handler::{CodegenError, ConfigError, Result, make_snippet},
    pipeline::CompletionBackend,
    prompt::PromptPair,
    response::ChatCompletionResponse,
};

/// Thin client for the OpenAI chat completions API.
///
/// Constructed once at startup from a complete [`CodegenModelConfig`] and
/// shared across requests. Internally keeps a preconfigured
/// `reqwest::Client` with bearer auth and JSON content type.
#[derive(Debug)]
pub struct OpenAiCodegenService {
    client: reqwest::Client,
    cfg: CodegenModelConfig,
    url_chat: String,
}

impl OpenAiCodegenService {
    /// Creates a new [`OpenAiCodegenService`] from the given config.
    ///
    /// # Errors
    /// - [`ConfigError::MissingApiKey`] if the key is absent or blank
    /// - [`ConfigError::PlaceholderApiKey`] if the key equals the sample value
    /// - [`ConfigError::InvalidEndpoint`] if the endpoint has no http scheme
    /// - [`CodegenError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: CodegenModelConfig) -> Result<Self> {
        // 1) Credential must be a real key.
        let api_key = match cfg.api_key.as_deref().map(str::trim) {
            None | Some("") => return Err(ConfigError::MissingApiKey.into()),
            Some(API_KEY_PLACEHOLDER) => return Err(ConfigError::PlaceholderApiKey.into()),
            Some(key) => key.to_string(),
        };

        // 2) Endpoint must use http/https.
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ConfigError::InvalidEndpoint(cfg.endpoint.clone()).into());
        }

        // 3) HTTP client: default headers, timeout only when configured.
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
                // The key made it into an invalid header value; treat it as
                // an unusable credential rather than leaking it in an error.
                CodegenError::from(ConfigError::MissingApiKey)
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_chat = format!("{}/v1/chat/completions", base);

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            max_tokens = cfg.max_tokens,
            temperature = cfg.temperature,
            "OpenAiCodegenService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Performs a **non-streaming** chat completion request.
    ///
    /// Sends the fixed `[system, user]` message pair with the sampling
    /// parameters from config and returns the decoded payload. Shape
    /// validation of the payload happens downstream in
    /// [`crate::response::completion_text`].
    ///
    /// # Errors
    /// - [`CodegenError::AuthFailed`] on HTTP 401
    /// - [`CodegenError::RateLimited`] on HTTP 429
    /// - [`CodegenError::Api`] for any other non-success status
    /// - [`CodegenError::Transport`] for network or decode failures
    pub async fn complete(&self, prompt: &PromptPair) -> Result<ChatCompletionResponse> {
        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg, prompt);

        debug!(
            model = %self.cfg.model,
            user_prompt_len = prompt.user.len(),
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                url = %self.url_chat,
                %snippet,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis() as u64,
                "OpenAI /v1/chat/completions returned non-success status"
            );

            return Err(classify_status(status, snippet));
        }

        let out: ChatCompletionResponse = resp.json().await?;

        info!(
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis() as u64,
            "chat completion completed"
        );

        Ok(out)
    }
}

impl CompletionBackend for OpenAiCodegenService {
    async fn complete(&self, prompt: &PromptPair) -> Result<ChatCompletionResponse> {
        OpenAiCodegenService::complete(self, prompt).await
    }
}

/// Maps a non-success provider status onto the closed error taxonomy.
fn classify_status(status: StatusCode, snippet: String) -> CodegenError {
    match status {
        StatusCode::UNAUTHORIZED => CodegenError::AuthFailed,
        StatusCode::TOO_MANY_REQUESTS => CodegenError::RateLimited,
        _ => CodegenError::Api { status, snippet },
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    n: u32,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds the fixed `[system, user]` request from config and prompt.
    fn from_cfg(cfg: &'a CodegenModelConfig, prompt: &'a PromptPair) -> Self {
        Self {
            model: &cfg.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
            n: cfg.completion_count,
        }
    }
}

/// Chat message for the OpenAI API.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    /// One of: "system" | "user".
    role: &'a str,
    content: &'a str,
}
