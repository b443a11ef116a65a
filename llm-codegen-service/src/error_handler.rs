//! Unified error handling for `llm-codegen-service`.
//!
//! The crate exposes a single closed taxonomy, [`CodegenError`], covering
//! every failure the generation pipeline can produce. Each variant carries a
//! stable, client-safe message; provider response bodies are kept only as
//! truncated snippets for logging and never appear in `Display` output.
//!
//! Startup-time problems (missing credential, bad endpoint) live in the
//! nested [`ConfigError`] enum. They are fatal: the process must not begin
//! serving requests when configuration is invalid.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Closed error taxonomy for the generation pipeline.
///
/// Request-time variants map one-to-one onto the categories the HTTP layer
/// turns into status codes. [`CodegenError::Config`] only occurs during
/// startup and never per request.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Configuration/credential errors (startup only).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The inbound specification payload was not a JSON object.
    #[error("invalid specifications provided")]
    InvalidSpec,

    /// The provider payload had no usable completion text.
    #[error("LLM returned an empty or invalid response")]
    EmptyCompletion,

    /// The provider rejected the API key.
    #[error("OpenAI authentication failed; verify the API key")]
    AuthFailed,

    /// The provider reported that the rate limit was exceeded.
    #[error("OpenAI rate limit exceeded; try again later")]
    RateLimited,

    /// Any other non-success provider status.
    ///
    /// `snippet` is a truncated copy of the response body, retained for
    /// logs only; it is deliberately absent from the display message.
    #[error("OpenAI API error (status {status})")]
    Api {
        /// HTTP status returned by the provider.
        status: StatusCode,
        /// Short body excerpt for diagnostics.
        snippet: String,
    },

    /// Network-level failure: DNS, connect, timeout, or an undecodable body.
    #[error("failed to communicate with the OpenAI API")]
    Transport(#[from] reqwest::Error),
}

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// API key is absent or blank.
    #[error("OpenAI API key is missing or empty")]
    MissingApiKey,

    /// API key still equals the sample placeholder from `.env.example`.
    #[error("OpenAI API key is set to the sample placeholder value")]
    PlaceholderApiKey,

    /// Endpoint is empty or does not start with http/https.
    #[error("invalid API endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`ConfigError::MissingVar`] if the variable is absent or blank.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Maximum number of characters kept from a provider response body.
const SNIPPET_MAX: usize = 200;

/// Collapses a provider response body into a short single-line excerpt
/// suitable for structured logs.
pub fn make_snippet(body: &str) -> String {
    let flat: String = body
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if flat.len() <= SNIPPET_MAX {
        flat
    } else {
        let mut cut = SNIPPET_MAX;
        while !flat.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…", &flat[..cut])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn must_env_rejects_unset_variable() {
        let err = must_env("APP_BUILDER_DOES_NOT_EXIST").unwrap_err();
        assert!(matches!(
            err,
            CodegenError::Config(ConfigError::MissingVar("APP_BUILDER_DOES_NOT_EXIST"))
        ));
    }

    #[test]
    fn snippet_collapses_whitespace() {
        assert_eq!(make_snippet("a\n  b\t c"), "a b c");
    }

    #[test]
    fn snippet_truncates_long_bodies() {
        let body = "x".repeat(500);
        let s = make_snippet(&body);
        assert!(s.chars().count() <= SNIPPET_MAX + 1);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn api_error_message_hides_body_snippet() {
        let err = CodegenError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            snippet: "secret provider detail".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(!msg.contains("secret provider detail"));
    }
}
