/// Configuration for the code-generation model invocation.
///
/// One config describes one long-lived OpenAI client. Sampling parameters
/// are fixed per deployment; they are loaded once at startup and never
/// change between requests.
#[derive(Debug, Clone)]
pub struct CodegenModelConfig {
    /// Model identifier string (e.g. `"gpt-3.5-turbo"`).
    pub model: String,

    /// API base URL (e.g. `"https://api.openai.com"`).
    pub endpoint: String,

    /// API key for authentication. Validated at client construction.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature. Kept low for deterministic code output.
    pub temperature: f32,

    /// Number of completions requested per call.
    pub completion_count: u32,

    /// Optional request timeout in seconds. `None` keeps the transport
    /// default.
    pub timeout_secs: Option<u64>,
}
