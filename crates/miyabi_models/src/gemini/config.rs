//! Connection settings for the Gemini API.

use derive_getters::Getters;
use miyabi_error::{GenerationError, GenerationErrorKind};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the Gemini client.
#[derive(Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header
    api_key: String,
    /// Model identifier, e.g. "gemini-2.0-flash"
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base URL up to and including the API version segment
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Request timeout in seconds
    #[builder(default = "DEFAULT_TIMEOUT_SECS")]
    timeout_secs: u64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    /// Creates a new builder for GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (required)
    /// - `GEMINI_MODEL` (default: "gemini-2.0-flash")
    /// - `GEMINI_BASE_URL` (default: the public v1beta endpoint)
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))?;

        let mut builder = Self::builder();
        builder.api_key(api_key);
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            builder.model(model);
        }
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            builder.base_url(base_url);
        }

        builder.build().map_err(|e| {
            GenerationError::new(GenerationErrorKind::ClientCreation(format!(
                "Invalid Gemini configuration: {}",
                e
            )))
        })
    }

    /// Full URL of the `generateContent` method for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}
