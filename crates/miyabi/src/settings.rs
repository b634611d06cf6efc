//! Layered service settings.

use derive_getters::Getters;
use miyabi_error::{ConfigError, GenerationError, GenerationErrorKind};
use miyabi_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GeminiConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory when none is given.
const DEFAULT_SETTINGS_FILE: &str = "miyabi";

/// Service settings.
///
/// Sources, lowest precedence first:
/// 1. Built-in defaults
/// 2. `miyabi.toml` in the working directory, or the file passed explicitly
/// 3. `MIYABI_*` environment variables (e.g. `MIYABI_PROMPT_PATH`)
///
/// The API key is never read from a file; it comes from `GEMINI_API_KEY`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct Settings {
    /// Path of the system instruction file
    prompt_path: PathBuf,
    /// Gemini model identifier
    model: String,
    /// Gemini API base URL
    base_url: String,
    /// Per-request timeout in seconds
    timeout_secs: u64,
}

impl Settings {
    /// Load settings from defaults, an optional file, and the environment.
    ///
    /// An explicit `path` must exist; the implicit `miyabi.toml` is optional.
    #[tracing::instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        let settings = config::Config::builder()
            .set_default("prompt_path", "prompt.txt")
            .and_then(|b| b.set_default("model", DEFAULT_MODEL))
            .and_then(|b| b.set_default("base_url", DEFAULT_BASE_URL))
            .and_then(|b| b.set_default("timeout_secs", DEFAULT_TIMEOUT_SECS))
            .map_err(|e| ConfigError::new(format!("Invalid default settings: {}", e)))?
            .add_source(file)
            .add_source(config::Environment::with_prefix("MIYABI").try_parsing(true))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load settings: {}", e)))?;

        let settings: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        tracing::debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Gemini client configuration, with the key taken from `GEMINI_API_KEY`.
    pub fn gemini_config(&self) -> Result<GeminiConfig, GenerationError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))?;

        self.gemini_config_with_key(api_key)
    }

    /// Gemini client configuration with an explicit key.
    pub fn gemini_config_with_key(
        &self,
        api_key: impl Into<String>,
    ) -> Result<GeminiConfig, GenerationError> {
        GeminiConfig::builder()
            .api_key(api_key)
            .model(self.model.clone())
            .base_url(self.base_url.clone())
            .timeout_secs(self.timeout_secs)
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ClientCreation(format!(
                    "Invalid Gemini configuration: {}",
                    e
                )))
            })
    }
}
