//! HTTP client for the Gemini `generateContent` method.

use crate::gemini::dto::GenerateContentResponse;
use crate::gemini::{GeminiConfig, conversions};
use async_trait::async_trait;
use miyabi_core::{GenerationRequest, StructuredCandidate};
use miyabi_error::{GenerationError, GenerationErrorKind};
use miyabi_interface::TankaModel;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Gemini backend for the tanka pipeline.
///
/// One `generate` call is one HTTP request. The client never retries;
/// quota signals are classified so the pipeline can report them separately.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Errors
    ///
    /// Returns `ClientCreation` if the HTTP client cannot be built.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string()))
            })?;

        debug!(
            model = %config.model(),
            url = %config.endpoint(),
            "Created Gemini client"
        );

        Ok(Self { client, config })
    }

    /// Creates a client from `GEMINI_*` environment variables.
    pub fn from_env() -> Result<Self, GenerationError> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl TankaModel for GeminiClient {
    #[instrument(
        skip(self, request),
        fields(model = %self.config.model(), multimodal = request.is_multimodal())
    )]
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<StructuredCandidate, GenerationError> {
        let body = conversions::to_gemini_request(request);

        debug!(
            text_chars = request.original_text().chars().count(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Gemini request failed");
                GenerationError::new(GenerationErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let kind = GenerationErrorKind::from_status(status.as_u16(), error_text);
            if kind.is_quota() {
                warn!(status = %status, "Gemini request limit reached");
            } else {
                error!(status = %status, error = %kind, "Gemini API error");
            }
            return Err(GenerationError::new(kind));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(candidates = payload.candidates.len(), "Received response");

        conversions::from_gemini_response(&payload)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
