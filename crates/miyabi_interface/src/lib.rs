//! Trait definitions for Miyabi generation backends.
//!
//! The tanka pipeline is generic over [`TankaModel`], so the Gemini client
//! and scripted test doubles are interchangeable.

use async_trait::async_trait;
use miyabi_core::{GenerationRequest, StructuredCandidate};
use miyabi_error::GenerationError;

/// A backend that turns one request into one structured candidate.
///
/// Implementations make exactly one upstream call per `generate` and never
/// retry internally; the pipeline owns the retry decision.
#[async_trait]
pub trait TankaModel: Send + Sync {
    /// Ask the model for a candidate.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] whose kind distinguishes quota
    /// exhaustion from every other upstream failure.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<StructuredCandidate, GenerationError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;

    /// Model identifier for logging.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: TankaModel + ?Sized> TankaModel for std::sync::Arc<T> {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<StructuredCandidate, GenerationError> {
        (**self).generate(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
