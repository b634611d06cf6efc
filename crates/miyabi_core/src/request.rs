//! The outbound generation request.

use crate::{AttachedImage, ResponseSchema, SystemInstruction};
use derive_getters::Getters;

/// Everything a backend needs to ask the model for one tanka.
///
/// Built once per pipeline invocation and reused verbatim on every retry.
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Free text the poem is derived from (never empty)
    original_text: String,
    /// Optional inline image
    #[builder(default)]
    image: Option<AttachedImage>,
    /// Fixed instruction loaded at startup
    system_instruction: SystemInstruction,
    /// Structured output contract
    #[builder(default)]
    response_schema: ResponseSchema,
}

impl GenerationRequest {
    /// Create a text request with the default response schema.
    pub fn new(
        original_text: impl Into<String>,
        image: Option<AttachedImage>,
        system_instruction: SystemInstruction,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            image,
            system_instruction,
            response_schema: ResponseSchema,
        }
    }

    /// Creates a new builder for GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Returns true if the request carries an image part.
    pub fn is_multimodal(&self) -> bool {
        self.image.is_some()
    }
}
