//! Wire types for the Gemini `generateContent` REST method.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Fixed system instruction
    pub system_instruction: Content,
    /// User turn(s)
    pub contents: Vec<Content>,
    /// Structured output settings
    pub generation_config: GenerationConfig,
}

/// A turn of content made of one or more parts.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// "user" for user turns, omitted for the system instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Parts in order
    pub parts: Vec<Part>,
}

/// One part of a multimodal request.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text
    Text {
        /// The text
        text: String,
    },
    /// Inline binary payload
    #[serde(rename_all = "camelCase")]
    InlineData {
        /// Media type and base64 data
        inline_data: InlineData,
    },
}

/// Base64-encoded inline media.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// Media type, e.g. "image/jpeg"
    pub mime_type: String,
    /// Standard base64 of the raw bytes
    pub data: String,
}

/// Generation settings that force schema-conformant JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always "application/json"
    pub response_mime_type: String,
    /// OpenAPI-subset schema the answer must satisfy
    pub response_schema: serde_json::Value,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate answers; absent when the prompt was blocked
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Feedback about the prompt
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// A single candidate answer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<CandidateContent>,
    /// Why the model stopped generating
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Content of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Response parts
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// One part of a candidate's content.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    /// Text payload, if this is a text part
    #[serde(default)]
    pub text: Option<String>,
}

/// Feedback about the prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked
    #[serde(default)]
    pub block_reason: Option<String>,
}
