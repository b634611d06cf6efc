//! Conversions between pipeline types and the Gemini wire format.

use crate::gemini::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use miyabi_core::{FieldKind, GenerationRequest, ResponseSchema, StructuredCandidate};
use miyabi_error::{GenerationError, GenerationErrorKind};
use serde_json::{Map, Value, json};

/// Translate the response schema into Gemini's OpenAPI-subset dialect.
pub fn to_gemini_schema(schema: &ResponseSchema) -> Value {
    let properties: Map<String, Value> = schema
        .fields()
        .iter()
        .map(|field| {
            let kind = match field.kind {
                FieldKind::Boolean => "BOOLEAN",
                FieldKind::String => "STRING",
            };
            (
                field.name.to_string(),
                json!({
                    "type": kind,
                    "description": field.description,
                    "nullable": false,
                }),
            )
        })
        .collect();
    let required: Vec<&str> = schema.required().collect();

    json!({
        "description": ResponseSchema::DESCRIPTION,
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

/// Build the `generateContent` body for a request.
///
/// With an image the user turn is two parts, image first; without one it is
/// the text alone.
pub fn to_gemini_request(req: &GenerationRequest) -> GenerateContentRequest {
    let mut parts = Vec::with_capacity(2);

    if let Some(image) = req.image() {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime.clone(),
                data: STANDARD.encode(&image.data),
            },
        });
    }
    parts.push(Part::Text {
        text: req.original_text().clone(),
    });

    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part::Text {
                text: req.system_instruction().as_str().to_string(),
            }],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: to_gemini_schema(req.response_schema()),
        },
    }
}

/// Extract the structured candidate from a `generateContent` response.
///
/// # Errors
///
/// `EmptyResponse` if no candidate text came back, `MalformedResponse` if
/// the text is not an object satisfying the response schema.
pub fn from_gemini_response(
    response: &GenerateContentResponse,
) -> Result<StructuredCandidate, GenerationError> {
    let Some(candidate) = response.candidates.first() else {
        let reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
            .unwrap_or_else(|| "no candidates".to_string());
        return Err(GenerationError::new(GenerationErrorKind::EmptyResponse(
            reason,
        )));
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        let reason = candidate
            .finish_reason
            .clone()
            .unwrap_or_else(|| "candidate has no text".to_string());
        return Err(GenerationError::new(GenerationErrorKind::EmptyResponse(
            reason,
        )));
    }

    serde_json::from_str(&text).map_err(|e| {
        GenerationError::new(GenerationErrorKind::MalformedResponse(e.to_string()))
    })
}
