//! Google Gemini `generateContent` backend.
//!
//! Sends the system instruction, the user's text (and optional inline image)
//! and a response schema, and parses the model's JSON answer into a
//! [`miyabi_core::StructuredCandidate`].

mod client;
mod config;
pub mod conversions;
pub mod dto;

pub use client::GeminiClient;
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GeminiConfig, GeminiConfigBuilder,
};
