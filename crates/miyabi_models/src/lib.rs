//! Generative model backends for the Miyabi tanka pipeline.
//!
//! Each backend implements [`miyabi_interface::TankaModel`] and is gated
//! behind a cargo feature.

#[cfg(feature = "gemini")]
pub mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GeminiClient, GeminiConfig,
    GeminiConfigBuilder,
};
