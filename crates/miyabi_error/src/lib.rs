//! Error types for the Miyabi tanka generation service.
//!
//! Every error records the source location where it was constructed so that
//! log lines point straight at the failing call site.

mod config;
mod error;
mod generation;

pub use config::ConfigError;
pub use error::{MiyabiError, MiyabiErrorKind, MiyabiResult};
pub use generation::{GenerationError, GenerationErrorKind};
