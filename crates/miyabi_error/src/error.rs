//! Crate-level error aggregation.

use crate::{ConfigError, GenerationError};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum MiyabiErrorKind {
    /// Generative model error
    #[display("{_0}")]
    Generation(GenerationError),
    /// Configuration error
    #[display("{_0}")]
    Config(ConfigError),
}

/// Miyabi error with kind discrimination.
#[derive(Debug, derive_more::Display)]
#[display("Miyabi Error: {}", _0)]
pub struct MiyabiError(Box<MiyabiErrorKind>);

impl MiyabiError {
    /// Create a new error from a kind.
    pub fn new(kind: MiyabiErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MiyabiErrorKind {
        &self.0
    }
}

impl std::error::Error for MiyabiError {}

// Generic From implementation for any type that converts to MiyabiErrorKind
impl<T> From<T> for MiyabiError
where
    T: Into<MiyabiErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Miyabi operations.
pub type MiyabiResult<T> = std::result::Result<T, MiyabiError>;
