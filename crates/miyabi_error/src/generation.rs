//! Errors raised while talking to the generative model.

/// Failure conditions of a single generation call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key not found in the environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// HTTP client could not be constructed
    #[display("Failed to create HTTP client: {_0}")]
    ClientCreation(String),
    /// Upstream signalled rate-limit or quota exhaustion
    #[display("Request limit reached: {_0}")]
    QuotaExceeded(String),
    /// Upstream answered with a non-success status
    #[display("HTTP {status_code} error: {message}")]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// The request never produced a response (connect, timeout, TLS)
    #[display("Request failed: {_0}")]
    Request(String),
    /// Response did not match the structured output contract
    #[display("Malformed structured response: {_0}")]
    MalformedResponse(String),
    /// Response carried no candidate text
    #[display("Empty response: {_0}")]
    EmptyResponse(String),
}

impl GenerationErrorKind {
    /// Classify an HTTP failure.
    ///
    /// Status 429 and bodies naming `RESOURCE_EXHAUSTED` are quota
    /// signals; everything else is a plain HTTP error.
    pub fn from_status(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status_code == 429 || message.contains("RESOURCE_EXHAUSTED") {
            GenerationErrorKind::QuotaExceeded(message)
        } else {
            GenerationErrorKind::Http {
                status_code,
                message,
            }
        }
    }

    /// Returns true for rate-limit and quota failures.
    pub fn is_quota(&self) -> bool {
        matches!(self, GenerationErrorKind::QuotaExceeded(_))
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use miyabi_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// assert!(!err.is_quota());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Returns true if the upstream reported quota exhaustion.
    pub fn is_quota(&self) -> bool {
        self.kind.is_quota()
    }
}
