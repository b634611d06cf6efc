//! The pipeline's external contract.

use crate::LINE_COUNT;
use serde::{Serialize, Serializer};

/// Why a pipeline invocation produced no poem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TankaFailureKind {
    /// Caller supplied no text to work from
    #[display("original text was not provided")]
    MissingText,
    /// Upstream signalled rate-limit or quota exhaustion
    #[display("upstream request limit reached")]
    QuotaExceeded,
    /// Any other failure while calling the model
    #[display("upstream generation error")]
    Upstream,
    /// Model flagged the input as disallowed content
    #[display("input contains disallowed content")]
    Moderation,
    /// Every attempt produced a structurally invalid poem
    #[display("could not generate a well-formed tanka after all attempts")]
    Malformed,
}

impl TankaFailureKind {
    /// Human-readable message for the caller.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if the failure stems from the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TankaFailureKind::MissingText | TankaFailureKind::Moderation
        )
    }

    /// Suggested HTTP status for surfacing this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            TankaFailureKind::MissingText | TankaFailureKind::Moderation => 400,
            TankaFailureKind::QuotaExceeded => 429,
            TankaFailureKind::Upstream | TankaFailureKind::Malformed => 500,
        }
    }
}

/// Outcome of one pipeline invocation.
///
/// A success always holds exactly five normalized display lines; a failure
/// holds no lines at all.
///
/// # Examples
///
/// ```
/// use miyabi_core::{TankaFailureKind, TankaResult};
///
/// let result = TankaResult::failure(TankaFailureKind::MissingText);
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["success"], false);
/// assert_eq!(json["message"], "original text was not provided");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TankaResult {
    /// Accepted poem
    Success {
        /// Display lines in order
        lines: [String; LINE_COUNT],
    },
    /// No poem could be produced
    Failure {
        /// Failure classification
        kind: TankaFailureKind,
    },
}

impl TankaResult {
    /// Create a success result.
    pub fn success(lines: [String; LINE_COUNT]) -> Self {
        TankaResult::Success { lines }
    }

    /// Create a failure result.
    pub fn failure(kind: TankaFailureKind) -> Self {
        TankaResult::Failure { kind }
    }

    /// Returns true for an accepted poem.
    pub fn is_success(&self) -> bool {
        matches!(self, TankaResult::Success { .. })
    }

    /// The accepted lines, if any.
    pub fn lines(&self) -> Option<&[String; LINE_COUNT]> {
        match self {
            TankaResult::Success { lines } => Some(lines),
            TankaResult::Failure { .. } => None,
        }
    }

    /// The failure classification, if any.
    pub fn failure_kind(&self) -> Option<TankaFailureKind> {
        match self {
            TankaResult::Success { .. } => None,
            TankaResult::Failure { kind } => Some(*kind),
        }
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<String> {
        self.failure_kind().map(|kind| kind.message())
    }
}

#[derive(Serialize)]
struct TankaResultBody<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<&'a [String; LINE_COUNT]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Serialize for TankaResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TankaResultBody {
            success: self.is_success(),
            lines: self.lines(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}
