//! Content moderation gate.

use miyabi_core::StructuredCandidate;

/// The model flagged the input as disallowed.
///
/// The reason is for logs only and never reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("moderation flagged input: {reason}")]
pub struct ModerationRejection {
    /// Reason the model gave
    pub reason: String,
}

/// Pass a candidate through the moderation flag.
pub fn screen(candidate: &StructuredCandidate) -> Result<(), ModerationRejection> {
    if candidate.is_bad_word {
        Err(ModerationRejection {
            reason: candidate.bad_reason.clone(),
        })
    } else {
        Ok(())
    }
}
