//! Builds the outbound request from caller input.

use miyabi_core::{AttachedImage, GenerationRequest, SystemInstruction, TankaFailureKind};

/// Assemble the request sent on every attempt of one invocation.
///
/// Text that is empty or only whitespace is a precondition failure; no
/// request is produced and the model is never contacted.
///
/// # Examples
///
/// ```
/// use miyabi_core::{SystemInstruction, TankaFailureKind};
/// use miyabi_tanka::assemble_request;
///
/// let instruction = SystemInstruction::new("短歌を詠む");
/// let err = assemble_request("", None, &instruction).unwrap_err();
/// assert_eq!(err, TankaFailureKind::MissingText);
/// ```
pub fn assemble_request(
    original_text: &str,
    image: Option<AttachedImage>,
    instruction: &SystemInstruction,
) -> Result<GenerationRequest, TankaFailureKind> {
    if original_text.trim().is_empty() {
        return Err(TankaFailureKind::MissingText);
    }

    Ok(GenerationRequest::new(
        original_text,
        image,
        instruction.clone(),
    ))
}
