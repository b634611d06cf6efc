//! Bounded retry controller for tanka generation.

use crate::mora::{self, MoraViolation};
use crate::{assemble_request, normalize, screen};
use miyabi_core::{
    AttachedImage, GenerationRequest, StructuredCandidate, SystemInstruction, TankaFailureKind,
    TankaResult,
};
use miyabi_error::GenerationError;
use miyabi_interface::TankaModel;
use tracing::{debug, error, info, instrument, warn};

/// Maximum generation calls per invocation.
pub const MAX_ATTEMPTS: usize = 3;

/// States of one invocation. `Accepted` and `Failed` are terminal.
#[derive(Debug)]
enum PipelineState {
    Requesting,
    Moderating(StructuredCandidate),
    Validating(StructuredCandidate),
    Retrying(MoraViolation),
    Accepted(StructuredCandidate),
    Failed(TankaFailureKind),
}

fn classify(err: &GenerationError) -> TankaFailureKind {
    if err.is_quota() {
        TankaFailureKind::QuotaExceeded
    } else {
        TankaFailureKind::Upstream
    }
}

/// Turns free text (and an optional image) into a validated tanka.
///
/// Holds no per-call state, so one pipeline can serve concurrent
/// invocations. The system instruction is fixed at construction.
#[derive(Debug, Clone)]
pub struct TankaPipeline<M> {
    model: M,
    instruction: SystemInstruction,
}

impl<M: TankaModel> TankaPipeline<M> {
    /// Creates a pipeline over a generation backend.
    pub fn new(model: M, instruction: SystemInstruction) -> Self {
        Self { model, instruction }
    }

    /// The generation backend.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The system instruction sent with every request.
    pub fn instruction(&self) -> &SystemInstruction {
        &self.instruction
    }

    /// Generate a tanka for `original_text`.
    ///
    /// Never returns an error: every failure is folded into
    /// [`TankaResult::Failure`]. Upstream and moderation failures end the
    /// invocation at once; structural failures are retried until
    /// [`MAX_ATTEMPTS`] calls have been made.
    #[instrument(
        skip_all,
        fields(
            provider = self.model.provider_name(),
            model = self.model.model_name(),
            multimodal = image.is_some()
        )
    )]
    pub async fn generate_tanka(
        &self,
        original_text: &str,
        image: Option<AttachedImage>,
    ) -> TankaResult {
        let request = match assemble_request(original_text, image, &self.instruction) {
            Ok(request) => request,
            Err(kind) => {
                warn!(%kind, "Rejected request before generation");
                return TankaResult::failure(kind);
            }
        };

        self.run(&request).await
    }

    async fn run(&self, request: &GenerationRequest) -> TankaResult {
        let mut attempt = 0;
        let mut state = PipelineState::Requesting;

        loop {
            state = match state {
                PipelineState::Requesting => {
                    info!(attempt = attempt + 1, max = MAX_ATTEMPTS, "Generating tanka");
                    match self.model.generate(request).await {
                        Ok(candidate) => PipelineState::Moderating(candidate),
                        Err(e) => {
                            error!(attempt = attempt + 1, error = %e, "Generation call failed");
                            PipelineState::Failed(classify(&e))
                        }
                    }
                }
                PipelineState::Moderating(candidate) => match screen(&candidate) {
                    Ok(()) => PipelineState::Validating(candidate),
                    Err(rejection) => {
                        warn!(reason = %rejection.reason, "Disallowed content detected");
                        PipelineState::Failed(TankaFailureKind::Moderation)
                    }
                },
                PipelineState::Validating(candidate) => match mora::validate(&candidate) {
                    Ok(()) => PipelineState::Accepted(candidate),
                    Err(violation) if attempt + 1 < MAX_ATTEMPTS => {
                        PipelineState::Retrying(violation)
                    }
                    Err(violation) => {
                        warn!(
                            attempt = attempt + 1,
                            %violation,
                            "Final attempt produced a malformed tanka"
                        );
                        PipelineState::Failed(TankaFailureKind::Malformed)
                    }
                },
                PipelineState::Retrying(violation) => {
                    info!(attempt = attempt + 1, %violation, "Malformed tanka, regenerating");
                    attempt += 1;
                    PipelineState::Requesting
                }
                PipelineState::Accepted(candidate) => {
                    debug!(attempts = attempt + 1, "Tanka accepted");
                    return TankaResult::success(normalize(candidate));
                }
                PipelineState::Failed(kind) => {
                    debug!(attempts = attempt + 1, %kind, "Tanka generation failed");
                    return TankaResult::failure(kind);
                }
            };
        }
    }
}
