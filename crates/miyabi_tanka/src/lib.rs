//! Tanka generation and validation pipeline.
//!
//! A single invocation runs assemble, generate, moderate, validate, then
//! either normalizes the accepted poem or asks the model again, up to
//! [`MAX_ATTEMPTS`] calls. Every path ends in exactly one
//! [`miyabi_core::TankaResult`].

mod assemble;
mod moderation;
pub mod mora;
mod normalize;
mod pipeline;

pub use assemble::assemble_request;
pub use moderation::{ModerationRejection, screen};
pub use mora::{EXPECTED_MORAE, MORA_TOLERANCE, MoraViolation, count_morae};
pub use normalize::{normalize, normalize_line};
pub use pipeline::{MAX_ATTEMPTS, TankaPipeline};
