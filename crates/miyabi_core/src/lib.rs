//! Core data types for the Miyabi tanka generation pipeline.
//!
//! These are the plain contracts passed between the request assembler, the
//! generation backend, and the validation stages. Nothing here performs I/O
//! except [`SystemInstruction::load`], which runs once at process start.

mod candidate;
mod instruction;
mod media;
mod request;
mod result;
mod schema;

pub use candidate::{LINE_COUNT, StructuredCandidate};
pub use instruction::SystemInstruction;
pub use media::{AttachedImage, DEFAULT_IMAGE_MIME};
pub use request::{GenerationRequest, GenerationRequestBuilder};
pub use result::{TankaFailureKind, TankaResult};
pub use schema::{FieldKind, ResponseSchema, SchemaField};
