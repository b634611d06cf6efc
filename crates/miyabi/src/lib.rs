//! Miyabi: turns everyday text into validated tanka.
//!
//! This crate wires the pipeline to the Gemini backend and re-exports the
//! pieces callers need. A post-creation flow typically calls
//! [`build_pipeline`] once at startup and then
//! [`TankaPipeline::generate_tanka`] per post.
//!
//! ```no_run
//! use miyabi::{Settings, build_pipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::load(None)?;
//! let pipeline = build_pipeline(&settings)?;
//!
//! let result = pipeline.generate_tanka("春の朝、散歩に出かけた。", None).await;
//! if let Some(lines) = result.lines() {
//!     println!("{}", lines.join("\n"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod settings;

pub use miyabi_core::{
    AttachedImage, DEFAULT_IMAGE_MIME, GenerationRequest, LINE_COUNT, StructuredCandidate,
    SystemInstruction, TankaFailureKind, TankaResult,
};
pub use miyabi_error::{
    ConfigError, GenerationError, GenerationErrorKind, MiyabiError, MiyabiErrorKind, MiyabiResult,
};
pub use miyabi_interface::TankaModel;
pub use miyabi_models::{GeminiClient, GeminiConfig};
pub use miyabi_tanka::{MAX_ATTEMPTS, TankaPipeline};
pub use settings::Settings;

/// Load the system instruction and connect the Gemini backend.
///
/// Runs once per process; the returned pipeline is cheap to clone and safe
/// to share across concurrent requests.
///
/// # Errors
///
/// Fails if the prompt file is missing or empty, `GEMINI_API_KEY` is unset,
/// or the HTTP client cannot be created.
#[tracing::instrument(skip_all, fields(prompt = %settings.prompt_path().display()))]
pub fn build_pipeline(settings: &Settings) -> MiyabiResult<TankaPipeline<GeminiClient>> {
    let instruction = SystemInstruction::load(settings.prompt_path())?;
    let client = GeminiClient::new(settings.gemini_config()?)?;

    tracing::info!(model = %client.config().model(), "Tanka pipeline ready");
    Ok(TankaPipeline::new(client, instruction))
}
