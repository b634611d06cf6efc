//! Generate command handler.

use crate::{Settings, build_pipeline};
use miyabi_core::{AttachedImage, TankaResult};
use miyabi_error::{ConfigError, MiyabiResult};
use std::path::Path;

/// Guess an image media type from its file extension.
pub fn guess_image_mime(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => return None,
    };
    Some(mime.to_string())
}

/// Handles the generate command.
///
/// # Arguments
///
/// * `settings` - Loaded service settings
/// * `text` - Text the poem is derived from
/// * `image` - Optional image file to attach
/// * `mime` - Explicit media type, overriding the extension guess
#[tracing::instrument(skip_all, fields(has_image = image.is_some()))]
pub async fn handle_generate_command(
    settings: &Settings,
    text: &str,
    image: Option<&Path>,
    mime: Option<String>,
) -> MiyabiResult<TankaResult> {
    let attachment = match image {
        Some(path) => {
            let data = std::fs::read(path).map_err(|e| {
                ConfigError::new(format!("Failed to read image {}: {}", path.display(), e))
            })?;
            let mime = mime.or_else(|| guess_image_mime(path));
            tracing::debug!(bytes = data.len(), ?mime, "Attaching image");
            Some(AttachedImage::with_optional_mime(mime, data))
        }
        None => None,
    };

    let pipeline = build_pipeline(settings)?;
    Ok(pipeline.generate_tanka(text, attachment).await)
}
