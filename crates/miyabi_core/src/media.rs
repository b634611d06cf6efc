//! Inline image attachments.

use serde::{Deserialize, Serialize};

/// Media type assumed when an upload does not declare one.
///
/// Uploaded images are re-encoded as JPEG before they reach the pipeline.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Binary image sent alongside the text as a multimodal part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedImage {
    /// MIME type, e.g. "image/jpeg" or "image/png"
    pub mime: String,
    /// Raw image bytes
    pub data: Vec<u8>,
}

impl AttachedImage {
    /// Create an attachment with an explicit media type.
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Create an attachment, falling back to JPEG when the type is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use miyabi_core::AttachedImage;
    ///
    /// let image = AttachedImage::with_optional_mime(None, vec![0xff, 0xd8]);
    /// assert_eq!(image.mime, "image/jpeg");
    /// ```
    pub fn with_optional_mime(mime: Option<String>, data: Vec<u8>) -> Self {
        let mime = mime
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());
        Self { mime, data }
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the payload carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
