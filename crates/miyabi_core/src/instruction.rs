//! The fixed system instruction sent with every generation request.

use miyabi_error::ConfigError;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Immutable system instruction shared by every pipeline invocation.
///
/// Loaded once at startup and cloned cheaply into each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInstruction(Arc<str>);

impl SystemInstruction {
    /// Wrap an instruction that is already in memory.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    /// Read the instruction from a prompt file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or contains only
    /// whitespace.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read system instruction {}: {}",
                path.display(),
                e
            ))
        })?;

        if text.trim().is_empty() {
            return Err(ConfigError::new(format!(
                "System instruction {} is empty",
                path.display()
            )));
        }

        debug!(bytes = text.len(), "Loaded system instruction");
        Ok(Self(text.into()))
    }

    /// The instruction text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SystemInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "あなたは歌人です。").expect("write prompt");

        let instruction = SystemInstruction::load(file.path()).expect("load prompt");
        assert_eq!(instruction.as_str(), "あなたは歌人です。");
    }

    #[test]
    fn test_load_rejects_blank_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "   ").expect("write prompt");

        let err = SystemInstruction::load(file.path()).unwrap_err();
        assert!(err.message.contains("empty"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SystemInstruction::load("/nonexistent/prompt.txt").unwrap_err();
        assert!(err.message.contains("Failed to read"));
    }

    #[test]
    fn test_clones_share_text() {
        let a = SystemInstruction::new("prompt");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.to_string(), "prompt");
    }
}
