//! File attachments: audio sniffing, upload, and readiness polling.

pub mod audio;
pub mod uploader;

pub use audio::{is_supported_audio, validate_audio_file, AudioFormat};
pub use uploader::AttachmentUploader;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AgentError;
use crate::provider::FileState;

/// Fallback MIME type when neither the extension nor the content tells.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Processing state of an attachment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentState {
    Processing,
    Active,
    Failed,
}

impl From<FileState> for AttachmentState {
    fn from(state: FileState) -> Self {
        match state {
            FileState::Pending | FileState::Processing => Self::Processing,
            FileState::Active => Self::Active,
            FileState::Failed => Self::Failed,
        }
    }
}

/// A file uploaded for a single multimodal call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub local_path: PathBuf,
    /// Service-assigned name, e.g. `files/abc123`.
    pub name: String,
    pub remote_uri: String,
    pub mime_type: String,
    pub state: AttachmentState,
}

/// How long to wait for an uploaded file to become active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay before each re-fetch.
    pub interval: Duration,
    /// Maximum number of re-fetches before giving up.
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 150,
        }
    }
}

/// Check that `path` names an existing regular file before anything is sent.
pub fn validate_local_file(path: &Path) -> Result<std::fs::Metadata, AgentError> {
    if path.to_string_lossy().trim().is_empty() {
        return Err(AgentError::InvalidArgument(
            "File path cannot be empty".to_string(),
        ));
    }

    let metadata = std::fs::metadata(path).map_err(|_| {
        AgentError::InvalidArgument(format!("File not found: {}", path.display()))
    })?;
    if metadata.is_dir() {
        return Err(AgentError::InvalidArgument(format!(
            "Path points to a directory: {}",
            path.display()
        )));
    }
    if !metadata.is_file() {
        return Err(AgentError::InvalidArgument(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }
    Ok(metadata)
}

/// Best-effort MIME type for a file about to be uploaded.
///
/// Extension first, then the audio sniffer, then `application/octet-stream`.
pub fn guess_mime_type(path: &Path, prefix: &[u8]) -> String {
    if let Some(mime) = mime_guess::from_path(path).first_raw() {
        return mime.to_string();
    }
    AudioFormat::detect(prefix)
        .map(|f| f.mime_type().to_string())
        .unwrap_or_else(|| OCTET_STREAM.to_string())
}
