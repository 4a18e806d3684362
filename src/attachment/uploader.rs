//! Upload a file and poll until the service has processed it.

use std::path::Path;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::AgentError;
use crate::provider::{FileHandle, FileService, FileState};

use super::{Attachment, AttachmentState, PollPolicy};

/// Drives the upload-then-poll protocol for one file at a time.
#[derive(Clone)]
pub struct AttachmentUploader {
    files: Arc<dyn FileService>,
    policy: PollPolicy,
}

impl AttachmentUploader {
    pub fn new(files: Arc<dyn FileService>) -> Self {
        Self {
            files,
            policy: PollPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Upload `path` and wait until it is active.
    pub async fn upload(&self, path: &Path) -> Result<Attachment, AgentError> {
        self.upload_with_cancellation(path, &CancellationToken::new())
            .await
    }

    /// Like [`upload`](Self::upload), but stops waiting as soon as `cancel` fires.
    pub async fn upload_with_cancellation(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<Attachment, AgentError> {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());

        let mut handle = tokio::select! {
            _ = cancel.cancelled() => {
                return Err(AgentError::Cancelled(format!("upload of {display_name}")));
            }
            handle = self.files.upload(path, &display_name) => handle?,
        };

        let mut attempts = 0u32;
        while handle.state.is_in_progress() {
            if attempts >= self.policy.max_attempts {
                return Err(AgentError::AttachmentTimeout {
                    name: handle.name,
                    attempts,
                });
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    return Err(AgentError::Cancelled(format!("polling of {}", handle.name)));
                }
                _ = tokio::time::sleep(self.policy.interval) => {}
            }

            attempts += 1;
            handle = tokio::select! {
                _ = cancel.cancelled() => {
                    return Err(AgentError::Cancelled(format!("polling of {}", handle.name)));
                }
                refreshed = self.files.get(&handle.name) => refreshed?,
            };
            debug!(name = %handle.name, attempt = attempts, state = ?handle.state, "Polled attachment");
        }

        if handle.state == FileState::Failed {
            let reason = handle
                .error
                .as_ref()
                .and_then(|e| e.message.clone())
                .unwrap_or_else(|| "file processing failed".to_string());
            warn!(name = %handle.name, %reason, "Attachment processing failed");
            return Err(AgentError::AttachmentFailed {
                name: handle.name,
                reason,
            });
        }

        into_attachment(path, handle)
    }
}

fn into_attachment(path: &Path, handle: FileHandle) -> Result<Attachment, AgentError> {
    let remote_uri = handle.uri.ok_or_else(|| AgentError::AttachmentFailed {
        name: handle.name.clone(),
        reason: "active file has no URI".to_string(),
    })?;
    let mime_type = handle
        .mime_type
        .unwrap_or_else(|| super::guess_mime_type(path, &[]));

    Ok(Attachment {
        local_path: path.to_path_buf(),
        name: handle.name,
        remote_uri,
        mime_type,
        state: AttachmentState::from(handle.state),
    })
}
