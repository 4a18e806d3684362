//! Error types for gemini-agent.

pub mod unified;

pub use unified::{ErrorCategory, RecoverySuggestion};

use thiserror::Error;

/// Primary error type for all session operations.
///
/// Every failure is surfaced to the caller of the operation that hit it.
/// An empty completion is a successful [`ChatResponse`](crate::types::ChatResponse)
/// with empty content, never one of these.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Attachment {name} failed: {reason}")]
    AttachmentFailed { name: String, reason: String },

    #[error("Attachment {name} still processing after {attempts} polls")]
    AttachmentTimeout { name: String, attempts: u32 },

    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("Remote call failed (status {status}): {message}")]
    RemoteCall { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Structured output did not match schema: {0}")]
    SchemaDecode(#[source] serde_json::Error),
}

impl AgentError {
    /// Create a remote-call error from a status and message.
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteCall {
            status,
            message: message.into(),
        }
    }

    /// Whether the failure happened at the remote generation/ingestion boundary.
    pub fn is_remote_call_failure(&self) -> bool {
        matches!(
            self,
            Self::RemoteCall { .. } | Self::Network(_) | Self::Serialization(_)
        )
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::InvalidArgument(_) => ErrorCategory::InvalidArgument,
            Self::AttachmentFailed { .. } => ErrorCategory::Attachment,
            Self::AttachmentTimeout { .. } => ErrorCategory::Timeout,
            Self::Cancelled(_) => ErrorCategory::Cancelled,
            Self::Network(e) if e.is_timeout() => ErrorCategory::Timeout,
            Self::Network(_) => ErrorCategory::Network,
            Self::Serialization(_) | Self::SchemaDecode(_) => ErrorCategory::Serialization,
            Self::RemoteCall { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::Io(_) => ErrorCategory::Unknown,
        }
    }

    /// Whether this error is potentially retryable.
    ///
    /// Informational only; nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit
                | ErrorCategory::Network
                | ErrorCategory::Timeout
                | ErrorCategory::Server
        )
    }

    /// Suggest recovery actions.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self.category() {
            ErrorCategory::Authentication => RecoverySuggestion::CheckCredentials,
            ErrorCategory::RateLimit
            | ErrorCategory::Network
            | ErrorCategory::Server => RecoverySuggestion::RetryWithBackoff,
            ErrorCategory::Timeout => RecoverySuggestion::IncreaseTimeout,
            ErrorCategory::Configuration => RecoverySuggestion::CheckConfiguration,
            ErrorCategory::InvalidArgument | ErrorCategory::Attachment => {
                RecoverySuggestion::CheckInput
            }
            ErrorCategory::Serialization => RecoverySuggestion::CheckSchema,
            _ => RecoverySuggestion::ContactSupport,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AgentError>;
