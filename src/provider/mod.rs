//! Service traits for the remote generation and file-ingestion APIs.
//!
//! The session only talks to these traits. [`gemini::GeminiProvider`] is the
//! HTTP implementation of both; tests substitute in-memory fakes.

pub mod gemini;
pub mod http;

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AgentError;
use crate::models::GeminiModel;
use crate::types::{GenerationConfig, Turn};

/// A request sent to the generation service.
#[derive(Debug, Clone)]
pub struct GenerateContentRequest {
    pub model: GeminiModel,
    pub contents: Vec<Turn>,
    pub config: GenerationConfig,
}

/// Raw generation response. Every level is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CandidateContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A response part. Non-text parts (function calls, inline data) deserialize
/// with `text == None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_token_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates_token_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_token_count: Option<u32>,
}

/// Processing state of an uploaded file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileState {
    #[default]
    #[serde(alias = "STATE_UNSPECIFIED")]
    Pending,
    Processing,
    Active,
    Failed,
}

impl FileState {
    /// Whether the service is still working on the file.
    pub fn is_in_progress(self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }
}

/// Handle returned by the file-ingestion service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub state: FileState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ServiceStatus>,
}

/// Error status attached to a failed file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Remote text generation.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate content for the given turns and configuration.
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AgentError>;
}

/// Remote file ingestion.
#[async_trait]
pub trait FileService: Send + Sync {
    /// Submit a local file and return the initial handle.
    async fn upload(&self, path: &Path, display_name: &str) -> Result<FileHandle, AgentError>;

    /// Re-fetch a handle by its service-assigned name.
    async fn get(&self, name: &str) -> Result<FileHandle, AgentError>;
}
