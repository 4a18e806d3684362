//! One-shot chat requests applied to a session.

use std::path::PathBuf;

use bon::Builder;

use crate::models::GeminiModel;
use crate::types::{ChatMessage, ReasoningEffort, Schema};

/// A self-contained chat call: prompt, optional history, optional overrides.
///
/// Overrides apply to this call only; the session's own options are left as
/// they were. History is appended to the session log before the prompt.
#[derive(Debug, Clone, Builder, Default)]
pub struct ChatRequest {
    #[builder(into)]
    pub user_prompt: String,
    #[builder(default)]
    pub history: Vec<ChatMessage>,
    pub model: Option<GeminiModel>,
    #[builder(into)]
    pub system_prompt: Option<String>,
    pub temperature: Option<f64>,
    pub reasoning_effort: Option<ReasoningEffort>,
    pub response_schema: Option<Schema>,
    #[builder(default)]
    pub web_search: bool,
    /// Local file to upload and send ahead of the prompt.
    #[builder(into)]
    pub file: Option<PathBuf>,
}
