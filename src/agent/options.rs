//! Per-session parameters.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::models::GeminiModel;
use crate::types::ReasoningEffort;

/// Parameters fixed when a session is created.
///
/// ```
/// use gemini_agent::agent::AgentOptions;
/// use gemini_agent::models::GeminiModel;
///
/// let options = AgentOptions::builder()
///     .model(GeminiModel::Gemini25Flash)
///     .system_prompt("You transcribe audio.")
///     .user_prompt("Transcribe the attached audio.")
///     .build();
/// assert_eq!(options.temperature, 0.0);
/// ```
#[derive(Debug, Clone, Builder, Serialize, Deserialize, Default, PartialEq)]
pub struct AgentOptions {
    #[builder(default)]
    #[serde(default)]
    pub model: GeminiModel,
    /// System instruction; empty or absent means the default helpful-assistant prompt.
    #[builder(into)]
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// Prompt used by the next invoke call.
    #[builder(default, into)]
    #[serde(default)]
    pub user_prompt: String,
    #[builder(default)]
    #[serde(default)]
    pub temperature: f64,
    #[builder(default)]
    #[serde(default)]
    pub reasoning_effort: ReasoningEffort,
}
