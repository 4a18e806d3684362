//! Request configuration sent with every generation call.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::schema::Schema;

/// Default system instruction when a session has none.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a very helpful assistant.";

/// Reasoning effort level for models with a thinking-level control.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString, Default,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReasoningEffort {
    Minimal,
    #[default]
    Low,
    Medium,
    High,
}

/// Configuration object for one generation call.
///
/// Built fresh per call by [`crate::generation::config::build_config`]; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub system_instruction: String,
    pub temperature: f64,
    /// Present only for models that accept a thinking level.
    pub reasoning_level: Option<ReasoningEffort>,
    pub response_schema: Option<Schema>,
    pub search_tool: bool,
}
