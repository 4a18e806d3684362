//! Structured output: decode typed objects from schema-constrained responses.

use serde::de::DeserializeOwned;

use crate::error::AgentError;
use crate::types::ChatResponse;

/// A decoded structured response alongside the raw result it came from.
#[derive(Debug, Clone)]
pub struct StructuredResponse<T> {
    pub object: T,
    pub raw: ChatResponse,
}

/// Decode the JSON document in `response.content` into `T`.
///
/// Models occasionally wrap JSON in a markdown fence even when a response
/// schema is set; the fence is stripped before decoding.
pub fn decode_structured<T: DeserializeOwned>(response: &ChatResponse) -> Result<T, AgentError> {
    let json_text = strip_code_fences(&response.content);
    serde_json::from_str(json_text).map_err(AgentError::SchemaDecode)
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
