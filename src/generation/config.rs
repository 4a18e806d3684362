//! Capability-aware request configuration.

use crate::agent::AgentOptions;
use crate::attachment::{Attachment, AttachmentState};
use crate::error::AgentError;
use crate::types::{GenerationConfig, Schema, DEFAULT_SYSTEM_PROMPT};

/// Per-call extras on top of the session parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestOptions<'a> {
    pub with_search_tool: bool,
    pub response_schema: Option<&'a Schema>,
    pub attachment: Option<&'a Attachment>,
}

impl<'a> RequestOptions<'a> {
    pub fn search() -> Self {
        Self {
            with_search_tool: true,
            ..Self::default()
        }
    }

    pub fn structured(schema: &'a Schema) -> Self {
        Self {
            response_schema: Some(schema),
            ..Self::default()
        }
    }
}

/// Build the configuration for one generation call.
///
/// The thinking level is attached only when the model accepts one. Search
/// grounding and a response schema cannot be combined.
pub fn build_config(
    options: &AgentOptions,
    request: RequestOptions<'_>,
) -> Result<GenerationConfig, AgentError> {
    if request.with_search_tool && request.response_schema.is_some() {
        return Err(AgentError::InvalidArgument(
            "Web search and structured output cannot be combined in one call".to_string(),
        ));
    }
    if let Some(attachment) = request.attachment {
        if attachment.state != AttachmentState::Active {
            return Err(AgentError::InvalidArgument(format!(
                "Attachment {} is not active",
                attachment.name
            )));
        }
    }

    // Blank prompts fall back; anything else is sent verbatim.
    let system_instruction = match options.system_prompt.as_deref() {
        Some(prompt) if !prompt.trim().is_empty() => prompt.to_string(),
        _ => DEFAULT_SYSTEM_PROMPT.to_string(),
    };

    let reasoning_level = options
        .model
        .supports_reasoning_control()
        .then_some(options.reasoning_effort);

    Ok(GenerationConfig {
        system_instruction,
        temperature: options.temperature,
        reasoning_level,
        response_schema: request.response_schema.cloned(),
        search_tool: request.with_search_tool,
    })
}
