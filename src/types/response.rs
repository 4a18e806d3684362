//! The uniform result returned by every session operation.

use serde::{Deserialize, Serialize};

use super::usage::Usage;

/// Normalized outcome of a successful generation call.
///
/// `content` is prose, or a raw JSON document when a response schema was
/// requested. Empty content with non-zero usage is legal, e.g. when the
/// candidate carried only a safety block.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ChatResponse {
    pub content: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

impl ChatResponse {
    pub fn new(content: impl Into<String>, usage: Usage) -> Self {
        Self {
            content: content.into(),
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
            total_tokens: usage.total_tokens,
        }
    }

    /// Token counters of this response.
    pub fn usage(&self) -> Usage {
        Usage {
            input_tokens: self.input_tokens,
            output_tokens: self.output_tokens,
            total_tokens: self.total_tokens,
        }
    }

    /// Whether the model produced no text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
