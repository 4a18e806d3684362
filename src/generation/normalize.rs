//! Map raw generation responses onto [`ChatResponse`].

use crate::provider::{GenerateContentResponse, UsageMetadata};
use crate::types::{ChatResponse, Usage};

/// Normalize a raw response. Never fails.
///
/// Only the first candidate and its first part are read; one completion is
/// requested per call. Token counters are read independently of content, so
/// an empty `content` may still carry usage.
pub fn normalize(raw: &GenerateContentResponse) -> ChatResponse {
    let usage = usage_of(raw.usage_metadata.as_ref());

    let text = raw
        .candidates
        .as_deref()
        .and_then(|items| items.first())
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.as_deref())
        .and_then(|items| items.first())
        .and_then(|part| part.text.as_deref())
        .unwrap_or_default();

    ChatResponse::new(text, usage)
}

fn usage_of(metadata: Option<&UsageMetadata>) -> Usage {
    metadata
        .map(|u| Usage {
            input_tokens: u.prompt_token_count.unwrap_or(0),
            output_tokens: u.candidates_token_count.unwrap_or(0),
            total_tokens: u.total_token_count.unwrap_or(0),
        })
        .unwrap_or_default()
}
