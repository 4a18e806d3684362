//! Convenience re-exports for common use.

pub use crate::agent::{AgentOptions, AgentSession, ChatRequest};
pub use crate::attachment::PollPolicy;
pub use crate::client::GeminiClient;
pub use crate::config::GeminiConfig;
pub use crate::error::{AgentError, Result};
pub use crate::generation::StructuredResponse;
pub use crate::models::GeminiModel;
pub use crate::provider::{FileService, GenerationService};
pub use crate::types::{
    ChatMessage, ChatResponse, ReasoningEffort, Role, Schema, Turn, Usage,
};
