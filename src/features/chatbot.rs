//! Retrieval-style chatbot: seed memory with context, then ask.

use crate::agent::{AgentOptions, AgentSession};
use crate::client::GeminiClient;
use crate::error::Result;
use crate::models::GeminiModel;
use crate::types::{ChatMessage, ChatResponse};

/// A long-lived chat session fed with externally retrieved context.
///
/// Retrieved messages (from a database, a cache, a vector store) are appended
/// to the session memory before each question.
#[derive(Debug)]
pub struct Chatbot {
    session: AgentSession,
}

impl Chatbot {
    pub fn new(client: &GeminiClient) -> Self {
        Self::with_options(
            client,
            AgentOptions::builder()
                .model(GeminiModel::Gemini25Flash)
                .build(),
        )
    }

    pub fn with_options(client: &GeminiClient, options: AgentOptions) -> Self {
        Self {
            session: client.create_agent(options),
        }
    }

    /// Append `retrieved_context`, then send `message` as the new prompt.
    pub async fn chat(
        &mut self,
        message: impl Into<String>,
        retrieved_context: &[ChatMessage],
    ) -> Result<ChatResponse> {
        self.session.update_memory(retrieved_context);
        self.session.set_prompt(message);
        self.session.invoke().await
    }

    pub fn session(&self) -> &AgentSession {
        &self.session
    }
}
