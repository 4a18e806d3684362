//! Audio transcription and sentiment analysis on top of multimodal invoke.

use std::path::Path;

use tracing::debug;

use crate::agent::AgentOptions;
use crate::attachment::validate_audio_file;
use crate::client::GeminiClient;
use crate::error::Result;
use crate::models::GeminiModel;

use super::feeling::FeelingAnalysis;
use super::prompts;

/// Transcribes audio files, optionally with a sentiment analysis.
///
/// Each call runs in a fresh session, so calls never see each other's
/// attachments. Files are checked locally before anything is uploaded.
#[derive(Debug, Clone)]
pub struct Transcriber {
    client: GeminiClient,
    model: GeminiModel,
}

impl Transcriber {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: GeminiModel::Gemini25Flash,
        }
    }

    pub fn with_model(mut self, model: GeminiModel) -> Self {
        self.model = model;
        self
    }

    /// Plain-text transcription of `audio_path`.
    pub async fn transcribe_audio(&self, audio_path: impl AsRef<Path>) -> Result<String> {
        let path = audio_path.as_ref();
        let format = validate_audio_file(path)?;
        debug!(path = %path.display(), ?format, "Transcribing audio");

        let mut session = self.client.create_agent(
            AgentOptions::builder()
                .model(self.model.clone())
                .system_prompt(prompts::transcription::SYSTEM_PROMPT)
                .user_prompt(prompts::transcription::USER_PROMPT)
                .build(),
        );
        let response = session.invoke_multimodal(path, None).await?;
        Ok(response.content)
    }

    /// Transcription plus the speaker's dominant sentiment.
    pub async fn transcribe_and_analyze(
        &self,
        audio_path: impl AsRef<Path>,
    ) -> Result<FeelingAnalysis> {
        let path = audio_path.as_ref();
        let format = validate_audio_file(path)?;
        debug!(path = %path.display(), ?format, "Transcribing audio with sentiment analysis");

        let mut session = self.client.create_agent(
            AgentOptions::builder()
                .model(self.model.clone())
                .system_prompt(prompts::feeling_analysis::SYSTEM_PROMPT)
                .user_prompt(prompts::feeling_analysis::USER_PROMPT)
                .build(),
        );
        let schema = FeelingAnalysis::schema();
        let response = session.invoke_multimodal(path, Some(&schema)).await?;
        crate::generation::decode_structured(&response)
    }
}
