//! Agent session: conversation state plus the invoke operations.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use crate::attachment::{validate_local_file, Attachment, AttachmentUploader, PollPolicy};
use crate::error::{AgentError, Result};
use crate::generation::{build_config, decode_structured, normalize, RequestOptions, StructuredResponse};
use crate::models::GeminiModel;
use crate::provider::{FileService, GenerateContentRequest, GenerationService};
use crate::types::{ChatMessage, ChatResponse, GenerationConfig, Schema, Turn, Usage};

use super::conversation::Conversation;
use super::options::AgentOptions;
use super::request::ChatRequest;

/// A stateful chat session against one generation service.
///
/// Every invoke appends to the conversation before the remote call and the
/// appended turns stay even if the call fails. Model replies are not recorded;
/// callers that want them in context feed them back through
/// [`update_memory`](Self::update_memory).
///
/// All operations take `&mut self`, so one session runs one call at a time.
/// Share a session across tasks behind a `tokio::sync::Mutex`.
pub struct AgentSession {
    id: Uuid,
    options: AgentOptions,
    conversation: Conversation,
    generator: Arc<dyn GenerationService>,
    uploader: AttachmentUploader,
    total_usage: Usage,
}

impl AgentSession {
    pub fn new(
        options: AgentOptions,
        generator: Arc<dyn GenerationService>,
        files: Arc<dyn FileService>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            options,
            conversation: Conversation::new(),
            generator,
            uploader: AttachmentUploader::new(files),
            total_usage: Usage::default(),
        }
    }

    /// Replace the attachment polling policy.
    pub fn with_poll_policy(mut self, policy: PollPolicy) -> Self {
        self.uploader = self.uploader.with_policy(policy);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn options(&self) -> &AgentOptions {
        &self.options
    }

    /// The prompt the next invoke will send.
    pub fn prompt(&self) -> &str {
        &self.options.user_prompt
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Usage summed over every successful call of this session.
    pub fn total_usage(&self) -> Usage {
        self.total_usage
    }

    /// Replace the current prompt. The conversation is untouched.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.options.user_prompt = prompt.into();
    }

    /// Append externally supplied turns to the conversation.
    ///
    /// Only `"assistant"` becomes a model turn; every other role label is
    /// treated as user.
    pub fn update_memory(&mut self, messages: &[ChatMessage]) {
        if messages.is_empty() {
            return;
        }
        self.conversation.extend_from_messages(messages);
        debug!(session = %self.id, added = messages.len(), turns = self.conversation.len(), "Updated memory");
    }

    /// Send the current prompt with the full conversation.
    pub async fn invoke(&mut self) -> Result<ChatResponse> {
        self.invoke_text(RequestOptions::default()).await
    }

    /// Like [`invoke`](Self::invoke), with Google Search grounding enabled.
    pub async fn invoke_with_web_search(&mut self) -> Result<ChatResponse> {
        self.invoke_text(RequestOptions::search()).await
    }

    /// Like [`invoke`](Self::invoke), constraining the reply to `schema`.
    ///
    /// The returned content is a JSON document conforming to the schema.
    pub async fn invoke_with_structured_output(&mut self, schema: &Schema) -> Result<ChatResponse> {
        self.invoke_text(RequestOptions::structured(schema)).await
    }

    /// Structured invoke that also decodes the reply into `T`.
    pub async fn invoke_structured<T: DeserializeOwned>(
        &mut self,
        schema: &Schema,
    ) -> Result<StructuredResponse<T>> {
        let raw = self.invoke_with_structured_output(schema).await?;
        let object = decode_structured(&raw)?;
        Ok(StructuredResponse { object, raw })
    }

    /// Upload `file_path`, then send it followed by the current prompt.
    pub async fn invoke_multimodal(
        &mut self,
        file_path: impl AsRef<Path>,
        schema: Option<&Schema>,
    ) -> Result<ChatResponse> {
        self.invoke_multimodal_with_cancellation(file_path, schema, &CancellationToken::new())
            .await
    }

    /// Multimodal invoke that stops waiting once `cancel` fires.
    ///
    /// Cancelling during upload leaves the conversation as it was. Cancelling
    /// during the generation call keeps the already appended turns.
    pub async fn invoke_multimodal_with_cancellation(
        &mut self,
        file_path: impl AsRef<Path>,
        schema: Option<&Schema>,
        cancel: &CancellationToken,
    ) -> Result<ChatResponse> {
        let request = RequestOptions {
            response_schema: schema,
            ..RequestOptions::default()
        };
        let (attachment, config) = self
            .prepare_attachment(&self.options, file_path.as_ref(), request, cancel)
            .await?;
        let model = self.options.model.clone();
        self.send_with_attachment(&attachment, model, config, cancel)
            .await
    }

    /// Apply a one-shot [`ChatRequest`].
    ///
    /// History seeds memory and the request prompt becomes the current
    /// prompt. Model, system prompt, temperature and effort overrides hold for
    /// this call only. A schema routes to structured output and a file to the
    /// multimodal path. Invalid combinations, bad paths and failed uploads are
    /// reported before the conversation is touched.
    pub async fn invoke_request(&mut self, request: ChatRequest) -> Result<ChatResponse> {
        let ChatRequest {
            user_prompt,
            history,
            model,
            system_prompt,
            temperature,
            reasoning_effort,
            response_schema,
            web_search,
            file,
        } = request;

        let mut effective = self.options.clone();
        if let Some(model) = model {
            effective.model = model;
        }
        if system_prompt.is_some() {
            effective.system_prompt = system_prompt;
        }
        if let Some(temperature) = temperature {
            effective.temperature = temperature;
        }
        if let Some(effort) = reasoning_effort {
            effective.reasoning_effort = effort;
        }

        let request = RequestOptions {
            with_search_tool: web_search,
            response_schema: response_schema.as_ref(),
            attachment: None,
        };

        match file {
            Some(path) => {
                let cancel = CancellationToken::new();
                let (attachment, config) = self
                    .prepare_attachment(&effective, &path, request, &cancel)
                    .await?;
                self.update_memory(&history);
                self.set_prompt(user_prompt);
                self.send_with_attachment(&attachment, effective.model, config, &cancel)
                    .await
            }
            None => {
                let config = build_config(&effective, request)?;
                self.update_memory(&history);
                self.set_prompt(user_prompt);
                self.conversation.push(Turn::user(self.options.user_prompt.clone()));
                self.dispatch(effective.model, config).await
            }
        }
    }

    /// Validate the path, upload the file and build the call configuration.
    /// The session is not modified.
    async fn prepare_attachment(
        &self,
        options: &AgentOptions,
        path: &Path,
        request: RequestOptions<'_>,
        cancel: &CancellationToken,
    ) -> Result<(Attachment, GenerationConfig)> {
        if path.as_os_str().is_empty() {
            return Err(AgentError::InvalidArgument(
                "A file path is required for multimodal invoke; use invoke for text only".to_string(),
            ));
        }
        validate_local_file(path)?;
        // Rejects search with schema before spending an upload.
        build_config(options, request)?;

        let attachment = self.uploader.upload_with_cancellation(path, cancel).await?;
        let config = build_config(
            options,
            RequestOptions {
                attachment: Some(&attachment),
                ..request
            },
        )?;
        Ok((attachment, config))
    }

    async fn send_with_attachment(
        &mut self,
        attachment: &Attachment,
        model: GeminiModel,
        config: GenerationConfig,
        cancel: &CancellationToken,
    ) -> Result<ChatResponse> {
        self.conversation
            .push(Turn::file(&attachment.remote_uri, &attachment.mime_type));
        self.conversation.push(Turn::user(self.options.user_prompt.clone()));

        tokio::select! {
            _ = cancel.cancelled() => Err(AgentError::Cancelled(format!(
                "generation call with attachment {}",
                attachment.name
            ))),
            response = self.dispatch(model, config) => response,
        }
    }

    async fn invoke_text(&mut self, request: RequestOptions<'_>) -> Result<ChatResponse> {
        let config = build_config(&self.options, request)?;
        self.conversation.push(Turn::user(self.options.user_prompt.clone()));
        let model = self.options.model.clone();
        self.dispatch(model, config).await
    }

    async fn dispatch(&mut self, model: GeminiModel, config: GenerationConfig) -> Result<ChatResponse> {
        let request = GenerateContentRequest {
            model,
            contents: self.conversation.turns().to_vec(),
            config,
        };
        debug!(
            session = %self.id,
            model = %request.model,
            turns = request.contents.len(),
            search = request.config.search_tool,
            structured = request.config.response_schema.is_some(),
            "Sending generation request"
        );

        let raw = self.generator.generate_content(&request).await?;
        let response = normalize(&raw);
        self.total_usage.merge(&response.usage());

        debug!(
            session = %self.id,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            empty = response.is_empty(),
            "Received generation response"
        );
        Ok(response)
    }
}

impl std::fmt::Debug for AgentSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentSession")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("turns", &self.conversation.len())
            .field("total_usage", &self.total_usage)
            .finish_non_exhaustive()
    }
}
