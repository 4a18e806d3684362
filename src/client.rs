//! Entry point that hands out sessions bound to one service connection.

use std::sync::Arc;

use crate::agent::{AgentOptions, AgentSession};
use crate::attachment::PollPolicy;
use crate::config::GeminiConfig;
use crate::error::AgentError;
use crate::provider::gemini::GeminiProvider;
use crate::provider::{FileService, GenerationService};

/// Factory for [`AgentSession`]s.
///
/// Sessions created from one client share its HTTP connection pool and
/// nothing else. Cloning the client is cheap.
///
/// ```no_run
/// # async fn run() -> gemini_agent::error::Result<()> {
/// use gemini_agent::prelude::*;
///
/// let client = GeminiClient::new("my-api-key")?;
/// let mut session = client.create_agent(
///     AgentOptions::builder()
///         .user_prompt("Name three rivers in Brazil.")
///         .build(),
/// );
/// let reply = session.invoke().await?;
/// println!("{}", reply.content);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    generator: Arc<dyn GenerationService>,
    files: Arc<dyn FileService>,
    poll: PollPolicy,
}

impl GeminiClient {
    /// Connect to the public endpoint with `api_key`. A blank key is rejected.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AgentError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AgentError::InvalidArgument(
                "API key cannot be empty".to_string(),
            ));
        }
        Ok(Self::with_provider(Arc::new(GeminiProvider::new(api_key)?)))
    }

    /// Connect using resolved configuration, including its poll policy.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, AgentError> {
        let provider = Arc::new(GeminiProvider::from_config(config)?);
        Ok(Self::with_provider(provider).with_poll_policy(config.poll_policy()))
    }

    /// Share an existing provider between several clients.
    pub fn with_provider(provider: Arc<GeminiProvider>) -> Self {
        Self {
            generator: provider.clone(),
            files: provider,
            poll: PollPolicy::default(),
        }
    }

    /// Use arbitrary service implementations.
    pub fn with_services(
        generator: Arc<dyn GenerationService>,
        files: Arc<dyn FileService>,
    ) -> Self {
        Self {
            generator,
            files,
            poll: PollPolicy::default(),
        }
    }

    pub fn with_poll_policy(mut self, policy: PollPolicy) -> Self {
        self.poll = policy;
        self
    }

    /// Start a new session with an empty conversation.
    pub fn create_agent(&self, options: AgentOptions) -> AgentSession {
        AgentSession::new(options, self.generator.clone(), self.files.clone())
            .with_poll_policy(self.poll)
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("poll", &self.poll)
            .finish_non_exhaustive()
    }
}
