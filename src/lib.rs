//! gemini-agent: stateful Gemini chat sessions
//!
//! Sessions keep an append-only conversation, pick request options by model
//! capability, upload and poll file attachments, and return every reply in
//! one uniform [`ChatResponse`](types::ChatResponse) shape.
//!
//! # Quick Start
//!
//! ```no_run
//! use gemini_agent::prelude::*;
//!
//! # async fn example() -> gemini_agent::error::Result<()> {
//! let client = GeminiClient::from_config(&GeminiConfig::from_env())?;
//! let mut session = client.create_agent(
//!     AgentOptions::builder()
//!         .model(GeminiModel::Gemini3FlashPreview)
//!         .reasoning_effort(ReasoningEffort::Medium)
//!         .user_prompt("Summarize the attached report.")
//!         .build(),
//! );
//! let reply = session.invoke_multimodal("report.pdf", None).await?;
//! println!("{}", reply.content);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod attachment;
pub mod client;
pub mod config;
pub mod error;
pub mod features;
pub mod generation;
pub mod models;
pub mod prelude;
pub mod provider;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;

pub use client::GeminiClient;
