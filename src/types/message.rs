//! Conversation turn types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a turn as understood by the generation service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Map an externally supplied role label onto a service role.
    ///
    /// Exactly `"assistant"` maps to [`Role::Model`]; every other label,
    /// including `"system"`, maps to [`Role::User`].
    pub fn normalize(label: &str) -> Self {
        if label == "assistant" {
            Self::Model
        } else {
            Self::User
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// Payload of a single turn: text or a reference to an uploaded file, never both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnContent {
    Text { text: String },
    File { uri: String, mime_type: String },
}

/// One entry of the conversation log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub content: TurnContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Turn {
    /// Create a user text turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self::text(Role::User, text)
    }

    /// Create a model text turn.
    pub fn model(text: impl Into<String>) -> Self {
        Self::text(Role::Model, text)
    }

    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: TurnContent::Text { text: text.into() },
            timestamp: Some(Utc::now()),
        }
    }

    /// Create a user turn referencing an uploaded file.
    pub fn file(uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: TurnContent::File {
                uri: uri.into(),
                mime_type: mime_type.into(),
            },
            timestamp: Some(Utc::now()),
        }
    }

    /// Text of this turn, if it is a text turn.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            TurnContent::Text { text } => Some(text),
            TurnContent::File { .. } => None,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.content, TurnContent::File { .. })
    }
}

/// An externally supplied message, e.g. context retrieved from a store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub message: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            message: message.into(),
        }
    }
}

impl From<&ChatMessage> for Turn {
    fn from(message: &ChatMessage) -> Self {
        Turn::text(Role::normalize(&message.role), message.message.clone())
    }
}
