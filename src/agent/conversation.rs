//! Append-only conversation log.

use crate::types::{ChatMessage, Turn};

/// Ordered turns that make up a session's memory.
///
/// Insertion order is the context window sent with every call. Turns are
/// never edited or removed; any role sequence is accepted.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Append externally supplied messages, normalizing their roles.
    pub fn extend_from_messages(&mut self, messages: &[ChatMessage]) {
        self.turns.extend(messages.iter().map(Turn::from));
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
