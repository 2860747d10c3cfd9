//! Bounded conversation memory.

use crate::types::{ChatMessage, ChatRole};

/// Default number of turns retained per session.
pub const DEFAULT_MAX_HISTORY: usize = 15;

/// In-session conversation log with a hard capacity ceiling.
///
/// Turns are kept in strict insertion order. When an append pushes the log
/// over `max_history`, the oldest turns are evicted first, so exactly the
/// most recent `max_history` turns survive. The ceiling is never advisory.
#[derive(Debug, Clone)]
pub struct SessionMemory {
    messages: Vec<ChatMessage>,
    max_history: usize,
}

impl SessionMemory {
    /// Memory with the default capacity.
    pub fn new() -> Self {
        Self::with_max_history(DEFAULT_MAX_HISTORY)
    }

    /// Memory keeping at most `max_history` turns.
    pub fn with_max_history(max_history: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_history,
        }
    }

    /// Append a turn, evicting the oldest entries if the ceiling is crossed.
    pub fn add(&mut self, role: ChatRole, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
        if self.messages.len() > self.max_history {
            let excess = self.messages.len() - self.max_history;
            self.messages.drain(..excess);
        }
    }

    /// Append a user turn.
    pub fn add_user(&mut self, content: impl Into<String>) {
        self.add(ChatRole::User, content);
    }

    /// Append an assistant turn.
    pub fn add_assistant(&mut self, content: impl Into<String>) {
        self.add(ChatRole::Assistant, content);
    }

    /// Borrowed chronological view of the retained turns.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Owned ordered copy for prompt building. Does not mutate state.
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }

    /// Forget the conversation unconditionally.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Number of retained turns.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The hard capacity ceiling.
    pub fn max_history(&self) -> usize {
        self.max_history
    }
}

impl Default for SessionMemory {
    fn default() -> Self {
        Self::new()
    }
}
