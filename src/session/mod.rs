//! Session state: one logical conversation and its bounded memory.

pub mod memory;

pub use memory::{SessionMemory, DEFAULT_MAX_HISTORY};

use uuid::Uuid;

/// One logical conversation. Holds an identity for log correlation and the
/// bounded turn history; never shared between conversations.
#[derive(Debug)]
pub struct ChatSession {
    id: Uuid,
    memory: SessionMemory,
}

impl ChatSession {
    /// Session with default memory capacity.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            memory: SessionMemory::new(),
        }
    }

    /// Session whose memory keeps at most `max_history` turns.
    pub fn with_max_history(max_history: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            memory: SessionMemory::with_max_history(max_history),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut SessionMemory {
        &mut self.memory
    }

    /// Start over: history is cleared and the session takes a fresh identity.
    pub fn reset(&mut self) {
        self.memory.clear();
        self.id = Uuid::new_v4();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
