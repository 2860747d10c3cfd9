//! Convenience re-exports for common use.

pub use crate::chat::{ChatService, TurnResult};
pub use crate::client::{ModelClient, ModelReply};
pub use crate::config::Settings;
pub use crate::error::{PalaverError, Result};
pub use crate::prompt::PromptBuilder;
pub use crate::provider::ModelProvider;
pub use crate::session::{ChatSession, SessionMemory};
pub use crate::types::{
    ChatMessage, ChatRole, GenerationConfig, GenerationOverrides, PromptMessage, PromptRole,
    TurnUsage,
};
