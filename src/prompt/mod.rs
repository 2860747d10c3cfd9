//! Prompt assembly.
//!
//! Every request sent upstream is rebuilt from scratch: a deterministic
//! system block rendered from configuration, the retained history mapped
//! into wire roles, then the incoming user message. Nothing here mutates
//! session state.

use crate::config::PromptSettings;
use crate::types::{ChatMessage, PromptMessage};

/// Renders the system block and assembles ordered prompt message lists.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    prompts: PromptSettings,
}

impl PromptBuilder {
    pub fn new(prompts: PromptSettings) -> Self {
        Self { prompts }
    }

    /// The fully rendered system block.
    ///
    /// Pure function of configuration: same settings, same string, every
    /// turn of every session.
    pub fn system_prompt(&self) -> String {
        format!(
            "{}\n\nDomain: {}\n\nResponse style: {}\n\nSafety:\n{}\n\nOutput format:\n{}\n",
            self.prompts.system_role,
            self.prompts.domain_description,
            self.prompts.response_style,
            self.prompts.safety_instructions,
            self.prompts.output_format,
        )
    }

    /// Assemble the ordered message list for one turn.
    ///
    /// Layout is fixed: the system block leads as a user-role message (the
    /// upstream API has no dedicated system slot in this request shape),
    /// followed by the retained history oldest-first, followed by the new
    /// user message. `history` must not already contain `user_message`.
    pub fn build_messages(&self, history: &[ChatMessage], user_message: &str) -> Vec<PromptMessage> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(PromptMessage::user(self.system_prompt()));
        messages.extend(history.iter().map(PromptMessage::from));
        messages.push(PromptMessage::user(user_message));
        messages
    }
}
