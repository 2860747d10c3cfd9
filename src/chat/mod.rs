//! Turn orchestration.
//!
//! One [`ChatService::handle_turn`] call is one conversation turn: sanitize
//! the input, remember it, rebuild the full prompt, call the model, remember
//! whatever came back, account tokens. The service itself is stateless
//! between turns; all conversation state lives in the [`ChatSession`].

use std::sync::Arc;

use tracing::{debug, info};

use crate::client::{ModelClient, ModelReply};
use crate::config::Settings;
use crate::prompt::PromptBuilder;
use crate::provider::gemini::GeminiProvider;
use crate::provider::ModelProvider;
use crate::session::ChatSession;
use crate::types::{GenerationOverrides, TurnUsage};
use crate::util::text::{sanitize_input, MAX_INPUT_CHARS};
use crate::util::tokens::approximate_tokens;

/// Outcome of one full conversation turn.
#[derive(Debug)]
pub struct TurnResult {
    pub reply: ModelReply,
    pub usage: TurnUsage,
}

/// Orchestrates conversation turns against a model provider.
pub struct ChatService {
    settings: Arc<Settings>,
    prompt_builder: PromptBuilder,
    client: ModelClient,
}

impl ChatService {
    /// Service wired to the live Gemini endpoint.
    pub fn new(settings: Arc<Settings>) -> Self {
        let provider = GeminiProvider::new(
            settings.model.model_name.clone(),
            settings.api_key.clone(),
        );
        Self::with_provider(settings, Box::new(provider))
    }

    /// Service around an arbitrary provider. Tests inject mocks here.
    pub fn with_provider(settings: Arc<Settings>, provider: Box<dyn ModelProvider>) -> Self {
        let prompt_builder = PromptBuilder::new(settings.prompts.clone());
        let client = ModelClient::new(provider, settings.model.clone());
        Self {
            settings,
            prompt_builder,
            client,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn model_id(&self) -> &str {
        self.client.model_id()
    }

    /// Run one turn. The `&mut` session borrow is held across the await, so
    /// a session can never have two turns in flight.
    pub async fn handle_turn(
        &self,
        session: &mut ChatSession,
        user_message: &str,
        overrides: &GenerationOverrides,
    ) -> TurnResult {
        let sanitized = sanitize_input(user_message, MAX_INPUT_CHARS);

        // Snapshot before appending: the new message enters the prompt once,
        // as its final entry, and enters memory exactly once.
        let history = session.memory().snapshot();
        session.memory_mut().add_user(sanitized.clone());

        let messages = self.prompt_builder.build_messages(&history, &sanitized);
        let input_tokens = approximate_tokens(messages.iter().map(|m| m.content.as_str()));
        debug!(
            session = %session.id(),
            messages = messages.len(),
            input_tokens,
            "dispatching turn"
        );

        let reply = self.client.complete(messages, overrides).await;

        // The fallback text for degraded replies is stored in memory too, so
        // later turns see the conversation the user actually saw.
        let reply_text = reply.user_text().to_string();
        let output_tokens = approximate_tokens([reply_text.as_str()]);
        session.memory_mut().add_assistant(reply_text);

        let usage = TurnUsage::new(input_tokens, output_tokens);
        info!(
            session = %session.id(),
            history = session.memory().len(),
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "turn complete"
        );

        TurnResult { reply, usage }
    }
}
