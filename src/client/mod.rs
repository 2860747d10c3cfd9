//! Model client: the absorbing boundary between transport and conversation.
//!
//! Every failure mode of a generation call is folded into [`ModelReply`]
//! here, so the layers above never see a transport `Err` and the
//! conversation continues regardless of what the upstream did.

use tracing::{error, warn};

use crate::config::ModelSettings;
use crate::error::PalaverError;
use crate::provider::{ModelProvider, ProviderRequest};
use crate::types::{GenerationConfig, GenerationOverrides, PromptMessage};

/// Shown when the upstream answered with no usable text.
pub const EMPTY_REPLY_FALLBACK: &str =
    "I could not generate a response right now. Please try again in a moment.";

/// Shown when the call itself failed.
pub const FAILED_REPLY_FALLBACK: &str =
    "I ran into an issue while generating your answer. Please try rephrasing your question or try again.";

/// Outcome of one generation call.
#[derive(Debug)]
pub enum ModelReply {
    /// Usable text came back.
    Text(String),
    /// The call succeeded but produced no text (no candidates, safety block,
    /// blank output).
    Empty,
    /// The call itself failed; the cause is retained for diagnostics.
    Failed(PalaverError),
}

impl ModelReply {
    /// The text to show the user: the reply itself, or the fixed fallback
    /// sentence for the degraded variants.
    pub fn user_text(&self) -> &str {
        match self {
            ModelReply::Text(text) => text,
            ModelReply::Empty => EMPTY_REPLY_FALLBACK,
            ModelReply::Failed(_) => FAILED_REPLY_FALLBACK,
        }
    }

    /// True when the variant carries model-produced text.
    pub fn is_text(&self) -> bool {
        matches!(self, ModelReply::Text(_))
    }
}

/// Wraps a provider with the configured generation defaults.
pub struct ModelClient {
    provider: Box<dyn ModelProvider>,
    defaults: ModelSettings,
}

impl ModelClient {
    pub fn new(provider: Box<dyn ModelProvider>, defaults: ModelSettings) -> Self {
        Self { provider, defaults }
    }

    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    /// Run one generation call. Degraded outcomes are logged here, once, so
    /// callers only decide how to render them.
    pub async fn complete(
        &self,
        messages: Vec<PromptMessage>,
        overrides: &GenerationOverrides,
    ) -> ModelReply {
        let config = GenerationConfig::resolve(&self.defaults, overrides);
        let request = ProviderRequest { messages, config };

        match self.provider.generate(&request).await {
            Ok(response) => {
                let text = response.text.trim();
                if text.is_empty() {
                    warn!(
                        model = self.provider.model_id(),
                        "model returned an empty response"
                    );
                    ModelReply::Empty
                } else {
                    ModelReply::Text(text.to_string())
                }
            }
            Err(err) => {
                error!(
                    model = self.provider.model_id(),
                    error = %err,
                    "model call failed"
                );
                ModelReply::Failed(err)
            }
        }
    }
}
