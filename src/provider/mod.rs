//! Model provider trait and the Gemini implementation.

pub mod gemini;
pub mod http;

use async_trait::async_trait;

use crate::error::PalaverError;
use crate::types::{GenerationConfig, PromptMessage};

/// A fully assembled request for one generation call.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub messages: Vec<PromptMessage>,
    pub config: GenerationConfig,
}

/// Response from a provider. `text` is empty when the upstream answer
/// carried no usable content.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,
}

/// Core trait implemented by model providers.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Generate a reply for the assembled request (non-streaming).
    async fn generate(&self, request: &ProviderRequest) -> Result<ProviderResponse, PalaverError>;
}
