//! Shared test helpers and mock provider.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use palaver::config::{ConfigFile, Settings};
use palaver::error::PalaverError;
use palaver::provider::{ModelProvider, ProviderRequest, ProviderResponse};

const TEST_YAML: &str = r#"
prompts:
  system_role: "You are a career mentor."
  domain_description: "career guidance and skill development"
  response_style: "Concise and practical."
  safety_instructions: "Stay on topic."
  output_format: "Plain text."
model:
  model_name: "gemini-test"
  temperature: 0.7
  max_output_tokens: 1024
  top_p: 0.95
  top_k: 40
app:
  app_name: "Palaver"
  domain_name: "Career Mentoring"
"#;

/// Deterministic settings for service-level tests. No environment reads.
pub fn test_settings() -> Arc<Settings> {
    let file = ConfigFile::from_yaml(TEST_YAML).expect("test yaml parses");
    let settings =
        Settings::from_parts(file, Some("test-key".to_string())).expect("test settings assemble");
    Arc::new(settings)
}

/// A mock provider that returns queued outcomes and records every request.
///
/// Clones share their state, so a test can hand one clone to the service
/// and keep another for assertions.
#[derive(Clone)]
pub struct MockProvider {
    inner: Arc<Inner>,
}

struct Inner {
    model_id: String,
    outcomes: Mutex<Vec<Result<ProviderResponse, PalaverError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl MockProvider {
    pub fn new(model_id: &str) -> Self {
        Self {
            inner: Arc::new(Inner {
                model_id: model_id.to_string(),
                outcomes: Mutex::new(Vec::new()),
                requests: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Queue a text response.
    pub fn queue_text(&self, text: &str) {
        self.inner.outcomes.lock().unwrap().push(Ok(ProviderResponse {
            text: text.to_string(),
        }));
    }

    /// Queue a failed call.
    pub fn queue_error(&self, err: PalaverError) {
        self.inner.outcomes.lock().unwrap().push(Err(err));
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.inner.requests.lock().unwrap().clone()
    }

    /// The most recent request, if any call was made.
    pub fn last_request(&self) -> Option<ProviderRequest> {
        self.inner.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn model_id(&self) -> &str {
        &self.inner.model_id
    }

    async fn generate(&self, request: &ProviderRequest) -> Result<ProviderResponse, PalaverError> {
        self.inner.requests.lock().unwrap().push(request.clone());
        let mut outcomes = self.inner.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Ok(ProviderResponse {
                text: "Mock response".to_string(),
            });
        }
        outcomes.remove(0)
    }
}
