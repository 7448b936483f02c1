//! The single completion call a conversation turn makes.

use crate::registry::ProviderRegistry;
use crate::traits::{ChatRequest, LlmProvider};
use std::sync::Arc;
use std::time::{Duration, Instant};
use ta_domain::config::LlmConfig;
use ta_domain::error::{Error, UpstreamError};
use ta_domain::message::Message;
use ta_domain::trace::TraceEvent;

/// Wraps the primary provider with the configured sampling parameters and
/// a hard deadline.
#[derive(Clone)]
pub struct CompletionGateway {
    provider: Option<Arc<dyn LlmProvider>>,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl CompletionGateway {
    pub fn new(provider: Option<Arc<dyn LlmProvider>>, config: &LlmConfig) -> Self {
        Self {
            provider,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    pub fn from_registry(registry: &ProviderRegistry, config: &LlmConfig) -> Self {
        Self::new(registry.primary(), config)
    }

    /// Whether a provider is wired in. Without one every call fails.
    pub fn is_ready(&self) -> bool {
        self.provider.is_some()
    }

    /// Send the message list and return the reply text.
    pub async fn complete(&self, messages: Vec<Message>) -> Result<String, UpstreamError> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            Error::Config("no LLM provider is configured".into())
        })?;

        let req = ChatRequest {
            messages,
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
            model: None,
        };

        let started = Instant::now();
        let resp = tokio::time::timeout(self.timeout, provider.chat(&req))
            .await
            .map_err(|_| {
                Error::Timeout(format!(
                    "no completion within {}ms",
                    self.timeout.as_millis()
                ))
            })??;

        TraceEvent::LlmRequest {
            provider: provider.provider_id().to_string(),
            model: resp.model.clone(),
            duration_ms: started.elapsed().as_millis() as u64,
            prompt_tokens: resp.usage.map(|u| u.prompt_tokens),
            completion_tokens: resp.usage.map(|u| u.completion_tokens),
        }
        .emit();

        Ok(resp.content)
    }
}
