//! Provider registry.
//!
//! Instantiates every configured LLM endpoint at startup. Secrets are
//! resolved eagerly so a missing key is reported once, at boot.

use crate::openai_compat::OpenAiCompatProvider;
use crate::traits::LlmProvider;
use std::collections::HashMap;
use std::sync::Arc;
use ta_domain::config::{LlmConfig, LlmStartupPolicy, ProviderKind};
use ta_domain::error::{Error, Result};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ProviderRegistry
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn LlmProvider>>,
    /// Initialized provider ids in config order.
    order: Vec<String>,
    /// `llm.provider`, when set.
    preferred: Option<String>,
}

impl ProviderRegistry {
    /// Build the registry from the [`LlmConfig`].
    ///
    /// Providers that fail to initialize are logged and skipped. With
    /// `startup_policy = "require_one"` an empty registry is an error.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let mut registry = Self::empty();
        registry.preferred = config.provider.clone();

        for pc in &config.providers {
            let result = match pc.kind {
                ProviderKind::OpenaiCompat | ProviderKind::AzureOpenai => {
                    OpenAiCompatProvider::from_config(pc, &config.model)
                        .map(|p| Arc::new(p) as Arc<dyn LlmProvider>)
                }
            };

            match result {
                Ok(provider) => {
                    tracing::info!(provider_id = %pc.id, kind = ?pc.kind, "registered LLM provider");
                    registry.insert(provider);
                }
                Err(e) => {
                    tracing::warn!(
                        provider_id = %pc.id,
                        kind = ?pc.kind,
                        error = %e,
                        "failed to initialize LLM provider, skipping"
                    );
                }
            }
        }

        if registry.is_empty() {
            if config.startup_policy == LlmStartupPolicy::RequireOne {
                return Err(Error::Config(
                    "no LLM provider could be initialized (startup_policy = require_one)".into(),
                ));
            }
            tracing::warn!("no LLM providers initialized; every chat turn will return the error reply");
        }

        Ok(registry)
    }

    pub fn empty() -> Self {
        Self {
            providers: HashMap::new(),
            order: Vec::new(),
            preferred: None,
        }
    }

    /// Register an already-built provider under its own id.
    pub fn insert(&mut self, provider: Arc<dyn LlmProvider>) {
        let id = provider.provider_id().to_string();
        if self.providers.insert(id.clone(), provider).is_none() {
            self.order.push(id);
        }
    }

    pub fn get(&self, provider_id: &str) -> Option<Arc<dyn LlmProvider>> {
        self.providers.get(provider_id).cloned()
    }

    /// The provider used for conversation turns: `llm.provider` if it
    /// initialized, else the first configured one that did.
    pub fn primary(&self) -> Option<Arc<dyn LlmProvider>> {
        if let Some(ref id) = self.preferred {
            if let Some(p) = self.get(id) {
                return Some(p);
            }
            tracing::warn!(provider_id = %id, "preferred provider unavailable, using first registered");
        }
        self.order.first().and_then(|id| self.get(id))
    }

    pub fn list_providers(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
