//! OpenAI-compatible adapter.
//!
//! Covers api.openai.com, Azure OpenAI and self-hosted endpoints that speak
//! the chat completions contract (Ollama, vLLM, LM Studio).

use crate::traits::{ChatRequest, ChatResponse, LlmProvider, Usage};
use crate::util::{from_reqwest, resolve_auth};
use serde_json::Value;
use std::time::Duration;
use ta_domain::config::{ProviderConfig, ProviderKind};
use ta_domain::error::{Error, Result};
use ta_domain::message::Message;

const AZURE_API_VERSION: &str = "2024-10-21";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Adapter struct
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Adapter for any endpoint following the OpenAI chat completions API.
///
/// Azure OpenAI shares the wire format but addresses the deployment in the
/// URL and authenticates with an `api-key` header.
pub struct OpenAiCompatProvider {
    id: String,
    base_url: String,
    /// Fully formatted header value; `None` for unauthenticated endpoints.
    auth_value: Option<String>,
    auth_header: String,
    default_model: String,
    client: reqwest::Client,
    is_azure: bool,
}

impl OpenAiCompatProvider {
    /// Build the adapter, resolving its secret up front.
    ///
    /// `model` is used when neither the request nor the provider entry
    /// names one.
    pub fn from_config(cfg: &ProviderConfig, model: &str) -> Result<Self> {
        let is_azure = cfg.kind == ProviderKind::AzureOpenai;
        let secret = resolve_auth(&cfg.auth)?;

        let auth_header = cfg.auth.header.clone().unwrap_or_else(|| {
            if is_azure { "api-key" } else { "Authorization" }.into()
        });
        let auth_prefix = cfg
            .auth
            .prefix
            .clone()
            .unwrap_or_else(|| if is_azure { "" } else { "Bearer " }.into());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(from_reqwest)?;

        Ok(Self {
            id: cfg.id.clone(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            auth_value: secret.map(|key| format!("{auth_prefix}{key}")),
            auth_header,
            default_model: cfg.default_model.clone().unwrap_or_else(|| model.to_string()),
            client,
            is_azure,
        })
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    // ── request building ──

    fn authed_post(&self, url: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .post(url)
            .header("Content-Type", "application/json");
        match self.auth_value {
            Some(ref value) => builder.header(&self.auth_header, value),
            None => builder,
        }
    }

    fn effective_model<'a>(&'a self, req: &'a ChatRequest) -> &'a str {
        req.model.as_deref().unwrap_or(&self.default_model)
    }

    fn chat_url(&self, req: &ChatRequest) -> String {
        if self.is_azure {
            format!(
                "{}/openai/deployments/{}/chat/completions?api-version={AZURE_API_VERSION}",
                self.base_url,
                self.effective_model(req)
            )
        } else {
            format!("{}/chat/completions", self.base_url)
        }
    }

    fn build_chat_body(&self, req: &ChatRequest) -> Value {
        let messages: Vec<Value> = req.messages.iter().map(msg_to_openai).collect();
        let mut body = serde_json::json!({ "messages": messages });

        // Azure carries the deployment in the URL.
        if !self.is_azure {
            body["model"] = Value::String(self.effective_model(req).to_string());
        }
        if let Some(temp) = req.temperature {
            body["temperature"] = serde_json::json!(temp);
        }
        if let Some(max) = req.max_tokens {
            body["max_tokens"] = serde_json::json!(max);
        }
        body
    }
}

fn msg_to_openai(msg: &Message) -> Value {
    serde_json::json!({
        "role": msg.role.as_str(),
        "content": msg.content,
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Response parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn parse_chat_response(provider: &str, body: &Value) -> Result<ChatResponse> {
    let malformed = |message: &str| Error::Provider {
        provider: provider.to_string(),
        message: message.to_string(),
    };

    let choice = body
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|a| a.first())
        .ok_or_else(|| malformed("no choices in response"))?;

    let content = choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| malformed("choice has no text content"))?
        .to_string();

    Ok(ChatResponse {
        content,
        usage: body.get("usage").and_then(parse_usage),
        model: body
            .get("model")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string(),
        finish_reason: choice
            .get("finish_reason")
            .and_then(|v| v.as_str())
            .map(String::from),
    })
}

fn parse_usage(v: &Value) -> Option<Usage> {
    Some(Usage {
        prompt_tokens: v.get("prompt_tokens")?.as_u64()? as u32,
        completion_tokens: v.get("completion_tokens")?.as_u64()? as u32,
        total_tokens: v.get("total_tokens")?.as_u64()? as u32,
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Trait implementation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[async_trait::async_trait]
impl LlmProvider for OpenAiCompatProvider {
    async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse> {
        let url = self.chat_url(req);
        let body = self.build_chat_body(req);

        tracing::debug!(provider = %self.id, url = %url, messages = req.messages.len(), "chat request");

        let resp = self
            .authed_post(&url)
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = resp.status();
        let text = resp.text().await.map_err(from_reqwest)?;
        if !status.is_success() {
            return Err(Error::Provider {
                provider: self.id.clone(),
                message: format!("HTTP {} - {}", status.as_u16(), text),
            });
        }

        let json: Value = serde_json::from_str(&text)?;
        parse_chat_response(&self.id, &json)
    }

    fn provider_id(&self) -> &str {
        &self.id
    }
}
