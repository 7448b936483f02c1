//! Generic JSON webhook sink.

use crate::sink::LeadSink;
use std::time::Duration;
use ta_domain::config::{AuthConfig, AuthMode, LeadSinkConfig};
use ta_domain::error::{Error, PersistenceError, Result};
use ta_domain::profile::ContactRecord;
use ta_providers::util::{from_reqwest, resolve_api_key};

const SINK: &str = "webhook";

/// POSTs the record as a JSON object to a fixed URL.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    http: reqwest::Client,
    url: String,
    token: Option<String>,
}

impl WebhookSink {
    pub fn from_config(cfg: &LeadSinkConfig) -> Result<Self> {
        let url = cfg
            .url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| Error::Config("leads.primary.url is required for webhook".into()))?;
        let token = if has_secret_source(&cfg.auth) {
            Some(resolve_api_key(&cfg.auth)?)
        } else {
            None
        };
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(from_reqwest)?;
        Ok(Self { http, url, token })
    }

    async fn post(&self, record: &ContactRecord) -> Result<()> {
        let mut rb = self.http.post(&self.url).json(record);
        if let Some(ref token) = self.token {
            rb = rb.bearer_auth(token);
        }
        let resp = rb.send().await.map_err(from_reqwest)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http(format!("HTTP {}", status.as_u16())));
        }
        Ok(())
    }
}

// Webhooks may be unauthenticated; only resolve when something is configured.
fn has_secret_source(auth: &AuthConfig) -> bool {
    auth.mode != AuthMode::None
        && (auth.key.is_some() || auth.env.is_some() || auth.service.is_some())
}

#[async_trait::async_trait]
impl LeadSink for WebhookSink {
    async fn append(&self, record: &ContactRecord) -> std::result::Result<(), PersistenceError> {
        self.post(record)
            .await
            .map_err(|e| PersistenceError::new(SINK, e))
    }

    fn name(&self) -> &str {
        SINK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_required() {
        let cfg = LeadSinkConfig::default();
        assert!(matches!(WebhookSink::from_config(&cfg), Err(Error::Config(_))));
    }

    #[test]
    fn unauthenticated_webhook_builds() {
        let cfg = LeadSinkConfig {
            url: Some("http://127.0.0.1:9/leads".into()),
            ..Default::default()
        };
        let sink = WebhookSink::from_config(&cfg).unwrap();
        assert!(sink.token.is_none());
    }
}
