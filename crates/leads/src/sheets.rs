//! Google Sheets `values:append` sink.

use crate::sink::LeadSink;
use std::time::Duration;
use ta_domain::config::LeadSinkConfig;
use ta_domain::error::{Error, PersistenceError, Result};
use ta_domain::profile::ContactRecord;
use ta_providers::util::{from_reqwest, resolve_api_key};

const SINK: &str = "sheets";
const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Appends each lead as one row after the configured range.
#[derive(Debug, Clone)]
pub struct SheetsSink {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    range: String,
    token: String,
}

impl SheetsSink {
    pub fn from_config(cfg: &LeadSinkConfig) -> Result<Self> {
        let spreadsheet_id = cfg
            .spreadsheet_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::Config("leads.primary.spreadsheet_id is required for sheets".into()))?;
        let token = resolve_api_key(&cfg.auth)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(from_reqwest)?;

        Ok(Self {
            http,
            base_url: cfg
                .url
                .as_deref()
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            spreadsheet_id,
            range: cfg.sheet_range.clone(),
            token,
        })
    }

    fn append_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}:append?valueInputOption=USER_ENTERED&insertDataOption=INSERT_ROWS",
            self.base_url, self.spreadsheet_id, self.range
        )
    }

    async fn post_row(&self, record: &ContactRecord) -> Result<()> {
        let body = serde_json::json!({ "values": [record.row()] });
        let resp = self
            .http
            .post(self.append_url())
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::Http(format!("HTTP {} - {}", status.as_u16(), text)));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl LeadSink for SheetsSink {
    async fn append(&self, record: &ContactRecord) -> std::result::Result<(), PersistenceError> {
        self.post_row(record)
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
    use ta_domain::config::{AuthConfig, LeadSinkKind};

    fn config() -> LeadSinkConfig {
        LeadSinkConfig {
            kind: LeadSinkKind::Sheets,
            spreadsheet_id: Some("sheet-123".into()),
            auth: AuthConfig {
                key: Some("ya29.token".into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn append_url_targets_values_append() {
        let sink = SheetsSink::from_config(&config()).unwrap();
        assert_eq!(
            sink.append_url(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-123/values/Sheet1:append?valueInputOption=USER_ENTERED&insertDataOption=INSERT_ROWS"
        );
    }

    #[test]
    fn url_override_replaces_base() {
        let mut cfg = config();
        cfg.url = Some("http://127.0.0.1:9/".into());
        let sink = SheetsSink::from_config(&cfg).unwrap();
        assert!(sink.append_url().starts_with("http://127.0.0.1:9/v4/spreadsheets/"));
    }

    #[test]
    fn spreadsheet_id_is_required() {
        let mut cfg = config();
        cfg.spreadsheet_id = Some("  ".into());
        assert!(matches!(SheetsSink::from_config(&cfg), Err(Error::Config(_))));
    }
}
