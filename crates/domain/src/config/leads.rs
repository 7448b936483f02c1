use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::AuthConfig;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lead capture
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadsConfig {
    #[serde(default)]
    pub primary: LeadSinkConfig,
    /// Local append-only CSV used when the primary sink fails or is `none`.
    #[serde(default = "d_fallback_path")]
    pub fallback_path: PathBuf,
}

impl Default for LeadsConfig {
    fn default() -> Self {
        Self {
            primary: LeadSinkConfig::default(),
            fallback_path: d_fallback_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadSinkConfig {
    #[serde(default)]
    pub kind: LeadSinkKind,
    /// Google Sheets spreadsheet id (kind = "sheets").
    #[serde(default)]
    pub spreadsheet_id: Option<String>,
    /// A1 range the rows are appended after (kind = "sheets").
    #[serde(default = "d_sheet_range")]
    pub sheet_range: String,
    /// Endpoint override. For `sheets` this replaces the Sheets API base
    /// URL; for `webhook` it is the target URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Bearer token source for the sink.
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default = "d_sink_timeout")]
    pub timeout_ms: u64,
}

impl Default for LeadSinkConfig {
    fn default() -> Self {
        Self {
            kind: LeadSinkKind::None,
            spreadsheet_id: None,
            sheet_range: d_sheet_range(),
            url: None,
            auth: AuthConfig::default(),
            timeout_ms: d_sink_timeout(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSinkKind {
    /// No remote sink; every lead goes to the CSV fallback.
    #[default]
    None,
    /// Google Sheets `values:append`.
    Sheets,
    /// JSON POST of the record to `url`.
    Webhook,
}

fn d_fallback_path() -> PathBuf {
    PathBuf::from("contact_leads.csv")
}
fn d_sheet_range() -> String {
    "Sheet1".into()
}
fn d_sink_timeout() -> u64 {
    10_000
}
