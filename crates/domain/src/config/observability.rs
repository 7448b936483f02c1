use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Logging + trace export
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// How `serve` writes log lines to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Logging and optional OTLP export for the HTTP server.
///
/// `RUST_LOG` wins over `log_filter` when set. With no `otlp_endpoint`
/// nothing leaves the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "d_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// OTLP gRPC endpoint, e.g. `http://localhost:4317`.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    #[serde(default = "d_service_name")]
    pub service_name: String,
    /// Ratio-based sampling, `0.0..=1.0`.
    #[serde(default = "d_sample_rate")]
    pub sample_rate: f64,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: d_log_filter(),
            log_format: LogFormat::default(),
            otlp_endpoint: None,
            service_name: d_service_name(),
            sample_rate: d_sample_rate(),
        }
    }
}

fn d_log_filter() -> String {
    "info,ta_gateway=debug".into()
}

fn d_service_name() -> String {
    "travel-assistant".into()
}

fn d_sample_rate() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_means_local_json_logs() {
        let cfg: ObservabilityConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.log_filter, "info,ta_gateway=debug");
        assert!(cfg.otlp_endpoint.is_none());
    }

    #[test]
    fn pretty_format_and_collector() {
        let cfg: ObservabilityConfig = toml::from_str(
            r#"
            log_format = "pretty"
            otlp_endpoint = "http://collector:4317"
            sample_rate = 0.1
            "#,
        )
        .unwrap();
        assert_eq!(cfg.log_format, LogFormat::Pretty);
        assert_eq!(cfg.otlp_endpoint.as_deref(), Some("http://collector:4317"));
        assert_eq!(cfg.service_name, "travel-assistant");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(toml::from_str::<ObservabilityConfig>("log_format = \"xml\"").is_err());
    }
}
