use crate::csv::CsvFileSink;
use crate::sheets::SheetsSink;
use crate::sink::LeadSink;
use crate::webhook::WebhookSink;
use std::sync::Arc;
use ta_domain::config::{LeadSinkKind, LeadsConfig};
use ta_domain::error::Result;
use ta_domain::profile::ContactRecord;
use ta_domain::trace::TraceEvent;

/// Where a lead ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Primary,
    Fallback,
    /// Nothing was written; the caller may retry on a later turn.
    Failed,
}

impl CaptureOutcome {
    pub fn is_saved(self) -> bool {
        !matches!(self, CaptureOutcome::Failed)
    }
}

/// Primary-then-fallback lead writer.
pub struct LeadCapture {
    primary: Option<Arc<dyn LeadSink>>,
    fallback: Arc<dyn LeadSink>,
}

impl LeadCapture {
    pub fn new(primary: Option<Arc<dyn LeadSink>>, fallback: Arc<dyn LeadSink>) -> Self {
        Self { primary, fallback }
    }

    /// Build the sinks from config. A primary sink that cannot be built is
    /// an error: silently dropping it would route every lead to the CSV.
    pub fn from_config(cfg: &LeadsConfig) -> Result<Self> {
        let primary: Option<Arc<dyn LeadSink>> = match cfg.primary.kind {
            LeadSinkKind::None => None,
            LeadSinkKind::Sheets => Some(Arc::new(SheetsSink::from_config(&cfg.primary)?)),
            LeadSinkKind::Webhook => Some(Arc::new(WebhookSink::from_config(&cfg.primary)?)),
        };
        let fallback: Arc<dyn LeadSink> = Arc::new(CsvFileSink::new(&cfg.fallback_path));
        tracing::info!(
            primary = primary.as_ref().map(|s| s.name()).unwrap_or("none"),
            fallback = %cfg.fallback_path.display(),
            "lead sinks ready"
        );
        Ok(Self::new(primary, fallback))
    }

    pub fn primary_name(&self) -> Option<&str> {
        self.primary.as_ref().map(|s| s.name())
    }

    /// Write `record` to the primary sink, falling back to the local sink
    /// on failure. Never returns an error: failures are logged and reported
    /// through the outcome.
    pub async fn submit(&self, session_id: &str, record: &ContactRecord) -> CaptureOutcome {
        if let Some(ref primary) = self.primary {
            match primary.append(record).await {
                Ok(()) => {
                    TraceEvent::LeadCaptured {
                        session_id: session_id.to_owned(),
                        sink: primary.name().to_owned(),
                    }
                    .emit();
                    return CaptureOutcome::Primary;
                }
                Err(e) => {
                    tracing::warn!(session_id = %session_id, error = %e, "primary lead sink failed");
                    TraceEvent::LeadFallback {
                        session_id: session_id.to_owned(),
                        from_sink: primary.name().to_owned(),
                        reason: e.to_string(),
                    }
                    .emit();
                }
            }
        }

        match self.fallback.append(record).await {
            Ok(()) => {
                TraceEvent::LeadCaptured {
                    session_id: session_id.to_owned(),
                    sink: self.fallback.name().to_owned(),
                }
                .emit();
                CaptureOutcome::Fallback
            }
            Err(e) => {
                tracing::error!(session_id = %session_id, error = %e, "lead could not be saved anywhere");
                TraceEvent::LeadCaptureFailed {
                    session_id: session_id.to_owned(),
                    reason: e.to_string(),
                }
                .emit();
                CaptureOutcome::Failed
            }
        }
    }
}
