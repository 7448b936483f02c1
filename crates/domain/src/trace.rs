use serde::Serialize;

/// Structured trace events emitted across all travel-assistant crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    SessionResolved {
        session_id: String,
        is_new: bool,
        language: String,
    },
    SessionPersisted {
        session_id: String,
        turns: usize,
    },
    LlmRequest {
        provider: String,
        model: String,
        duration_ms: u64,
        prompt_tokens: Option<u32>,
        completion_tokens: Option<u32>,
    },
    CompletionFailed {
        session_id: String,
        language: String,
        error: String,
    },
    ContactRequested {
        session_id: String,
        destination: Option<String>,
    },
    LeadCaptured {
        session_id: String,
        sink: String,
    },
    LeadFallback {
        session_id: String,
        from_sink: String,
        reason: String,
    },
    LeadCaptureFailed {
        session_id: String,
        reason: String,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "ta_event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_tag() {
        let ev = TraceEvent::LeadCaptured {
            session_id: "s1".into(),
            sink: "sheets".into(),
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["event"], "LeadCaptured");
        assert_eq!(json["sink"], "sheets");
    }
}
