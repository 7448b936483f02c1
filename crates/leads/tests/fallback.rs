use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{Local, TimeZone};
use ta_domain::error::{Error, PersistenceError};
use ta_domain::profile::ContactRecord;
use ta_leads::{CaptureOutcome, CsvFileSink, LeadCapture, LeadSink};

struct FailingSink {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl LeadSink for FailingSink {
    async fn append(&self, _record: &ContactRecord) -> Result<(), PersistenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(PersistenceError::new("sheets", Error::Http("HTTP 503".into())))
    }

    fn name(&self) -> &str {
        "sheets"
    }
}

fn record(contact: &str) -> ContactRecord {
    ContactRecord {
        name: "Not provided".into(),
        contact: contact.into(),
        destination: "Bali".into(),
        interests: "beach, food".into(),
        budget: "Not specified".into(),
        language: "en".into(),
        timestamp: Local
            .with_ymd_and_hms(2024, 5, 12, 9, 30, 0)
            .unwrap()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
    }
}

#[tokio::test]
async fn primary_failure_lands_in_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads").join("contact_leads.csv");
    let failing = Arc::new(FailingSink { calls: AtomicUsize::new(0) });
    let capture = LeadCapture::new(
        Some(failing.clone() as Arc<dyn LeadSink>),
        Arc::new(CsvFileSink::new(&path)),
    );

    let outcome = capture.submit("s1", &record("ana@example.com")).await;
    assert_eq!(outcome, CaptureOutcome::Fallback);
    assert!(outcome.is_saved());
    assert_eq!(failing.calls.load(Ordering::SeqCst), 1);

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "Name,Contact,Destination,Interests,Budget,Language,Timestamp\r\n\
         Not provided,ana@example.com,Bali,\"beach, food\",Not specified,en,2024-05-12 09:30:00\r\n"
    );
}

#[tokio::test]
async fn header_is_written_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contact_leads.csv");
    let capture = LeadCapture::new(None, Arc::new(CsvFileSink::new(&path)));

    assert_eq!(capture.submit("a", &record("111111")).await, CaptureOutcome::Fallback);
    assert_eq!(capture.submit("b", &record("222222")).await, CaptureOutcome::Fallback);

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("Name,Contact").count(), 1);
    assert_eq!(text.lines().count(), 3);
}

#[tokio::test]
async fn both_sinks_failing_reports_failed() {
    let capture = LeadCapture::new(
        Some(Arc::new(FailingSink { calls: AtomicUsize::new(0) })),
        Arc::new(FailingSink { calls: AtomicUsize::new(0) }),
    );
    let outcome = capture.submit("s1", &record("ana@example.com")).await;
    assert_eq!(outcome, CaptureOutcome::Failed);
    assert!(!outcome.is_saved());
}

#[tokio::test]
async fn concurrent_appends_do_not_interleave() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contact_leads.csv");
    let capture = Arc::new(LeadCapture::new(None, Arc::new(CsvFileSink::new(&path))));

    let mut handles = Vec::new();
    for i in 0..16 {
        let capture = capture.clone();
        handles.push(tokio::spawn(async move {
            capture.submit(&format!("s{i}"), &record(&format!("10000{i:02}"))).await
        }));
    }
    for h in handles {
        assert!(h.await.unwrap().is_saved());
    }

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 17);
    assert!(text.lines().skip(1).all(|l| l.split(',').count() == 8));
}
