//! Lead persistence: a remote primary sink with a local CSV fallback.

pub mod capture;
pub mod csv;
pub mod sheets;
pub mod sink;
pub mod webhook;

pub use capture::{CaptureOutcome, LeadCapture};
pub use csv::CsvFileSink;
pub use sheets::SheetsSink;
pub use sink::LeadSink;
pub use webhook::WebhookSink;
