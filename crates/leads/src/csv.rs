//! Append-only CSV file sink.

use crate::sink::LeadSink;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use ta_domain::error::{Error, PersistenceError};
use ta_domain::profile::ContactRecord;
use tokio::sync::Mutex;

const SINK: &str = "csv";

/// Writes one row per lead to a local CSV file, creating it with a header
/// row on first use. Appends are serialized so concurrent captures never
/// interleave.
pub struct CsvFileSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl LeadSink for CsvFileSink {
    async fn append(&self, record: &ContactRecord) -> Result<(), PersistenceError> {
        let _guard = self.write_lock.lock().await;
        let path = self.path.clone();
        let line = encode_row(&record.row());

        tokio::task::spawn_blocking(move || append_line(&path, &line))
            .await
            .map_err(|e| PersistenceError::new(SINK, Error::Other(format!("spawn_blocking join: {e}"))))?
            .map_err(|e| PersistenceError::new(SINK, e))
    }

    fn name(&self) -> &str {
        SINK
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = String::new();
    if file.metadata()?.len() == 0 {
        out.push_str(&encode_row(&ContactRecord::HEADER));
    }
    out.push_str(line);
    file.write_all(out.as_bytes())?;
    file.flush()
}

/// One CRLF-terminated record. Fields are quoted only when they contain
/// a delimiter, a quote or a line break; embedded quotes are doubled.
pub fn encode_row(fields: &[&str]) -> String {
    let mut line = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    line.push_str("\r\n");
    line
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(encode_row(&["Ana", "ana@example.com"]), "Ana,ana@example.com\r\n");
    }

    #[test]
    fn special_fields_are_quoted() {
        assert_eq!(
            encode_row(&["beach, food", "say \"hi\"", "two\nlines"]),
            "\"beach, food\",\"say \"\"hi\"\"\",\"two\nlines\"\r\n"
        );
    }

    #[test]
    fn empty_field_stays_empty() {
        assert_eq!(encode_row(&["", "x"]), ",x\r\n");
    }
}
