use ta_domain::error::PersistenceError;
use ta_domain::profile::ContactRecord;

/// A destination a captured lead can be appended to.
#[async_trait::async_trait]
pub trait LeadSink: Send + Sync {
    /// Append one record. Implementations never retry.
    async fn append(&self, record: &ContactRecord) -> Result<(), PersistenceError>;

    /// Short name used in logs and trace events.
    fn name(&self) -> &str;
}
