use async_trait::async_trait;

use crate::entities::EventRecord;

/// Append-only store of normalized webhook events.
/// There is deliberately no update or delete.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;
    async fn append(&self, record: &EventRecord) -> anyhow::Result<()>;
    /// All records, newest first; equal timestamps keep insertion order.
    async fn list_all_by_recency(&self) -> anyhow::Result<Vec<EventRecord>>;
    async fn ping(&self) -> anyhow::Result<()>;
}
