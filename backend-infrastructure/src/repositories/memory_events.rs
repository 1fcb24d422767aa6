use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::{EventRecord, EventRepository};

/// Process-local event store. Backs `storage = "memory"` and the HTTP tests.
#[derive(Default)]
pub struct InMemoryEventRepository {
    records: RwLock<Vec<EventRecord>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn append(&self, record: &EventRecord) -> Result<()> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn list_all_by_recency(&self) -> Result<Vec<EventRecord>> {
        let mut records = self.records.read().await.clone();
        // sort_by is stable, so equal timestamps stay in append order
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend_domain::EventAction;
    use chrono::{Duration, TimeZone, Utc};

    #[tokio::test]
    async fn lists_newest_first() {
        let repo = InMemoryEventRepository::new();
        let base = Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap();
        let r1 = EventRecord::push("h1", "alice", "main", base);
        let r2 = EventRecord::push("h2", "alice", "main", base + Duration::seconds(1));
        let r3 = EventRecord::push("h3", "alice", "main", base + Duration::seconds(2));
        for record in [&r1, &r2, &r3] {
            repo.append(record).await.expect("append");
        }

        let listed = repo.list_all_by_recency().await.expect("list");
        assert_eq!(listed, vec![r3, r2, r1]);
    }

    #[tokio::test]
    async fn equal_timestamps_keep_append_order() {
        let repo = InMemoryEventRepository::new();
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap();
        let older = EventRecord::push("h0", "carol", "dev", ts - Duration::seconds(5));
        let mut opened = EventRecord::push("h1", "bob", "main", ts);
        opened.action = EventAction::PullRequest;
        opened.from_branch = Some("feature".to_string());
        let merged = opened.with_action(EventAction::Merge);

        repo.append(&older).await.expect("append");
        repo.append(&opened).await.expect("append");
        repo.append(&merged).await.expect("append");

        let actions: Vec<_> = repo
            .list_all_by_recency()
            .await
            .expect("list")
            .into_iter()
            .map(|record| record.action)
            .collect();
        assert_eq!(
            actions,
            vec![EventAction::PullRequest, EventAction::Merge, EventAction::Push]
        );
    }

    #[tokio::test]
    async fn concurrent_appends_are_all_kept() {
        let repo = std::sync::Arc::new(InMemoryEventRepository::new());
        let ts = Utc::now();
        let mut handles = Vec::new();
        for idx in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                let record = EventRecord::push(format!("h{}", idx), "alice", "main", ts);
                repo.append(&record).await
            }));
        }
        for handle in handles {
            handle.await.expect("join").expect("append");
        }
        assert_eq!(repo.len().await, 16);
    }
}
