use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use clickhouse::{Client, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;

use backend_domain::{DbConfig, EventAction, EventRecord, EventRepository, RequestId};

use crate::utils::{to_chrono, to_offset_datetime};

const EVENTS_TABLE: &str = "events";

#[derive(Debug, Clone, Serialize, Deserialize, Row)]
struct EventRow {
    #[serde(with = "clickhouse::serde::time::datetime64::micros")]
    timestamp: OffsetDateTime,
    seq: u64,
    request_id: String,
    author: String,
    action: String,
    from_branch: Option<String>,
    to_branch: String,
}

impl EventRow {
    fn from_record(record: &EventRecord, seq: u64) -> Self {
        Self {
            timestamp: to_offset_datetime(record.timestamp),
            seq,
            request_id: record.request_id.to_string(),
            author: record.author.clone(),
            action: record.action.as_str().to_string(),
            from_branch: record.from_branch.clone(),
            to_branch: record.to_branch.clone(),
        }
    }

    fn into_record(self) -> Result<EventRecord> {
        let action: EventAction = self.action.parse()?;
        Ok(EventRecord {
            request_id: RequestId::from_stored(&self.request_id, !action.has_source_branch()),
            author: self.author,
            action,
            from_branch: self.from_branch.filter(|_| action.has_source_branch()),
            to_branch: self.to_branch,
            timestamp: to_chrono(self.timestamp),
        })
    }
}

/// Event store on a ClickHouse MergeTree table.
///
/// Rows carry a process-assigned `seq` so that records sharing a timestamp
/// come back in the order they were appended. The sequence is seeded from the
/// table in [`EventRepository::ensure_schema`]; it assumes a single writer.
#[derive(Clone)]
pub struct ClickhouseEventRepository {
    client: Client,
    database: String,
    next_seq: Arc<AtomicU64>,
}

impl ClickhouseEventRepository {
    pub fn new(client: Client, database: String) -> Self {
        Self {
            client,
            database,
            next_seq: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn from_config(config: &DbConfig) -> Self {
        let mut client = Client::default()
            .with_url(&config.clickhouse_url)
            .with_database(&config.clickhouse_database);
        if let Some(user) = &config.clickhouse_user {
            client = client.with_user(user);
        }
        if let Some(password) = &config.clickhouse_password {
            client = client.with_password(password);
        }
        Self::new(client, config.clickhouse_database.clone())
    }
}

#[async_trait]
impl EventRepository for ClickhouseEventRepository {
    async fn ensure_schema(&self) -> Result<()> {
        let create_db = format!("CREATE DATABASE IF NOT EXISTS {}", self.database);
        self.client
            .clone()
            .with_database("default")
            .query(&create_db)
            .execute()
            .await?;

        let create_events = format!(
            r#"
CREATE TABLE IF NOT EXISTS {} (
    timestamp DateTime64(6, 'UTC'),
    seq UInt64,
    request_id String,
    author String,
    action LowCardinality(String),
    from_branch Nullable(String),
    to_branch String
) ENGINE = MergeTree
ORDER BY (timestamp, seq)
"#,
            EVENTS_TABLE
        );
        self.client.query(&create_events).execute().await?;

        let max_seq: u64 = self
            .client
            .query(&format!("SELECT max(seq) FROM {}", EVENTS_TABLE))
            .fetch_one()
            .await?;
        self.next_seq.store(max_seq + 1, Ordering::SeqCst);
        info!(
            database = %self.database,
            next_seq = max_seq + 1,
            "event schema ready"
        );
        Ok(())
    }

    async fn append(&self, record: &EventRecord) -> Result<()> {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        let mut insert = self.client.insert(EVENTS_TABLE)?;
        insert.write(&EventRow::from_record(record, seq)).await?;
        insert.end().await?;
        Ok(())
    }

    async fn list_all_by_recency(&self) -> Result<Vec<EventRecord>> {
        let query = format!(
            "SELECT timestamp, seq, request_id, author, action, from_branch, to_branch \
             FROM {} ORDER BY timestamp DESC, seq ASC",
            EVENTS_TABLE
        );
        let rows = self.client.query(&query).fetch_all::<EventRow>().await?;
        rows.into_iter().map(EventRow::into_record).collect()
    }

    async fn ping(&self) -> Result<()> {
        let _: u8 = self.client.query("SELECT toUInt8(1)").fetch_one().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn pull_request_row_round_trips_numeric_id() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 10, 0, 0).unwrap();
        let record = EventRecord {
            request_id: RequestId::PullRequest(42),
            author: "bob".to_string(),
            action: EventAction::Merge,
            from_branch: Some("feature".to_string()),
            to_branch: "main".to_string(),
            timestamp: ts,
        };
        let row = EventRow::from_record(&record, 7);
        assert_eq!(row.request_id, "42");
        assert_eq!(row.action, "MERGE");
        assert_eq!(row.into_record().expect("record"), record);
    }

    #[test]
    fn numeric_looking_commit_hash_stays_a_string() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 10, 0, 0).unwrap();
        let record = EventRecord::push("1234567", "alice", "main", ts);
        let back = EventRow::from_record(&record, 1).into_record().expect("record");
        assert_eq!(back.request_id, RequestId::Commit("1234567".to_string()));
    }

    #[test]
    fn unknown_stored_action_is_an_error() {
        let row = EventRow {
            timestamp: OffsetDateTime::UNIX_EPOCH,
            seq: 1,
            request_id: "x".to_string(),
            author: "a".to_string(),
            action: "CLOSE".to_string(),
            from_branch: None,
            to_branch: "main".to_string(),
        };
        assert!(row.into_record().is_err());
    }
}
