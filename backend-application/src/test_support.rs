use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;

use backend_domain::{EventRecord, EventRepository, HealthCheckService, RuntimeConfig};

use crate::AppState;

/// Keeps appended records in memory. With `accept_limit` set, every append
/// past that many fails.
#[derive(Default)]
pub struct RecordingRepository {
    records: Mutex<Vec<EventRecord>>,
    accept_limit: Option<usize>,
}

impl RecordingRepository {
    pub fn accepting(limit: usize) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            accept_limit: Some(limit),
        }
    }

    pub fn records(&self) -> Vec<EventRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn appends(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl EventRepository for RecordingRepository {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn append(&self, record: &EventRecord) -> anyhow::Result<()> {
        let mut records = self.records.lock().unwrap();
        if self.accept_limit.is_some_and(|limit| records.len() >= limit) {
            return Err(anyhow!("insert rejected"));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn list_all_by_recency(&self) -> anyhow::Result<Vec<EventRecord>> {
        let mut records = self.records();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct FailingRepository;

#[async_trait]
impl EventRepository for FailingRepository {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Err(anyhow!("connection refused"))
    }

    async fn append(&self, _record: &EventRecord) -> anyhow::Result<()> {
        Err(anyhow!("connection refused"))
    }

    async fn list_all_by_recency(&self) -> anyhow::Result<Vec<EventRecord>> {
        Err(anyhow!("connection refused"))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Err(anyhow!("connection refused"))
    }
}

struct AlwaysHealthy;

#[async_trait]
impl HealthCheckService for AlwaysHealthy {
    async fn check_database(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

fn test_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        max_body_bytes: 1024 * 1024,
        request_timeout_seconds: 5,
    }
}

pub fn recording_state() -> (AppState, Arc<RecordingRepository>) {
    let repo = Arc::new(RecordingRepository::default());
    let state = AppState::new(test_config(), repo.clone(), Arc::new(AlwaysHealthy));
    (state, repo)
}

pub fn flaky_state(accept_limit: usize) -> (AppState, Arc<RecordingRepository>) {
    let repo = Arc::new(RecordingRepository::accepting(accept_limit));
    let state = AppState::new(test_config(), repo.clone(), Arc::new(AlwaysHealthy));
    (state, repo)
}

pub fn failing_state() -> AppState {
    AppState::new(test_config(), Arc::new(FailingRepository), Arc::new(AlwaysHealthy))
}
