use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::AppState;
use backend_domain::{DbConfig, EventRepository, StorageBackend};
use backend_infrastructure::{
    AppConfig, ClickhouseEventRepository, DefaultHealthService, InMemoryEventRepository,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config()?;
        info!(
            bind_addr = %runtime_config.bind_addr,
            storage = db_config.storage.as_str(),
            clickhouse_url = %db_config.clickhouse_url,
            clickhouse_database = %db_config.clickhouse_database,
            clickhouse_user = %db_config.clickhouse_user.as_deref().unwrap_or("<none>"),
            clickhouse_password_set = db_config.clickhouse_password.is_some(),
            "config loaded"
        );

        let event_repo = build_event_repository(&db_config);
        event_repo.ensure_schema().await?;

        let health_service = Arc::new(DefaultHealthService::new(event_repo.clone()));
        let state = AppState::new(runtime_config, event_repo, health_service);

        Ok(Self { state })
    }
}

fn build_event_repository(config: &DbConfig) -> Arc<dyn EventRepository> {
    match config.storage {
        StorageBackend::Clickhouse => Arc::new(ClickhouseEventRepository::from_config(config)),
        StorageBackend::Memory => {
            info!("using in-memory event store; events are lost on restart");
            Arc::new(InMemoryEventRepository::new())
        }
    }
}
