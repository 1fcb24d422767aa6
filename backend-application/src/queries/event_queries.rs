use tracing::error;

use backend_domain::{EventDump, EventRecord};

use crate::{AppError, AppState};

pub async fn list_events(state: &AppState) -> Result<Vec<EventRecord>, AppError> {
    state.event_repo.list_all_by_recency().await.map_err(|err| {
        error!("failed to fetch events: {}", err);
        AppError::Internal(err)
    })
}

pub async fn check_events(state: &AppState) -> Result<EventDump, AppError> {
    let records = list_events(state).await?;
    Ok(EventDump::from(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    use crate::test_support::{failing_state, recording_state};

    #[tokio::test]
    async fn check_reports_count_alongside_records() {
        let (state, _repo) = recording_state();
        let base = Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap();
        for (idx, branch) in ["main", "dev"].iter().enumerate() {
            let record = EventRecord::push(
                format!("hash{}", idx),
                "alice",
                *branch,
                base + Duration::seconds(idx as i64),
            );
            state.event_repo.append(&record).await.expect("append");
        }

        let dump = check_events(&state).await.expect("dump");
        assert_eq!(dump.count, 2);
        assert_eq!(dump.data[0].to_branch, "dev");
    }

    #[tokio::test]
    async fn listing_fails_cleanly_when_storage_is_down() {
        let state = failing_state();
        let err = list_events(&state).await.expect_err("storage down");
        assert!(matches!(err, AppError::Internal(_)));
    }
}
