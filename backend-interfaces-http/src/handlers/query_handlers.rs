use axum::extract::State;
use axum::Json;

use backend_application::queries::event_queries;
use backend_application::AppState;
use backend_domain::{EventDump, EventRecord};

use crate::error::HttpError;

pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventRecord>>, HttpError> {
    let events = event_queries::list_events(&state).await?;
    Ok(Json(events))
}

pub async fn check_events(State(state): State<AppState>) -> Result<Json<EventDump>, HttpError> {
    let dump = event_queries::check_events(&state).await?;
    Ok(Json(dump))
}
