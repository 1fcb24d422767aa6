use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::{info_span, Instrument};

use backend_application::commands::webhook_commands;
use backend_application::dtos::WebhookAck;
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::{delivery_id, event_kind};

pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, HttpError> {
    let kind = event_kind(&headers);
    let span = info_span!(
        "webhook",
        event = %kind.as_str(),
        delivery = %delivery_id(&headers)
    );

    let ack = webhook_commands::process_webhook(&state, &kind, &body)
        .instrument(span)
        .await?;
    Ok(Json(ack))
}
