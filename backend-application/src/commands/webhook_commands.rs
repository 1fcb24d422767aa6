use chrono::Utc;
use tracing::{debug, error, info, warn};

use backend_domain::{normalize, WebhookEventKind};

use crate::dtos::WebhookAck;
use crate::{AppError, AppState};

/// Normalizes one webhook delivery and appends the resulting records in order.
pub async fn process_webhook(
    state: &AppState,
    kind: &WebhookEventKind,
    body: &[u8],
) -> Result<WebhookAck, AppError> {
    state.metrics.record_webhook_request();
    if *kind == WebhookEventKind::Ping {
        info!("webhook ping received");
        return Ok(WebhookAck::pong());
    }

    let records = normalize(kind, body, Utc::now()).map_err(|err| {
        warn!(event = kind.as_str(), "rejected webhook payload: {}", err);
        state.metrics.record_webhook_error();
        AppError::from(err)
    })?;

    if records.is_empty() {
        debug!(event = kind.as_str(), "ignored webhook event");
        state.metrics.record_ignored();
        return Ok(WebhookAck::processed());
    }

    for record in &records {
        if let Err(err) = state.event_repo.append(record).await {
            error!(action = %record.action, "failed to store event: {}", err);
            state.metrics.record_webhook_error();
            return Err(AppError::Internal(err));
        }
        state.metrics.record_stored();
        info!(
            action = %record.action,
            author = %record.author,
            to_branch = %record.to_branch,
            "event stored"
        );
    }

    Ok(WebhookAck::processed())
}
