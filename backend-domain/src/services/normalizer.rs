// Event normalizer
// Maps raw webhook bodies onto EventRecords. No I/O happens here; the caller
// supplies the creation instant and persists whatever comes back.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::entities::{EventRecord, PullRequestPayload, PushPayload};
use crate::value_objects::{EventAction, RequestId, WebhookEventKind};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("malformed {event} payload: {source}")]
    MalformedPayload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub fn normalize(
    kind: &WebhookEventKind,
    body: &[u8],
    now: DateTime<Utc>,
) -> Result<Vec<EventRecord>, NormalizeError> {
    match kind {
        WebhookEventKind::Push => {
            let payload: PushPayload = decode("push", body)?;
            Ok(vec![normalize_push(&payload, now)])
        }
        WebhookEventKind::PullRequest => {
            let payload: PullRequestPayload = decode("pull_request", body)?;
            Ok(normalize_pull_request(&payload, now))
        }
        WebhookEventKind::Ping | WebhookEventKind::Other(_) => Ok(Vec::new()),
    }
}

pub fn normalize_push(payload: &PushPayload, now: DateTime<Utc>) -> EventRecord {
    EventRecord::push(
        payload.after.clone(),
        payload.pusher.name.clone(),
        payload.branch(),
        now,
    )
}

pub fn normalize_pull_request(
    payload: &PullRequestPayload,
    now: DateTime<Utc>,
) -> Vec<EventRecord> {
    let pr = &payload.pull_request;
    let opened = EventRecord {
        request_id: RequestId::PullRequest(pr.id),
        author: pr.user.login.clone(),
        action: EventAction::PullRequest,
        from_branch: Some(pr.head.name.clone()),
        to_branch: pr.base.name.clone(),
        timestamp: now,
    };

    if pr.is_merged() {
        let merged = opened.with_action(EventAction::Merge);
        vec![opened, merged]
    } else {
        vec![opened]
    }
}

fn decode<T: DeserializeOwned>(event: &'static str, body: &[u8]) -> Result<T, NormalizeError> {
    serde_json::from_slice(body)
        .map_err(|source| NormalizeError::MalformedPayload { event, source })
}
