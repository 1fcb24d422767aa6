use axum::http::HeaderMap;
use uuid::Uuid;

use backend_domain::WebhookEventKind;

pub const EVENT_HEADER: &str = "X-GitHub-Event";
pub const DELIVERY_HEADER: &str = "X-GitHub-Delivery";

/// Missing or unreadable header falls into the ignored catch-all.
pub fn event_kind(headers: &HeaderMap) -> WebhookEventKind {
    headers
        .get(EVENT_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(WebhookEventKind::from)
        .unwrap_or_else(|| WebhookEventKind::Other(String::new()))
}

pub fn delivery_id(headers: &HeaderMap) -> String {
    headers
        .get(DELIVERY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn event_kind_reads_platform_header() {
        let mut headers = HeaderMap::new();
        headers.insert(EVENT_HEADER, HeaderValue::from_static("pull_request"));
        assert_eq!(event_kind(&headers), WebhookEventKind::PullRequest);
    }

    #[test]
    fn missing_event_header_is_ignored_kind() {
        let kind = event_kind(&HeaderMap::new());
        assert!(matches!(kind, WebhookEventKind::Other(_)));
    }

    #[test]
    fn delivery_id_falls_back_to_generated_uuid() {
        let mut headers = HeaderMap::new();
        headers.insert(DELIVERY_HEADER, HeaderValue::from_static("72d3162e-cc78"));
        assert_eq!(delivery_id(&headers), "72d3162e-cc78");

        let generated = delivery_id(&HeaderMap::new());
        assert!(Uuid::parse_str(&generated).is_ok());
    }
}
