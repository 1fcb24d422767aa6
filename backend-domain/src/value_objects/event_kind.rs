// Webhook event kind value object
// Closed set of event types the receiver understands, plus a catch-all.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEventKind {
    Ping,
    Push,
    PullRequest,
    Other(String),
}

impl WebhookEventKind {
    pub fn as_str(&self) -> &str {
        match self {
            WebhookEventKind::Ping => "ping",
            WebhookEventKind::Push => "push",
            WebhookEventKind::PullRequest => "pull_request",
            WebhookEventKind::Other(name) => name.as_str(),
        }
    }
}

impl From<&str> for WebhookEventKind {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "ping" => WebhookEventKind::Ping,
            "push" => WebhookEventKind::Push,
            "pull_request" => WebhookEventKind::PullRequest,
            other => WebhookEventKind::Other(other.to_string()),
        }
    }
}
