use serde::{Deserialize, Serialize};

/// Body returned to the webhook sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WebhookAck {
    Pong { msg: String },
    Processed { status: String },
}

impl WebhookAck {
    pub fn pong() -> Self {
        WebhookAck::Pong {
            msg: "pong".to_string(),
        }
    }

    pub fn processed() -> Self {
        WebhookAck::Processed {
            status: "event processed".to_string(),
        }
    }
}
