// Event entity
// One normalized row per push, pull request or merge notification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{EventAction, RequestId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub request_id: RequestId,
    pub author: String,
    pub action: EventAction,
    pub from_branch: Option<String>,
    pub to_branch: String,
    pub timestamp: DateTime<Utc>,
}

impl EventRecord {
    pub fn push(
        request_id: impl Into<String>,
        author: impl Into<String>,
        to_branch: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            request_id: RequestId::Commit(request_id.into()),
            author: author.into(),
            action: EventAction::Push,
            from_branch: None,
            to_branch: to_branch.into(),
            timestamp,
        }
    }

    /// Copy of this record under a different action, as emitted for merged pull requests.
    pub fn with_action(&self, action: EventAction) -> Self {
        Self {
            action,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDump {
    pub count: usize,
    pub data: Vec<EventRecord>,
}

impl From<Vec<EventRecord>> for EventDump {
    fn from(data: Vec<EventRecord>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
