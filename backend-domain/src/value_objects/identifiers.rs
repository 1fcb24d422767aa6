// Identifier value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// Commit hash for pushes, platform pull request id otherwise.
/// Keeps the JSON type the platform sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    PullRequest(u64),
    Commit(String),
}

impl RequestId {
    /// Rebuilds an id from its stored text form; only pushes carry commit hashes.
    pub fn from_stored(value: &str, is_commit: bool) -> Self {
        if !is_commit {
            if let Ok(id) = value.parse::<u64>() {
                return RequestId::PullRequest(id);
            }
        }
        RequestId::Commit(value.to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::PullRequest(id) => write!(f, "{}", id),
            RequestId::Commit(hash) => f.write_str(hash),
        }
    }
}
