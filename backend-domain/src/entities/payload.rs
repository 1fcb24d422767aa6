// Inbound webhook payload schemas
// Only the fields the normalizer reads are declared; everything else is ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PushPayload {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub after: String,
    pub pusher: Pusher,
}

impl PushPayload {
    /// `refs/heads/main` -> `main`
    pub fn branch(&self) -> &str {
        self.git_ref.rsplit('/').next().unwrap_or(self.git_ref.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pusher {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub pull_request: PullRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    pub user: PlatformUser,
    pub head: BranchRef,
    pub base: BranchRef,
    #[serde(default)]
    pub merged: Option<bool>,
}

impl PullRequest {
    pub fn is_merged(&self) -> bool {
        self.merged.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformUser {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub name: String,
}
