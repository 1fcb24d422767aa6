// Event action value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventAction {
    Push,
    PullRequest,
    Merge,
}

impl EventAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventAction::Push => "PUSH",
            EventAction::PullRequest => "PULL_REQUEST",
            EventAction::Merge => "MERGE",
        }
    }

    /// Pushes target a single branch; everything else moves work between two.
    pub fn has_source_branch(&self) -> bool {
        !matches!(self, EventAction::Push)
    }
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PUSH" => Ok(EventAction::Push),
            "PULL_REQUEST" => Ok(EventAction::PullRequest),
            "MERGE" => Ok(EventAction::Merge),
            other => Err(anyhow::anyhow!("unknown event action '{}'", other)),
        }
    }
}
