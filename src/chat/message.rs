//! Transcript entries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transcript entry id: epoch milliseconds plus a random suffix.
///
/// Ids double as render keys, so they must not repeat within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    pub fn generate(timestamp_ms: i64) -> Self {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        MessageId(format!("{}-{}", timestamp_ms, &suffix[..11]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    User,
    Agent,
}

/// A transcript entry. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub author: Author,
    #[serde(default)]
    pub suggested_actions: Vec<String>,
    #[serde(default)]
    pub documentation: Option<String>,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), Author::User, Vec::new(), None)
    }

    pub fn agent(
        text: impl Into<String>,
        suggested_actions: Vec<String>,
        documentation: Option<String>,
    ) -> Self {
        Self::new(text.into(), Author::Agent, suggested_actions, documentation)
    }

    fn new(
        text: String,
        author: Author,
        suggested_actions: Vec<String>,
        documentation: Option<String>,
    ) -> Self {
        let timestamp = chrono::Utc::now().timestamp_millis();
        Self {
            id: MessageId::generate(timestamp),
            text,
            author,
            suggested_actions,
            documentation,
            timestamp,
        }
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}
