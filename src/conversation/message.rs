//! Message records and sender classification.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The end user of the widget.
    User,
    /// The support assistant.
    Ai,
}

impl Sender {
    /// Style classification used by the renderer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Ai => "ai",
        }
    }

    /// Accessible label for the message author.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Ai => "Assistant",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One chat turn.
///
/// Messages are immutable once created. `timestamp` is a pre-formatted
/// display string and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier within a conversation.
    pub id: String,
    /// Author of the message.
    pub sender: Sender,
    /// Display text.
    pub text: String,
    /// Display timestamp.
    pub timestamp: String,
    /// Intent the assistant classified the exchange as, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

impl Message {
    /// Create a message stamped with a fresh ID and the current local time.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: generate_message_id(),
            sender,
            text: text.into(),
            timestamp: Local::now().format("%H:%M").to_string(),
            intent: None,
        }
    }

    /// Create a message from already known parts.
    pub fn with_parts(
        id: impl Into<String>,
        sender: Sender,
        text: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sender,
            text: text.into(),
            timestamp: timestamp.into(),
            intent: None,
        }
    }

    /// Tag the message with a classified intent.
    #[must_use]
    pub fn with_intent(mut self, intent: Option<String>) -> Self {
        self.intent = intent;
        self
    }

    /// Shorthand for a user-authored message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// Shorthand for an assistant-authored message.
    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(Sender::Ai, text)
    }
}

/// `msg_` followed by 12 lowercase hex digits.
fn generate_message_id() -> String {
    short_id("msg")
}

pub(crate) fn short_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &hex[..12])
}
