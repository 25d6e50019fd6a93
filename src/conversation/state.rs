//! Append-only ordered message sequence.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Message;
use crate::error::{ChatError, Result};

/// Ordered record of all messages in a conversation.
///
/// Insertion order is display order. Message IDs are unique and the sequence
/// is never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationState {
    messages: Vec<Message>,
    #[serde(skip)]
    ids: HashSet<String>,
}

impl ConversationState {
    /// Create an empty conversation state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state seeded with prior history.
    pub fn from_messages(messages: impl IntoIterator<Item = Message>) -> Result<Self> {
        let mut state = Self::new();
        for message in messages {
            state.append(message)?;
        }
        Ok(state)
    }

    /// Append a message at the end of the sequence.
    pub fn append(&mut self, message: Message) -> Result<()> {
        if !self.ids.insert(message.id.clone()) {
            return Err(ChatError::DuplicateMessageId(message.id));
        }
        self.messages.push(message);
        Ok(())
    }

    /// All messages in display order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The last `limit` messages, oldest first.
    #[must_use]
    pub fn tail(&self, limit: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }

    /// Most recent message, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Whether a message with this ID is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<'de> Deserialize<'de> for ConversationState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            messages: Vec<Message>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_messages(raw.messages).map_err(serde::de::Error::custom)
    }
}
