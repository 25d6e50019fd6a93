//! Conversation handles and the in-memory conversation store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::message::short_id;
use super::{ConversationState, Message};
use crate::error::{ChatError, Result};
use crate::visitor::VisitorId;

/// Default idle timeout before a conversation is torn down (30 minutes).
pub const DEFAULT_CONVERSATION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// A single chat session.
///
/// Cloning is cheap; all clones share the same underlying state. Writes go
/// through [`Conversation::append`].
#[derive(Debug, Clone)]
pub struct Conversation {
    inner: Arc<ConversationInner>,
}

#[derive(Debug)]
struct ConversationInner {
    /// Unique conversation identifier.
    id: String,
    /// Visitor that created the conversation.
    owner: VisitorId,
    /// Display title.
    title: String,
    /// Creation time.
    created_at: DateTime<Utc>,
    /// Mutable part; one lock so closing and appending are ordered.
    body: RwLock<ConversationBody>,
}

#[derive(Debug)]
struct ConversationBody {
    /// Closed conversations reject new messages.
    active: bool,
    /// Time of the last append.
    updated_at: DateTime<Utc>,
    /// Ordered messages.
    state: ConversationState,
}

/// Listing entry for a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSummary {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_active: bool,
    pub message_count: usize,
    pub last_message: Option<String>,
    pub last_message_time: Option<String>,
}

impl Conversation {
    fn new(
        id: String,
        owner: VisitorId,
        title: Option<String>,
        state: ConversationState,
    ) -> Self {
        let now = Utc::now();
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("Conversation {}", now.format("%Y-%m-%d %H:%M")));
        Self {
            inner: Arc::new(ConversationInner {
                id,
                owner,
                title,
                created_at: now,
                body: RwLock::new(ConversationBody {
                    active: true,
                    updated_at: now,
                    state,
                }),
            }),
        }
    }

    /// Get the conversation ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Visitor that owns the conversation.
    #[must_use]
    pub fn owner(&self) -> &VisitorId {
        &self.inner.owner
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.inner.title
    }

    /// Whether the conversation still accepts messages.
    #[must_use]
    pub fn is_active(&self) -> bool {
        read(&self.inner.body).active
    }

    /// Append a message.
    ///
    /// Fails when the conversation is closed or the message ID is taken.
    pub fn append(&self, message: Message) -> Result<()> {
        let id = message.id.clone();
        let sender = message.sender;
        {
            let mut body = write(&self.inner.body);
            if !body.active {
                return Err(ChatError::ConversationClosed(self.inner.id.clone()));
            }
            body.state.append(message)?;
            body.updated_at = Utc::now();
        }

        tracing::debug!(
            name: "chat.message.appended",
            conversation_id = %self.inner.id,
            message_id = %id,
            sender = %sender,
            "Message appended"
        );
        Ok(())
    }

    /// Mark the conversation as inactive.
    pub fn close(&self) {
        write(&self.inner.body).active = false;
    }

    /// Copy of the current message sequence.
    #[must_use]
    pub fn snapshot(&self) -> ConversationState {
        read(&self.inner.body).state.clone()
    }

    /// The last `limit` messages, oldest first.
    #[must_use]
    pub fn history(&self, limit: usize) -> Vec<Message> {
        read(&self.inner.body).state.tail(limit).to_vec()
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        read(&self.inner.body).state.len()
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        read(&self.inner.body).updated_at
    }

    /// Build a listing entry.
    #[must_use]
    pub fn summary(&self) -> ConversationSummary {
        let body = read(&self.inner.body);
        let last = body.state.last();
        ConversationSummary {
            id: self.inner.id.clone(),
            title: self.inner.title.clone(),
            created_at: self.inner.created_at.to_rfc3339(),
            updated_at: body.updated_at.to_rfc3339(),
            is_active: body.active,
            message_count: body.state.len(),
            last_message: last.map(|m| m.text.clone()),
            last_message_time: last.map(|m| m.timestamp.clone()),
        }
    }

    /// Check if the conversation has been idle longer than `timeout`.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        // Negative durations (clock skew) never expire.
        (Utc::now() - self.updated_at())
            .to_std()
            .is_ok_and(|idle| idle > timeout)
    }
}

/// Thread-safe store for all live conversations.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    inner: Arc<RwLock<HashMap<String, Conversation>>>,
}

impl ConversationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty conversation owned by `owner`.
    pub fn create(&self, owner: &VisitorId, title: Option<String>) -> Conversation {
        self.insert(Conversation::new(
            short_id("conv"),
            owner.clone(),
            title,
            ConversationState::new(),
        ))
    }

    /// Create a conversation seeded with prior history.
    pub fn create_with_history(
        &self,
        owner: &VisitorId,
        title: Option<String>,
        messages: Vec<Message>,
    ) -> Result<Conversation> {
        let state = ConversationState::from_messages(messages)?;
        Ok(self.insert(Conversation::new(
            short_id("conv"),
            owner.clone(),
            title,
            state,
        )))
    }

    fn insert(&self, conversation: Conversation) -> Conversation {
        write(&self.inner).insert(conversation.id().to_string(), conversation.clone());
        tracing::info!(
            name: "chat.conversation.created",
            conversation_id = %conversation.id(),
            "Conversation created"
        );
        conversation
    }

    /// Get a conversation by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Conversation> {
        read(&self.inner).get(id).cloned()
    }

    /// Get a conversation by ID or fail with [`ChatError::ConversationNotFound`].
    pub fn require(&self, id: &str) -> Result<Conversation> {
        self.get(id)
            .ok_or_else(|| ChatError::ConversationNotFound(id.to_string()))
    }

    /// Get a conversation only if `owner` created it.
    ///
    /// Someone else's conversation is reported as not found.
    pub fn require_owned(&self, id: &str, owner: &VisitorId) -> Result<Conversation> {
        self.get(id)
            .filter(|conversation| conversation.owner() == owner)
            .ok_or_else(|| ChatError::ConversationNotFound(id.to_string()))
    }

    /// Append a message to the conversation with this ID.
    pub fn append(&self, id: &str, message: Message) -> Result<()> {
        self.require(id)?.append(message)
    }

    /// Remove a conversation by ID.
    pub fn remove(&self, id: &str) -> Option<Conversation> {
        let removed = write(&self.inner).remove(id);
        if removed.is_some() {
            tracing::info!(name: "chat.conversation.deleted", conversation_id = %id, "Conversation deleted");
        }
        removed
    }

    /// Close a conversation. Returns `false` if it does not exist.
    pub fn close(&self, id: &str) -> bool {
        match self.get(id) {
            Some(conversation) => {
                conversation.close();
                tracing::info!(name: "chat.conversation.closed", conversation_id = %id, "Conversation closed");
                true
            }
            None => false,
        }
    }

    /// Active conversations of `owner`, most recently updated first.
    #[must_use]
    pub fn summaries(&self, owner: &VisitorId, limit: usize) -> Vec<ConversationSummary> {
        let mut active: Vec<Conversation> = read(&self.inner)
            .values()
            .filter(|c| c.owner() == owner && c.is_active())
            .cloned()
            .collect();
        active.sort_by(|a, b| {
            b.updated_at()
                .cmp(&a.updated_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        active.iter().take(limit).map(Conversation::summary).collect()
    }

    /// Get the number of live conversations.
    #[must_use]
    pub fn len(&self) -> usize {
        read(&self.inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove conversations that have been idle longer than the timeout.
    ///
    /// Returns the number of conversations removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = write(&self.inner);
        let before = guard.len();
        guard.retain(|_, conversation| !conversation.is_expired_with_timeout(timeout));
        before - guard.len()
    }
}
