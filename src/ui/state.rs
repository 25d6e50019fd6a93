//! Shared chat state provided to the component tree.

use leptos::prelude::*;

use crate::conversation::{ConversationState, ConversationSummary, Message};
use crate::error::Result;

/// Plain-data input for a render pass.
#[derive(Debug, Clone, Default)]
pub struct ChatSnapshot {
    /// Messages of the active conversation.
    pub state: ConversationState,
    /// Entries for the history panel.
    pub history: Vec<ConversationSummary>,
    /// ID of the active conversation, if one exists yet.
    pub active_id: Option<String>,
    /// Whether the active conversation was closed.
    pub closed: bool,
}

/// Reactive chat context.
///
/// Components read it with [`ChatContext::expect`]. All writes to the
/// message sequence go through [`ChatContext::append`].
#[derive(Debug, Clone, Copy)]
pub struct ChatContext {
    conversation: RwSignal<ConversationState>,
    history: RwSignal<Vec<ConversationSummary>>,
    active_id: RwSignal<Option<String>>,
    closed: RwSignal<bool>,
}

impl ChatContext {
    /// Create the context inside the current reactive owner.
    #[must_use]
    pub fn new(snapshot: ChatSnapshot) -> Self {
        Self {
            conversation: RwSignal::new(snapshot.state),
            history: RwSignal::new(snapshot.history),
            active_id: RwSignal::new(snapshot.active_id),
            closed: RwSignal::new(snapshot.closed),
        }
    }

    /// Make this context available to descendants of the current owner.
    pub fn provide(self) {
        provide_context(self);
    }

    /// Fetch the context provided by an ancestor.
    ///
    /// # Panics
    ///
    /// Panics if no ancestor provided a [`ChatContext`].
    #[must_use]
    pub fn expect() -> Self {
        use_context::<Self>()
            .unwrap_or_else(|| panic!("ChatContext must be provided by an ancestor component"))
    }

    /// Append a message; the single update entry point.
    pub fn append(&self, message: Message) -> Result<()> {
        let mut outcome = Ok(());
        self.conversation.update(|state| outcome = state.append(message));
        outcome
    }

    /// Messages in display order (tracked read).
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.conversation.with(|state| state.messages().to_vec())
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        self.conversation.with(ConversationState::len)
    }

    #[must_use]
    pub fn history(&self) -> Vec<ConversationSummary> {
        self.history.get()
    }

    #[must_use]
    pub fn active_id(&self) -> Option<String> {
        self.active_id.get()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Sender;
    use crate::error::ChatError;

    #[test]
    fn test_append_through_context() {
        let owner = Owner::new();
        owner.with(|| {
            ChatContext::new(ChatSnapshot::default()).provide();
            let chat = ChatContext::expect();
            assert_eq!(chat.message_count(), 0);

            chat.append(Message::with_parts("1", Sender::User, "Hi", "10:00"))
                .unwrap();
            let err = chat
                .append(Message::with_parts("1", Sender::Ai, "dup", "10:00"))
                .unwrap_err();

            assert_eq!(err, ChatError::DuplicateMessageId("1".into()));
            assert_eq!(chat.messages().len(), 1);
            assert_eq!(chat.messages()[0].text, "Hi");
        });
    }

    #[test]
    #[should_panic(expected = "ChatContext must be provided")]
    fn test_missing_provider_panics() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = ChatContext::expect();
        });
    }
}
