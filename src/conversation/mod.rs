//! Conversation state and session storage.
//!
//! Conversations are held in memory for the lifetime of the process. Each
//! conversation owns an append-only, ordered sequence of messages whose IDs
//! are unique; every write goes through a single append entry point.
//!
//! # Architecture
//!
//! - [`Message`] / [`Sender`]: one chat turn and its author
//! - [`ConversationState`]: the ordered message sequence
//! - [`Conversation`]: shared handle with metadata and lifecycle
//! - [`ConversationStore`]: thread-safe store for all live conversations
//!
//! # Example
//!
//! ```rust
//! use support_chat::conversation::{ConversationStore, Message};
//! use support_chat::visitor::VisitorId;
//!
//! let store = ConversationStore::new();
//! let conversation = store.create(&VisitorId::new(), None);
//! conversation.append(Message::user("Hello!")).unwrap();
//!
//! assert_eq!(conversation.message_count(), 1);
//! ```

mod message;
mod state;
mod store;

pub use message::{Message, Sender};
pub use state::ConversationState;
pub use store::{
    Conversation, ConversationStore, ConversationSummary, DEFAULT_CONVERSATION_TIMEOUT,
};
