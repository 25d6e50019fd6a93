//! Reply collaborators for the chat widget.
//!
//! The widget itself only renders conversations. Replies authored by the
//! `ai` sender are produced by an [`Assistant`] implementation; the bundled
//! [`KeywordAssistant`] answers common support questions from fixed rules.

mod keyword;

use async_trait::async_trait;

use crate::conversation::Message;
use crate::error::Result;

pub use keyword::{Intent, KeywordAssistant};

/// Produces the assistant's reply to a user message.
#[async_trait]
pub trait Assistant: Send + Sync + std::fmt::Debug {
    /// Label for what `text` asks about, recorded on both sides of the exchange.
    fn classify(&self, _text: &str) -> Option<String> {
        None
    }

    /// Reply to `text`, given the conversation so far (oldest first).
    async fn reply(&self, history: &[Message], text: &str) -> Result<String>;
}
