//! Error types for the chat widget.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors raised while updating or serving conversations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// No conversation with this ID exists.
    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),

    /// The conversation was closed and no longer accepts messages.
    #[error("Conversation is closed: {0}")]
    ConversationClosed(String),

    /// A message with this ID is already part of the conversation.
    #[error("Duplicate message id: {0}")]
    DuplicateMessageId(String),

    /// Submitted message was blank.
    #[error("Message cannot be empty")]
    EmptyMessage,

    /// Submitted message exceeded the configured length.
    #[error("Message exceeds {limit} characters")]
    MessageTooLong {
        /// Maximum accepted length in characters.
        limit: usize,
    },

    /// The reply collaborator failed to produce an answer.
    #[error("Assistant error: {0}")]
    Assistant(String),
}

impl ChatError {
    /// HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ConversationNotFound(_) => StatusCode::NOT_FOUND,
            Self::ConversationClosed(_) | Self::DuplicateMessageId(_) => StatusCode::CONFLICT,
            Self::EmptyMessage | Self::MessageTooLong { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Assistant(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(
            name: "chat.request.rejected",
            status = status.as_u16(),
            error = %self,
            "Chat request rejected"
        );
        (status, self.to_string()).into_response()
    }
}

/// Result type alias for chat operations.
pub type Result<T> = std::result::Result<T, ChatError>;
