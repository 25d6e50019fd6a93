//! Server-side render entry points.
//!
//! Each render pass creates a fresh reactive owner, provides a
//! [`ChatContext`] built from a [`ChatSnapshot`], renders to a string, and
//! drops the owner again.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::ui::app::App;
use crate::ui::chat::ChatWindow;
use crate::ui::state::{ChatContext, ChatSnapshot};

/// Run `render` with a chat context provided.
fn with_chat<R>(snapshot: ChatSnapshot, render: impl FnOnce() -> R) -> R {
    let owner = Owner::new();
    owner.with(|| {
        ChatContext::new(snapshot).provide();
        render()
    })
}

/// Render the full support page.
#[must_use]
pub fn render_page(widget: &WidgetConfig, snapshot: ChatSnapshot) -> String {
    let widget = widget.clone();
    with_chat(snapshot, move || view! { <App widget=widget /> }.to_html())
}

/// Render the chat window fragment swapped in by HTMX.
#[must_use]
pub fn render_chat_window(snapshot: ChatSnapshot) -> String {
    with_chat(snapshot, || view! { <ChatWindow /> }.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{ConversationState, Message, Sender};
    use crate::ui::chat::MessageList;

    fn example() -> ConversationState {
        ConversationState::from_messages([
            Message::with_parts("1", Sender::User, "Hi", "10:00"),
            Message::with_parts("2", Sender::Ai, "Hello! How can I help?", "10:00"),
        ])
        .unwrap()
    }

    fn sender_order(html: &str) -> Vec<&str> {
        html.match_indices("data-sender=\"")
            .map(|(i, m)| {
                let rest = &html[i + m.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect()
    }

    fn id_order(html: &str) -> Vec<&str> {
        html.match_indices("data-message-id=\"")
            .map(|(i, m)| {
                let rest = &html[i + m.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect()
    }

    #[test]
    fn test_list_renders_blocks_in_order() {
        let html = render_chat_window(ChatSnapshot {
            state: example(),
            ..ChatSnapshot::default()
        });

        assert_eq!(id_order(&html), ["1", "2"]);
        assert_eq!(sender_order(&html), ["user", "ai"]);
        assert!(html.contains("Hello! How can I help?"));
    }

    #[test]
    fn test_empty_list_renders_no_blocks() {
        let html = render_chat_window(ChatSnapshot::default());

        assert!(id_order(&html).is_empty());
        assert!(html.contains("empty-state"));
        assert!(html.contains("No conversations yet"));
    }

    #[test]
    fn test_append_rerenders_with_new_block_last() {
        let owner = Owner::new();
        owner.with(|| {
            let chat = ChatContext::new(ChatSnapshot {
                state: example(),
                ..ChatSnapshot::default()
            });
            chat.provide();

            let before = view! { <MessageList /> }.to_html();
            chat.append(Message::with_parts("3", Sender::User, "Track order 42", "10:01"))
                .unwrap();
            let after = view! { <MessageList /> }.to_html();

            assert_eq!(id_order(&before), ["1", "2"]);
            assert_eq!(id_order(&after), ["1", "2", "3"]);
            assert!(after.contains("Track order 42"));
            assert!(!after.contains("empty-state"));
        });
    }

    #[test]
    fn test_page_always_renders_header() {
        let widget = WidgetConfig::default();

        for state in [ConversationState::new(), example()] {
            let html = render_page(
                &widget,
                ChatSnapshot {
                    state,
                    ..ChatSnapshot::default()
                },
            );
            assert!(html.starts_with("<!DOCTYPE html>") || html.starts_with("<!doctype html>"));
            assert!(html.contains("E-Commerce Customer Support"));
            assert!(html.contains("Your AI-powered shopping assistant"));
            assert!(html.contains("Support Assistant"));
            assert!(html.contains("id=\"chat-window\""));
        }
    }

    #[test]
    fn test_closed_conversation_disables_input() {
        let html = render_chat_window(ChatSnapshot {
            state: example(),
            active_id: Some("conv_abc".into()),
            closed: true,
            ..ChatSnapshot::default()
        });

        assert!(html.contains("This conversation has been closed"));
        assert!(html.contains("value=\"conv_abc\""));
    }
}
