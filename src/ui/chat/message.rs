//! Single chat message component.

use leptos::prelude::*;

use crate::conversation::{Message, Sender};
use crate::ui::components::{Avatar, BotIcon, UserIcon};

/// Renders one message bubble.
///
/// The block is classified by sender (`message user` / `message ai`) and
/// carries the message ID so re-rendered lists keep stable identities.
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let sender = message.sender;

    let (row, bubble, avatar) = match sender {
        Sender::User => (
            "flex-row-reverse",
            "bg-primary text-white rounded-br-sm",
            "bg-primary/10 text-primary",
        ),
        Sender::Ai => (
            "flex-row",
            "bg-surfaceVariant text-textPrimary rounded-bl-sm",
            "bg-panel text-textMuted border border-panelBorder",
        ),
    };

    let classes = format!("message {} flex items-end gap-2 {row}", sender.as_str());
    let bubble_classes = format!("message-body max-w-[75%] rounded-2xl px-4 py-2 {bubble}");
    let icon = match sender {
        Sender::User => view! { <UserIcon /> }.into_any(),
        Sender::Ai => view! { <BotIcon /> }.into_any(),
    };

    view! {
        <div class=classes data-message-id=message.id data-sender=sender.as_str()>
            <Avatar label=sender.label() class=avatar>
                {icon}
            </Avatar>
            <div class=bubble_classes>
                <div class="message-text whitespace-pre-wrap break-words">{message.text}</div>
                <span class="timestamp block mt-1 text-[11px] opacity-70">{message.timestamp}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(message: Message) -> String {
        let owner = Owner::new();
        owner.with(|| view! { <ChatMessage message=message /> }.to_html())
    }

    #[test]
    fn test_renders_text_timestamp_and_sender() {
        let html = render(Message::with_parts(
            "1",
            Sender::User,
            "Where is my order?",
            "10:00",
        ));

        assert!(html.contains("Where is my order?"));
        assert!(html.contains("10:00"));
        assert!(html.contains("class=\"message user "));
        assert!(html.contains("data-sender=\"user\""));
        assert!(html.contains("data-message-id=\"1\""));
        assert!(html.contains("aria-label=\"You\""));
    }

    #[test]
    fn test_ai_classification() {
        let html = render(Message::with_parts("2", Sender::Ai, "Hello!", "10:01"));

        assert!(html.contains("class=\"message ai "));
        assert!(html.contains("data-sender=\"ai\""));
        assert!(!html.contains("data-sender=\"user\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(Message::with_parts(
            "3",
            Sender::User,
            "<script>alert(1)</script>",
            "10:02",
        ));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let message = Message::with_parts("4", Sender::Ai, "Same", "09:30");
        assert_eq!(render(message.clone()), render(message));
    }
}
