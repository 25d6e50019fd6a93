//! Chat message list component.

use leptos::prelude::*;

use super::ChatMessage;
use crate::ui::components::ScrollArea;
use crate::ui::state::ChatContext;

/// Renders the active conversation's messages in order.
///
/// Reads the shared [`ChatContext`]; each message is keyed by its ID.
#[component]
pub fn MessageList() -> impl IntoView {
    let chat = ChatContext::expect();

    view! {
        <ScrollArea id="message-list" class="message-list flex-1 px-4 py-6">
            <div class="flex flex-col gap-4" role="log" aria-live="polite" aria-label="Chat messages">
                <For
                    each=move || chat.messages()
                    key=|message| message.id.clone()
                    children=|message| view! { <ChatMessage message=message /> }
                />
            </div>
            {move || {
                (chat.message_count() == 0)
                    .then(|| {
                        view! {
                            <p class="empty-state text-center text-sm text-textMuted py-12">
                                "Ask us anything about your orders, returns, or shipping."
                            </p>
                        }
                    })
            }}
        </ScrollArea>
    }
}
