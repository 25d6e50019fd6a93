//! Chat window layout.

use leptos::prelude::*;

use super::{ConversationHistoryPanel, MessageList, UserInput};

/// History panel beside the message list and input.
///
/// `#chat-window` is the element HTMX replaces after each submission.
#[component]
pub fn ChatWindow() -> impl IntoView {
    view! {
        <div id="chat-window" class="chat-window flex flex-1 min-h-0">
            <ConversationHistoryPanel />
            <div class="chat-main flex flex-1 min-w-0 flex-col">
                <MessageList />
                <UserInput />
            </div>
        </div>
    }
}
