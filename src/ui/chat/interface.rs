//! Top-level chat interface.

use leptos::prelude::*;

use super::{ChatHeader, ChatWindow};

/// Chat header above the chat window.
///
/// Requires a [`ChatContext`](crate::ui::state::ChatContext) in its ancestry.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ChatInterface assistant_name="Support Assistant" />
/// }
/// ```
#[component]
pub fn ChatInterface(
    /// Name shown in the chat header.
    #[prop(into)]
    assistant_name: String,
) -> impl IntoView {
    view! {
        <section class="chat-interface flex flex-col h-[calc(100vh-9rem)] bg-panel border border-panelBorder rounded-2xl overflow-hidden">
            <ChatHeader assistant_name=assistant_name />
            <ChatWindow />
        </section>
    }
}
