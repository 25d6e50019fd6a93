//! Chat input area component.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonSize, ButtonVariant, SendIcon};
use crate::ui::state::ChatContext;

/// Message input with HTMX form submission.
///
/// Posts to `/api/chat` and swaps the returned chat window in place; without
/// HTMX the form posts normally and the server redirects back to the page.
/// The hidden `conversation_id` is empty until the first message creates a
/// conversation. Enter submits, Shift+Enter keeps the newline.
#[component]
pub fn UserInput() -> impl IntoView {
    let chat = ChatContext::expect();
    let conversation_id = chat.active_id().unwrap_or_default();
    let closed = chat.is_closed();

    view! {
        <div class="user-input border-t border-panelBorder p-4 bg-panel/50 backdrop-blur-sm">
            <form
                class="flex gap-2"
                action="/api/chat"
                method="post"
                hx-post="/api/chat"
                hx-target="#chat-window"
                hx-swap="outerHTML"
                hx-disabled-elt="find textarea, find button"
                x-data="{ message: '' }"
            >
                <input type="hidden" name="conversation_id" value=conversation_id />

                <div class="flex-1 relative">
                    <textarea
                        name="message"
                        placeholder="Type your message..."
                        class="w-full min-h-[44px] max-h-[200px] px-4 py-3 rounded-xl \
                               border border-panelBorder bg-background text-textPrimary \
                               placeholder:text-textMuted resize-none \
                               focus:outline-none focus:ring-2 focus:ring-primary focus:border-transparent"
                        rows="1"
                        x-model="message"
                        x-on:keydown.enter="if (!$event.shiftKey) { $event.preventDefault(); if (message.trim()) $el.form.requestSubmit() }"
                        x-on:input="$el.style.height = 'auto'; $el.style.height = Math.min($el.scrollHeight, 200) + 'px'"
                        disabled=closed
                        required
                    />
                </div>

                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Icon
                    button_type="submit"
                    label="Send message"
                    disabled=closed
                    class="shrink-0 h-11 w-11 rounded-xl"
                >
                    <SendIcon class="h-5 w-5" />
                </Button>
            </form>

            {if closed {
                view! {
                    <p class="closed-notice text-xs text-warning mt-2 text-center">
                        "This conversation has been closed"
                    </p>
                }
                    .into_any()
            } else {
                view! {
                    <p class="text-xs text-textMuted mt-2 text-center">
                        "Press Enter to send, Shift+Enter for new line"
                    </p>
                }
                    .into_any()
            }}
        </div>
    }
}
