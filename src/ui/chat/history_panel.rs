//! Conversation history sidebar.

use leptos::prelude::*;

use crate::conversation::ConversationSummary;
use crate::ui::components::{Badge, BadgeVariant, ButtonVariant, ChatBubbleIcon, PlusIcon};
use crate::ui::state::ChatContext;

/// Longest last-message preview, in characters.
const PREVIEW_CHARS: usize = 60;

/// Lists recent conversations with a link to start a new one.
#[component]
pub fn ConversationHistoryPanel() -> impl IntoView {
    let chat = ChatContext::expect();
    let new_classes = format!(
        "inline-flex items-center gap-1 rounded-md px-2 py-1 text-xs {}",
        ButtonVariant::Ghost.classes()
    );

    view! {
        <aside class="history-panel hidden md:flex w-64 shrink-0 flex-col border-r border-panelBorder bg-panel/30" aria-label="Conversation history">
            <div class="flex items-center justify-between px-4 py-3 border-b border-panelBorder">
                <h3 class="text-sm font-semibold">"Conversations"</h3>
                <a href="/" class=new_classes>
                    <PlusIcon class="h-3 w-3" />
                    "New"
                </a>
            </div>
            <ul class="flex-1 overflow-y-auto p-2 space-y-1">
                <For
                    each=move || chat.history()
                    key=|summary| summary.id.clone()
                    children=move |summary| {
                        let active = chat.active_id().as_deref() == Some(summary.id.as_str());
                        view! { <HistoryEntry summary=summary active=active /> }
                    }
                />
            </ul>
            {move || {
                chat.history()
                    .is_empty()
                    .then(|| {
                        view! {
                            <p class="px-4 py-6 text-xs text-textMuted text-center">"No conversations yet"</p>
                        }
                    })
            }}
        </aside>
    }
}

/// One conversation link.
#[component]
fn HistoryEntry(summary: ConversationSummary, active: bool) -> impl IntoView {
    let href = format!("/?conversation_id={}", summary.id);
    let classes = if active {
        "history-entry flex gap-2 rounded-lg px-3 py-2 bg-primary/10"
    } else {
        "history-entry flex gap-2 rounded-lg px-3 py-2 hover:bg-panel"
    };
    let badge = if active {
        BadgeVariant::Primary
    } else {
        BadgeVariant::Secondary
    };
    let preview = summary.last_message.as_deref().map(preview);
    let current = active.then_some("page");

    view! {
        <li>
            <a href=href class=classes aria-current=current>
                <ChatBubbleIcon class="mt-0.5 shrink-0 text-textMuted" />
                <div class="min-w-0 flex-1">
                    <div class="flex items-center justify-between gap-2">
                        <span class="truncate text-sm font-medium">{summary.title}</span>
                        <Badge variant=badge>{summary.message_count}</Badge>
                    </div>
                    {preview.map(|text| view! { <p class="truncate text-xs text-textMuted">{text}</p> })}
                </div>
            </a>
        </li>
    }
}

/// Shorten `text` to [`PREVIEW_CHARS`] characters, appending an ellipsis.
fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(PREVIEW_CHARS).collect();
    short.push('\u{2026}');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("short"), "short");

        let long = "é".repeat(PREVIEW_CHARS + 5);
        let short = preview(&long);
        assert_eq!(short.chars().count(), PREVIEW_CHARS + 1);
        assert!(short.ends_with('\u{2026}'));
    }
}
