//! Chat header component.

use leptos::prelude::*;

use crate::ui::components::{Avatar, Badge, BadgeVariant, BotIcon};

/// Chat header with the assistant's name and status.
#[component]
pub fn ChatHeader(
    /// Assistant display name.
    #[prop(into)]
    assistant_name: String,
) -> impl IntoView {
    view! {
        <header class="flex items-center justify-between px-4 py-3 border-b border-panelBorder bg-panel/50 backdrop-blur-sm">
            <div class="flex items-center gap-2">
                <Avatar label="Assistant" class="bg-primary/10 text-primary">
                    <BotIcon class="h-5 w-5" />
                </Avatar>
                <h2 class="font-semibold text-lg">{assistant_name}</h2>
            </div>

            <Badge variant=BadgeVariant::Success>
                <span id="chat-status" class="text-xs">"Online"</span>
            </Badge>
        </header>
    }
}
