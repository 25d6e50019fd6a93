//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements so they inherit the current
//! text color.

use leptos::prelude::*;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Shared 24x24 stroke-icon frame.
#[component]
fn IconFrame(class: &'static str, children: Children) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            {children()}
        </svg>
    }
}

/// Paper-plane send icon.
#[component]
pub fn SendIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class=class>
            <line x1="22" y1="2" x2="11" y2="13" />
            <polygon points="22 2 15 22 11 13 2 9 22 2" />
        </IconFrame>
    }
}

/// End-user avatar icon.
#[component]
pub fn UserIcon(
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class=class>
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
            <circle cx="12" cy="7" r="4" />
        </IconFrame>
    }
}

/// Assistant avatar icon.
#[component]
pub fn BotIcon(
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class=class>
            <rect x="3" y="11" width="18" height="10" rx="2" />
            <circle cx="12" cy="5" r="2" />
            <path d="M12 7v4" />
            <line x1="8" y1="16" x2="8" y2="16" />
            <line x1="16" y1="16" x2="16" y2="16" />
        </IconFrame>
    }
}

/// Shopping-bag brand icon for the page header.
#[component]
pub fn BagIcon(
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class=class>
            <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z" />
            <path d="M3 6h18" />
            <path d="M16 10a4 4 0 0 1-8 0" />
        </IconFrame>
    }
}

/// Speech-bubble icon for conversation entries.
#[component]
pub fn ChatBubbleIcon(
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class=class>
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        </IconFrame>
    }
}

/// Plus icon for starting a new conversation.
#[component]
pub fn PlusIcon(
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <IconFrame class=class>
            <path d="M12 5v14" />
            <path d="M5 12h14" />
        </IconFrame>
    }
}
