//! Application shell.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::ui::chat::ChatInterface;
use crate::ui::components::BagIcon;

/// Complete HTML document for the support page.
#[component]
pub fn App(
    /// Static header text and assistant name.
    widget: WidgetConfig,
) -> impl IntoView {
    let page_title = widget.title.clone();

    view! {
        <!doctype html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Customer support chat"/>

                <title>{page_title}</title>

                // Local scripts only (no CDN)
                <script src="/static/vendor/htmx.min.js"></script>
                <script defer src="/static/vendor/alpine.min.js"></script>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="App min-h-screen bg-background text-textPrimary antialiased">
                <AppHeader title=widget.title subtitle=widget.subtitle />
                <main id="app" class="container mx-auto px-4 py-6 max-w-6xl">
                    <ChatInterface assistant_name=widget.assistant_name />
                </main>
            </body>
        </html>
    }
}

/// Static page header.
#[component]
pub fn AppHeader(title: String, subtitle: String) -> impl IntoView {
    view! {
        <header class="App-header border-b border-panelBorder bg-background/95">
            <div class="container mx-auto flex items-center gap-3 px-4 py-4 max-w-6xl">
                <BagIcon class="h-7 w-7 text-primary" />
                <div>
                    <h1 class="text-xl font-bold">{title}</h1>
                    <p class="text-sm text-textMuted">{subtitle}</p>
                </div>
            </div>
        </header>
    }
}
