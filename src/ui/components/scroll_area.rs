//! Scrollable area component.

use leptos::prelude::*;

/// Scrollable container with thin scrollbars.
///
/// `id` is forwarded so HTMX and scripts can address the container.
#[component]
pub fn ScrollArea(
    /// Element ID.
    #[prop(default = "")]
    id: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Scrollable content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "relative overflow-y-auto scrollbar-thin scrollbar-thumb-panelBorder \
         scrollbar-track-transparent {class}"
    );
    let id = (!id.is_empty()).then_some(id);

    view! {
        <div id=id class=classes>
            {children()}
        </div>
    }
}
