//! Round avatar container.

use leptos::prelude::*;

/// Circular avatar wrapping an icon or initials.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar label="Assistant" class="bg-primary/10 text-primary">
///         <BotIcon />
///     </Avatar>
/// }
/// ```
#[component]
pub fn Avatar(
    /// Accessible name of the avatar's owner.
    label: &'static str,
    /// Size class (e.g., "h-10 w-10").
    #[prop(default = "h-8 w-8")]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "relative flex shrink-0 items-center justify-center overflow-hidden rounded-full {size} {class}"
    );

    view! {
        <span class=classes role="img" aria-label=label>
            {children()}
        </span>
    }
}
