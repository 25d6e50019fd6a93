//! Badge component for status indicators and counters.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Neutral counter style.
    #[default]
    Secondary,
    /// Positive status.
    Success,
    /// Highlight for the selected item.
    Primary,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Secondary => "bg-panel text-textPrimary border border-panelBorder",
            Self::Success => "bg-success/15 text-success",
            Self::Primary => "bg-primary text-white",
        }
    }
}

/// Small pill-shaped label.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::Success>"Online"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    #[prop(default = BadgeVariant::Secondary)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {} {class}",
        variant.classes()
    );

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
