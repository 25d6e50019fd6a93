//! ShadCN-style reusable UI components.
//!
//! Small, composable building blocks rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`Badge`]: Status badge / counter
//! - [`Avatar`]: Round icon container
//! - [`ScrollArea`]: Scrollable container
//! - [`icons`]: SVG icon components

mod avatar;
mod badge;
mod button;
mod icons;
mod scroll_area;

pub use avatar::Avatar;
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::*;
pub use scroll_area::ScrollArea;
