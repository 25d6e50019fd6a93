//! UI components and layouts.
//!
//! Leptos SSR components for the support widget, following ShadCN-UI
//! design principles. Interactivity is HTML-first: HTMX posts the input form
//! and swaps the returned chat window.
//!
//! # Structure
//!
//! - [`app`]: Document shell and static page header
//! - [`chat`]: Chat interface, window, message list, history panel, input
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`state`]: Shared chat context
//! - [`render`]: Render entry points used by the HTTP handlers

pub mod app;
pub mod chat;
pub mod components;
pub mod render;
pub mod state;

pub use render::{render_chat_window, render_page};
pub use state::{ChatContext, ChatSnapshot};
