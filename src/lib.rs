//! Customer-support chat widget.
//!
//! A server-rendered chat widget: a page header, a conversation history
//! panel, a scrolling message list and a text input, all rendered from a
//! shared chat context and served over HTTP.
//!
//! # Architecture
//!
//! - **Server**: Axum HTTP server; HTMX swaps server-rendered fragments
//! - **UI**: Leptos SSR components reading a shared [`ui::ChatContext`]
//! - **Conversations**: in-memory, append-only message sequences
//! - **Assistant**: pluggable reply collaborator for the `ai` side
//!
//! # Modules
//!
//! - [`conversation`]: Messages, conversation state and the conversation store
//! - [`assistant`]: Reply collaborators
//! - [`ui`]: Components, chat context and render entry points
//! - [`server`]: Router, handlers and middleware
//! - [`config`]: Layered configuration
//! - [`visitor`]: Cookie-backed conversation ownership

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_pass_by_value)]

pub mod assistant;
pub mod config;
pub mod conversation;
pub mod error;
pub mod rate_limit;
pub mod server;
pub mod telemetry;
pub mod ui;
pub mod visitor;

use std::sync::Arc;

use crate::assistant::Assistant;
use crate::config::AppConfig;
use crate::conversation::ConversationStore;
use crate::rate_limit::SimpleRateLimiter;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Live conversations.
    pub conversations: ConversationStore,
    /// Produces replies to user messages.
    pub assistant: Arc<dyn Assistant>,
    /// Global Rate Limiter
    pub rate_limiter: Arc<SimpleRateLimiter>,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state with an empty conversation store.
    pub fn new(config: Arc<AppConfig>, assistant: Arc<dyn Assistant>) -> Self {
        let rate_limiter = Arc::new(SimpleRateLimiter::new(
            config.resilience.requests_per_second,
            config.resilience.burst_size,
        ));
        Self {
            conversations: ConversationStore::new(),
            assistant,
            rate_limiter,
            config,
        }
    }
}
