use axum::{
    Extension, Form, Json, Router,
    extract::{DefaultBodyLimit, Path, Query, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::assistant::KeywordAssistant;
use crate::config::AppConfig;
use crate::conversation::{Conversation, ConversationSummary, Message};
use crate::error::{ChatError, Result};
use crate::rate_limit::rate_limit_middleware;
use crate::ui::{ChatSnapshot, render_chat_window, render_page};
use crate::visitor::{VisitorId, visitor_middleware};

/// Default number of messages returned by the history endpoint.
const DEFAULT_HISTORY_LIMIT: usize = 50;

/// How often expired conversations are swept.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(Arc::clone(&config), Arc::new(KeywordAssistant::new()));

    spawn_cleanup(
        state.clone(),
        Duration::from_secs(config.sessions.timeout_secs),
    );

    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Periodically tear down conversations idle longer than `timeout`.
fn spawn_cleanup(state: AppState, timeout: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = state.conversations.cleanup_expired_with_timeout(timeout);
            if removed > 0 {
                info!(
                    name: "chat.conversation.expired",
                    removed,
                    remaining = state.conversations.len(),
                    "Expired conversations removed"
                );
            }
        }
    });
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    // A disabled timeout becomes a very long one so the layer stack keeps one type.
    let timeout_duration = if state.config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60)
    } else {
        Duration::from_secs(state.config.resilience.request_timeout_secs)
    };

    Router::new()
        // HTML pages and fragments
        .route("/", get(index_handler))
        .route("/api/chat", post(api_chat))
        // JSON API
        .route(
            "/api/conversations",
            get(api_list_conversations).post(api_create_conversation),
        )
        .route("/api/conversations/{id}", axum::routing::delete(api_delete_conversation))
        .route("/api/conversations/{id}/history", get(api_conversation_history))
        .route("/api/conversations/{id}/close", post(api_close_conversation))
        .route("/health", get(health_handler))
        // Static assets
        .nest_service("/static", ServeDir::new(&state.config.server.static_dir))
        .layer(axum::middleware::from_fn(visitor_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout_duration, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

/// Build the render input for `conversation` (or the empty start page).
fn snapshot(
    state: &AppState,
    visitor: &VisitorId,
    conversation: Option<&Conversation>,
) -> ChatSnapshot {
    ChatSnapshot {
        state: conversation.map(Conversation::snapshot).unwrap_or_default(),
        history: state
            .conversations
            .summaries(visitor, state.config.sessions.history_limit),
        active_id: conversation.map(|c| c.id().to_string()),
        closed: conversation.is_some_and(|c| !c.is_active()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for the index page.
#[derive(Debug, Deserialize)]
struct PageQuery {
    /// Conversation to open; a fresh page when absent.
    #[serde(default)]
    conversation_id: Option<String>,
}

/// GET / - Full support page.
async fn index_handler(
    State(state): State<AppState>,
    Extension(visitor): Extension<VisitorId>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let conversation = match query.conversation_id.as_deref() {
        Some(id) if !id.is_empty() => Some(state.conversations.require_owned(id, &visitor)?),
        _ => None,
    };

    let snapshot = snapshot(&state, &visitor, conversation.as_ref());
    Ok(Html(render_page(&state.config.widget, snapshot)))
}

/// Form body posted by the chat input.
#[derive(Debug, Deserialize)]
struct ChatForm {
    /// User message content.
    message: String,
    /// Target conversation (creates new if empty or missing).
    #[serde(default)]
    conversation_id: Option<String>,
}

/// POST /api/chat - Submit a message and get the updated chat window.
///
/// HTMX requests get the window fragment; plain form posts are redirected
/// back to the full page.
async fn api_chat(
    State(state): State<AppState>,
    Extension(visitor): Extension<VisitorId>,
    headers: HeaderMap,
    Form(form): Form<ChatForm>,
) -> Result<Response> {
    let text = form.message.trim();
    if text.is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    let limit = state.config.sessions.max_message_chars;
    if text.chars().count() > limit {
        return Err(ChatError::MessageTooLong { limit });
    }

    let conversation = match form.conversation_id.as_deref() {
        Some(id) if !id.is_empty() => state.conversations.require_owned(id, &visitor)?,
        _ => state.conversations.create(&visitor, None),
    };

    info!(
        name: "chat.message.received",
        conversation_id = %conversation.id(),
        chars = text.chars().count(),
        "Received chat message"
    );

    let intent = state.assistant.classify(text);
    conversation.append(Message::user(text).with_intent(intent.clone()))?;

    let history = conversation.snapshot();
    let reply = state.assistant.reply(history.messages(), text).await?;
    conversation.append(Message::ai(reply).with_intent(intent))?;

    // The conversation may have been deleted while the reply was pending.
    let conversation = state
        .conversations
        .require_owned(conversation.id(), &visitor)?;

    if !headers.contains_key("hx-request") {
        let location = format!("/?conversation_id={}", conversation.id());
        return Ok(Redirect::to(&location).into_response());
    }

    let snapshot = snapshot(&state, &visitor, Some(&conversation));
    Ok(Html(render_chat_window(snapshot)).into_response())
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters with an optional result limit.
#[derive(Debug, Deserialize)]
struct LimitQuery {
    #[serde(default)]
    limit: Option<usize>,
}

/// GET /api/conversations - List the visitor's active conversations.
async fn api_list_conversations(
    State(state): State<AppState>,
    Extension(visitor): Extension<VisitorId>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<ConversationSummary>> {
    let limit = query
        .limit
        .unwrap_or(state.config.sessions.history_limit);
    Json(state.conversations.summaries(&visitor, limit))
}

/// Request body for creating a conversation.
#[derive(Debug, Default, Deserialize)]
struct CreateConversationRequest {
    #[serde(default)]
    title: Option<String>,
    /// Prior history to seed the conversation with.
    #[serde(default)]
    messages: Vec<Message>,
}

/// POST /api/conversations - Create a conversation.
async fn api_create_conversation(
    State(state): State<AppState>,
    Extension(visitor): Extension<VisitorId>,
    Json(req): Json<CreateConversationRequest>,
) -> Result<(StatusCode, Json<ConversationSummary>)> {
    let conversation = state
        .conversations
        .create_with_history(&visitor, req.title, req.messages)?;
    Ok((StatusCode::CREATED, Json(conversation.summary())))
}

/// Messages of one conversation.
#[derive(Debug, Serialize)]
struct ConversationHistory {
    conversation_id: String,
    messages: Vec<Message>,
}

/// GET /api/conversations/{id}/history - Most recent messages, oldest first.
async fn api_conversation_history(
    State(state): State<AppState>,
    Extension(visitor): Extension<VisitorId>,
    Path(id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<ConversationHistory>> {
    let conversation = state.conversations.require_owned(&id, &visitor)?;
    let messages = conversation.history(query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT));
    Ok(Json(ConversationHistory {
        conversation_id: id,
        messages,
    }))
}

/// DELETE /api/conversations/{id} - Delete a conversation.
async fn api_delete_conversation(
    State(state): State<AppState>,
    Extension(visitor): Extension<VisitorId>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.conversations.require_owned(&id, &visitor)?;
    match state.conversations.remove(&id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(ChatError::ConversationNotFound(id)),
    }
}

/// POST /api/conversations/{id}/close - Stop accepting messages.
async fn api_close_conversation(
    State(state): State<AppState>,
    Extension(visitor): Extension<VisitorId>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.conversations.require_owned(&id, &visitor)?;
    if state.conversations.close(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ChatError::ConversationNotFound(id))
    }
}

/// GET /health - Liveness probe.
async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "conversations": state.conversations.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let config = AppConfig::load_from_args(["support-chat", "--rate-limit-enabled", "false"])
            .expect("default config");
        AppState::new(Arc::new(config), Arc::new(KeywordAssistant::new()))
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(test_state());
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_snapshot_of_closed_conversation() {
        let state = test_state();
        let visitor = VisitorId::new();
        let conversation = state.conversations.create(&visitor, None);
        conversation.append(Message::user("Hi")).unwrap();
        conversation.close();

        let snapshot = snapshot(&state, &visitor, Some(&conversation));
        assert!(snapshot.closed);
        assert_eq!(snapshot.state.len(), 1);
        assert_eq!(snapshot.active_id.as_deref(), Some(conversation.id()));
        // Closed conversations drop out of the history panel.
        assert!(snapshot.history.is_empty());
    }
}
