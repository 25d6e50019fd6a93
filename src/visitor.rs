//! Per-visitor ownership of conversations.
//!
//! Every browser gets an opaque visitor ID in an HttpOnly cookie. Handlers
//! read it from request extensions and only ever list or open conversations
//! created under the same ID.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

/// Name of the cookie carrying the visitor ID.
pub const VISITOR_COOKIE: &str = "support_chat_visitor";

const PREFIX: &str = "vis_";

/// Opaque owner key for conversations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitorId(String);

impl VisitorId {
    /// Generate a fresh, unguessable visitor ID.
    #[must_use]
    pub fn new() -> Self {
        Self(format!("{PREFIX}{}", Uuid::new_v4().simple()))
    }

    /// Accept only values shaped like a generated ID.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.strip_prefix(PREFIX)?;
        (hex.len() == 32 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .then(|| Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VisitorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VisitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the visitor from its cookie, issuing a new one when missing.
pub async fn visitor_middleware(jar: CookieJar, mut req: Request, next: Next) -> Response {
    let known = jar
        .get(VISITOR_COOKIE)
        .and_then(|cookie| VisitorId::parse(cookie.value()));

    let (visitor, issued) = match known {
        Some(visitor) => (visitor, false),
        None => (VisitorId::new(), true),
    };
    req.extensions_mut().insert(visitor.clone());

    let response = next.run(req).await;
    if !issued {
        return response;
    }

    tracing::debug!(name: "http.visitor.issued", "Visitor cookie issued");
    let cookie = Cookie::build((VISITOR_COOKIE, visitor.0))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), response).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_only_generated_shape() {
        let visitor = VisitorId::new();
        assert_eq!(VisitorId::parse(visitor.as_str()), Some(visitor.clone()));

        assert_eq!(VisitorId::parse(""), None);
        assert_eq!(VisitorId::parse("vis_123"), None);
        assert_eq!(VisitorId::parse(&visitor.as_str().replace("vis_", "usr_")), None);
        assert_eq!(VisitorId::parse(&format!("vis_{}", "z".repeat(32))), None);
    }

    #[test]
    fn test_new_ids_differ() {
        assert_ne!(VisitorId::new(), VisitorId::new());
    }
}
