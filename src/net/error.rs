//! Failure taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught at the call site; nothing propagates to a global
//! handler. `SessionInvalidated` is the only variant with a side effect: it
//! forces a logout. A 401 counts as session invalidation only when the body
//! carries the backend's token-rejection text — a 401 for bad credentials at
//! the login endpoint must stay an inline `AuthRejected`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// Classified outcome of a failed operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Bad credentials at login; shown inline, session untouched.
    AuthRejected(String),
    /// The server rejected a previously valid token; forces logout.
    SessionInvalidated,
    /// Role-gated action attempted without privilege.
    AuthorizationDenied(String),
    /// Client-side input rejected before any request was sent.
    Validation(String),
    /// Any other network or server failure; local state is left unchanged
    /// so the user may retry.
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthRejected(detail) => write!(f, "{detail}"),
            Self::SessionInvalidated => write!(f, "Session invalidated, please log in again"),
            Self::AuthorizationDenied(detail) => write!(f, "Not allowed: {detail}"),
            Self::Validation(detail) => write!(f, "{detail}"),
            Self::Network(detail) => write!(f, "{detail}"),
        }
    }
}

/// Whether a 401 body signals a rejected or missing bearer token, as opposed
/// to some other unauthorized condition. The backend emits
/// `Invalid token: …` and `Authorization header missing or invalid`.
pub fn is_token_rejection(body: &str) -> bool {
    body.contains("Invalid token") || body.contains("Authorization header missing")
}

/// Classify a non-2xx response from an authenticated endpoint.
pub fn classify_status(status: u16, body: &str) -> ApiError {
    match status {
        401 if is_token_rejection(body) => ApiError::SessionInvalidated,
        403 => ApiError::AuthorizationDenied(detail_or(body, "insufficient privileges")),
        _ => ApiError::Network(detail_or(body, &format!("request failed: {status}"))),
    }
}

/// Classify a rejection from the login endpoint itself. Never forces logout,
/// whatever the status or body says.
pub fn login_rejection(body: &str) -> ApiError {
    ApiError::AuthRejected(detail_or(
        body,
        "Login failed. Check your credentials and connection.",
    ))
}

fn detail_or(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_owned()
    } else {
        trimmed.to_owned()
    }
}
