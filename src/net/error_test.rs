use super::*;

#[test]
fn token_rejection_matches_backend_bodies() {
    assert!(is_token_rejection("Invalid token: ExpiredSignature"));
    assert!(is_token_rejection("Authorization header missing or invalid"));
    assert!(!is_token_rejection("Invalid username or password"));
    assert!(!is_token_rejection(""));
}

#[test]
fn unauthorized_with_token_body_invalidates_session() {
    assert_eq!(
        classify_status(401, "Invalid token: InvalidSignature"),
        ApiError::SessionInvalidated
    );
}

#[test]
fn unauthorized_without_token_body_is_plain_failure() {
    assert_eq!(
        classify_status(401, "Invalid username or password"),
        ApiError::Network("Invalid username or password".to_owned())
    );
}

#[test]
fn forbidden_maps_to_authorization_denied() {
    assert_eq!(
        classify_status(403, "admin only"),
        ApiError::AuthorizationDenied("admin only".to_owned())
    );
    assert_eq!(
        classify_status(403, ""),
        ApiError::AuthorizationDenied("insufficient privileges".to_owned())
    );
}

#[test]
fn other_statuses_carry_server_detail_or_fallback() {
    assert_eq!(
        classify_status(500, "database unavailable"),
        ApiError::Network("database unavailable".to_owned())
    );
    assert_eq!(
        classify_status(502, "  "),
        ApiError::Network("request failed: 502".to_owned())
    );
}

#[test]
fn login_rejection_echoes_body_verbatim() {
    assert_eq!(
        login_rejection("Invalid username or password"),
        ApiError::AuthRejected("Invalid username or password".to_owned())
    );
}

#[test]
fn login_rejection_falls_back_when_body_empty() {
    assert_eq!(
        login_rejection(""),
        ApiError::AuthRejected("Login failed. Check your credentials and connection.".to_owned())
    );
}

#[test]
fn login_endpoint_token_shaped_body_still_stays_inline() {
    // Even a token-flavored body at the login endpoint is a credential
    // rejection, never a forced logout.
    assert!(matches!(
        login_rejection("Invalid token: whatever"),
        ApiError::AuthRejected(_)
    ));
}
