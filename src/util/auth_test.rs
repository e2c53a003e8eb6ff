use super::*;
use crate::net::types::{Role, UserProfile};

#[test]
fn should_redirect_unauth_when_settled_and_user_missing() {
    let state = SessionState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_resolving_persisted_token() {
    let state = SessionState {
        resolving: true,
        ..SessionState::default()
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let mut state = SessionState::default();
    state.establish(
        "tok".to_owned(),
        UserProfile {
            id: "u1".to_owned(),
            username: "alice".to_owned(),
            email: None,
            role: Role::User,
        },
    );
    assert!(!should_redirect_unauth(&state));
}
