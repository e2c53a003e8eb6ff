use super::*;

fn profile(role: Role) -> UserProfile {
    UserProfile {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: None,
        role,
    }
}

#[test]
fn default_session_is_logged_out_with_pair_absent() {
    let state = SessionState::default();
    assert_eq!(state.phase, AuthPhase::LoggedOut);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_logged_in());
}

#[test]
fn establish_sets_pair_together_and_bumps_epoch() {
    let mut state = SessionState::default();
    state.establish("tok".to_owned(), profile(Role::User));
    assert_eq!(state.token.is_some(), state.user.is_some());
    assert_eq!(state.phase, AuthPhase::LoggedIn);
    assert_eq!(state.epoch, 1);
    assert!(state.login_error.is_none());
}

#[test]
fn clear_drops_pair_together_and_bumps_epoch() {
    let mut state = SessionState::restored("tok".to_owned(), profile(Role::Admin));
    state.clear();
    assert_eq!(state.token.is_some(), state.user.is_some());
    assert!(state.token.is_none());
    assert_eq!(state.phase, AuthPhase::LoggedOut);
    assert_eq!(state.epoch, 1);
}

#[test]
fn restored_session_is_logged_in_but_resolving() {
    let state = SessionState::restored("tok".to_owned(), profile(Role::User));
    assert!(state.is_logged_in());
    assert!(state.resolving);
    assert_eq!(state.phase, AuthPhase::LoggedIn);
}

#[test]
fn is_admin_follows_role() {
    let mut state = SessionState::default();
    assert!(!state.is_admin());
    state.establish("tok".to_owned(), profile(Role::Admin));
    assert!(state.is_admin());
    state.establish("tok".to_owned(), profile(Role::User));
    assert!(!state.is_admin());
}

#[test]
fn self_id_exposes_logged_in_account() {
    let mut state = SessionState::default();
    assert_eq!(state.self_id(), None);
    state.establish("tok".to_owned(), profile(Role::User));
    assert_eq!(state.self_id(), Some("u1"));
}

#[test]
fn establish_clears_previous_login_error() {
    let mut state = SessionState {
        login_error: Some("Invalid username or password".to_owned()),
        ..SessionState::default()
    };
    state.establish("tok".to_owned(), profile(Role::User));
    assert!(state.login_error.is_none());
}
