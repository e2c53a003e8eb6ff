//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the (token, user) pair plus a small state machine around
//! it. The invariant is that token and user are present or absent together;
//! `establish` and `clear` are the only ways to change the pair. Every
//! change bumps `epoch`, and async flows drop their results when the epoch
//! they started under is no longer current, so a response landing after a
//! forced logout is never applied.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{Role, UserProfile};
use crate::state::cards::CardsState;
use crate::state::ui::UiState;
use crate::state::users::UsersState;

/// Login lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    LoggedOut,
    /// Credentials submitted, response pending.
    LoggingIn,
    LoggedIn,
}

/// The authenticated session and its lifecycle bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub phase: AuthPhase,
    /// A persisted token is being re-validated against `/api/users/me`.
    pub resolving: bool,
    /// Bumped on every establish/clear; stale async results check it.
    pub epoch: u64,
    /// Inline message for the login form.
    pub login_error: Option<String>,
}

impl SessionState {
    /// Session rehydrated from durable storage at startup. The cached pair
    /// is shown immediately but stays `resolving` until the token is
    /// confirmed by the server.
    pub fn restored(token: String, user: UserProfile) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            phase: AuthPhase::LoggedIn,
            resolving: true,
            epoch: 0,
            login_error: None,
        }
    }

    /// Install a freshly confirmed (token, user) pair.
    pub fn establish(&mut self, token: String, user: UserProfile) {
        self.token = Some(token);
        self.user = Some(user);
        self.phase = AuthPhase::LoggedIn;
        self.resolving = false;
        self.epoch += 1;
        self.login_error = None;
    }

    /// Drop the pair and return to the logged-out state.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.phase = AuthPhase::LoggedOut;
        self.resolving = false;
        self.epoch += 1;
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// Canonical id of the logged-in account, if any.
    pub fn self_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

/// Terminate the session: durable storage first, then reactive state, so no
/// dependent request can start under the dead token. Collections are
/// dropped and the view returns to the default panel.
pub fn force_logout(
    session: RwSignal<SessionState>,
    cards: RwSignal<CardsState>,
    users: RwSignal<UsersState>,
    ui: RwSignal<UiState>,
    notice: Option<String>,
) {
    crate::util::storage::clear_session();
    session.update(SessionState::clear);
    cards.update(CardsState::reset);
    users.update(UsersState::reset);
    ui.update(|u| {
        u.reset();
        u.notice = notice;
    });
}

/// Route a failed operation: session invalidation becomes a forced logout
/// with a visible notice, everything else surfaces through the notice
/// banner and leaves local state unchanged.
pub fn handle_failure(
    err: &ApiError,
    session: RwSignal<SessionState>,
    cards: RwSignal<CardsState>,
    users: RwSignal<UsersState>,
    ui: RwSignal<UiState>,
) {
    if *err == ApiError::SessionInvalidated {
        force_logout(session, cards, users, ui, Some(err.to_string()));
    } else {
        ui.update(|u| u.notice = Some(err.to_string()));
    }
}
