//! Fetch flows keeping local collections aligned with the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mutations follow a mutate-then-resynchronize protocol: after the server
//! confirms a change the whole collection is re-fetched rather than patched
//! locally, so server state stays authoritative. Each flow captures the
//! session epoch when it starts and drops its result if the session has
//! since changed, which also covers a logout racing an in-flight fetch.

use leptos::prelude::*;

use crate::state::cards::CardsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::state::users::UsersState;

/// Replace the card collection with the server's full list.
pub fn spawn_card_refresh(
    session: RwSignal<SessionState>,
    cards: RwSignal<CardsState>,
    users: RwSignal<UsersState>,
    ui: RwSignal<UiState>,
) {
    #[cfg(feature = "hydrate")]
    {
        let snapshot = session.get_untracked();
        let Some(token) = snapshot.token else {
            return;
        };
        let epoch = snapshot.epoch;
        cards.update(|c| c.loading = true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_cards(&token).await;
            if session.get_untracked().epoch != epoch {
                return;
            }
            match result {
                Ok(items) => {
                    log::info!("fetched {} cards", items.len());
                    cards.update(|c| {
                        c.items = items;
                        c.loading = false;
                    });
                }
                Err(err) => {
                    log::error!("card fetch failed: {err}");
                    cards.update(|c| c.loading = false);
                    crate::state::session::handle_failure(&err, session, cards, users, ui);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, cards, users, ui);
    }
}

/// Replace the user collection with the server's full list. Silently a
/// no-op unless the logged-in account is an admin.
pub fn spawn_user_refresh(
    session: RwSignal<SessionState>,
    cards: RwSignal<CardsState>,
    users: RwSignal<UsersState>,
    ui: RwSignal<UiState>,
) {
    #[cfg(feature = "hydrate")]
    {
        let snapshot = session.get_untracked();
        if !snapshot.is_admin() {
            return;
        }
        let Some(token) = snapshot.token else {
            return;
        };
        let epoch = snapshot.epoch;
        users.update(|u| u.loading = true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_users(&token).await;
            if session.get_untracked().epoch != epoch {
                return;
            }
            match result {
                Ok(items) => {
                    log::info!("fetched {} users", items.len());
                    users.update(|u| {
                        u.items = items;
                        u.loading = false;
                    });
                }
                Err(err) => {
                    log::error!("user fetch failed: {err}");
                    users.update(|u| u.loading = false);
                    crate::state::session::handle_failure(&err, session, cards, users, ui);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, cards, users, ui);
    }
}

/// Initial data load after a confirmed login: cards always, users only for
/// admins.
pub fn spawn_initial_load(
    session: RwSignal<SessionState>,
    cards: RwSignal<CardsState>,
    users: RwSignal<UsersState>,
    ui: RwSignal<UiState>,
) {
    spawn_card_refresh(session, cards, users, ui);
    spawn_user_refresh(session, cards, users, ui);
}
