//! Authenticated console page hosting the card and user panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On first render with a
//! restored session it re-validates the persisted token against
//! `/api/users/me` before trusting it; a rejection there is treated
//! exactly like a 401 mid-session. Once confirmed it kicks off the
//! initial data load.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::card_panel::CardPanel;
use crate::components::topbar::Topbar;
use crate::components::user_panel::UserPanel;
use crate::state::cards::CardsState;
use crate::state::session::SessionState;
use crate::state::ui::{UiState, View};
use crate::state::users::UsersState;

#[component]
pub fn ConsolePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cards = expect_context::<RwSignal<CardsState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(session, navigate);

    // One-shot startup: re-validate a restored token, or load data
    // straight away after a fresh login.
    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        let state = session.get();
        if !state.is_logged_in() {
            return;
        }
        started.set(true);
        if state.resolving {
            resolve_persisted_session(session, cards, users, ui);
        } else {
            crate::state::sync::spawn_initial_load(session, cards, users, ui);
        }
    });

    view! {
        <Show
            when=move || session.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="console-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="console-page">
                <Topbar/>
                <main class="console-page__body">
                    {move || match ui.get().view {
                        View::Users => view! { <UserPanel/> }.into_any(),
                        View::Cards => view! { <CardPanel/> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}

/// Confirm a storage-restored token against the server. Any failure here
/// means the persisted session is dead: clear it and fall back to login.
fn resolve_persisted_session(
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
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_current_user(&token).await;
            if session.get_untracked().epoch != epoch {
                return;
            }
            match result {
                Ok(profile) => {
                    // Refresh the cached profile alongside the confirmed token.
                    crate::util::storage::save_session(&token, &profile);
                    session.update(|s| {
                        s.user = Some(profile);
                        s.resolving = false;
                    });
                    crate::state::sync::spawn_initial_load(session, cards, users, ui);
                }
                Err(err) => {
                    log::warn!("persisted token rejected: {err}");
                    crate::state::session::force_logout(
                        session,
                        cards,
                        users,
                        ui,
                        Some(crate::net::error::ApiError::SessionInvalidated.to_string()),
                    );
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, cards, users, ui);
    }
}
