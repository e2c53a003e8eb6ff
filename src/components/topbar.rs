//! Console header: panel tabs, identity, logout.

#[cfg(test)]
#[path = "topbar_test.rs"]
mod topbar_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::cards::CardsState;
use crate::state::session::SessionState;
use crate::state::ui::{UiState, View};
use crate::state::users::UsersState;

fn tab_class(active: bool) -> &'static str {
    if active {
        "btn toolbar__tab toolbar__tab--active"
    } else {
        "btn toolbar__tab"
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "admin",
        Role::User => "user",
    }
}

#[component]
pub fn Topbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cards = expect_context::<RwSignal<CardsState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_select_cards = move |_| ui.update(|u| u.view = View::Cards);

    // Entering the users panel re-fetches the list; the refresh is a no-op
    // for non-admins, who never see this tab anyway.
    let on_select_users = move |_| {
        ui.update(|u| u.view = View::Users);
        crate::state::sync::spawn_user_refresh(session, cards, users, ui);
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        log::info!("user logged out");
        crate::state::session::force_logout(session, cards, users, ui, None);
    };

    let identity = move || {
        session
            .get()
            .user
            .map(|u| format!("{} ({})", u.username, role_label(u.role)))
            .unwrap_or_default()
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__brand">"Card Key Console"</span>
            <nav class="toolbar__tabs">
                <button
                    class=move || tab_class(ui.get().view == View::Cards)
                    on:click=on_select_cards
                >
                    "Cards"
                </button>
                <Show when=move || session.get().is_admin()>
                    <button
                        class=move || tab_class(ui.get().view == View::Users)
                        on:click=on_select_users
                    >
                        "Users"
                    </button>
                </Show>
            </nav>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{identity}</span>
            <button class="btn toolbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
