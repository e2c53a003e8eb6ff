//! Login page with username/password credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the `LoggedOut -> LoggingIn -> LoggedIn` transition. On success
//! the session pair is persisted before reactive state is updated, and the
//! initial data load fires (cards always, users only for admins). A
//! rejection surfaces the server's message inline and leaves the session
//! untouched.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::cards::CardsState;
use crate::state::session::{AuthPhase, SessionState};
use crate::state::ui::UiState;
use crate::state::users::UsersState;

/// Trim the username and require both fields.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cards = expect_context::<RwSignal<CardsState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Already-authenticated visits go straight to the console.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if session.get().is_logged_in() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let busy = move || session.get().phase == AuthPhase::LoggingIn;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(pair) => pair,
                Err(msg) => {
                    session.update(|s| s.login_error = Some(msg.to_owned()));
                    return;
                }
            };
        session.update(|s| {
            s.phase = AuthPhase::LoggingIn;
            s.login_error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&username_value, &password_value).await {
                Ok(resp) => {
                    log::info!("login successful for {}", resp.user.username);
                    crate::util::storage::save_session(&resp.token, &resp.user);
                    session.update(|s| s.establish(resp.token, resp.user));
                    ui.update(|u| {
                        u.view = crate::state::ui::View::Cards;
                        u.notice = None;
                    });
                    crate::state::sync::spawn_initial_load(session, cards, users, ui);
                }
                Err(err) => {
                    log::warn!("login rejected: {err}");
                    session.update(|s| {
                        s.phase = AuthPhase::LoggedOut;
                        s.login_error = Some(err.to_string());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, cards, users, ui);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Card Key Console"</h1>
                <p class="login-card__subtitle">"Sign in to manage license keys"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || session.get().login_error.is_some()>
                    <p class="login-message">
                        {move || session.get().login_error.unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
