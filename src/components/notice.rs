//! Dismissible notice banner for surfaced failures.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Global banner shown whenever a notice is set; the forced-logout message
/// lands here as well so it stays visible on the login screen.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().notice.is_some()>
            <div class="notice" role="alert">
                <span class="notice__text">{move || ui.get().notice.unwrap_or_default()}</span>
                <button class="btn notice__dismiss" on:click=move |_| ui.update(|u| u.notice = None)>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
