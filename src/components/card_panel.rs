//! Card panel: searchable list, generate dialog, delete confirmation,
//! CSV export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mutation is followed by a full re-fetch; the table never trusts
//! an optimistic local edit. The search box derives a filtered view and
//! leaves the collection untouched.

#[cfg(test)]
#[path = "card_panel_test.rs"]
mod card_panel_test;

use chrono::Utc;
use leptos::prelude::*;

use crate::state::cards::{CardsState, card_status, filter_cards, validate_generate};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::state::users::UsersState;
use crate::util::fmt::display_date;

fn text_or_dash(value: Option<String>) -> String {
    value.filter(|s| !s.is_empty()).unwrap_or_else(|| "-".to_owned())
}

#[component]
pub fn CardPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cards = expect_context::<RwSignal<CardsState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let visible = move || {
        let state = cards.get();
        filter_cards(&state.items, &state.search, Utc::now())
    };

    let on_open_generate = move |_| {
        cards.update(|c| {
            c.show_generate = true;
            c.form_error = None;
        });
    };

    let on_export = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let snapshot = session.get_untracked();
            let Some(token) = snapshot.token else {
                return;
            };
            let epoch = snapshot.epoch;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::export_cards(&token).await;
                if session.get_untracked().epoch != epoch {
                    return;
                }
                match result {
                    Ok(bytes) => {
                        let filename =
                            crate::util::download::export_filename(Utc::now().date_naive());
                        log::info!("exporting {} bytes to {filename}", bytes.len());
                        crate::util::download::save_csv(&filename, &bytes);
                    }
                    Err(err) => {
                        log::error!("card export failed: {err}");
                        crate::state::session::handle_failure(&err, session, cards, users, ui);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, cards, users, ui);
        }
    };

    view! {
        <section class="card-panel">
            <div class="card-panel__controls">
                <input
                    class="card-panel__search"
                    type="text"
                    placeholder="Search by card number, creator, or status"
                    prop:value=move || cards.get().search
                    on:input=move |ev| cards.update(|c| c.search = event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=on_open_generate>
                    "Generate Cards"
                </button>
                <button class="btn" on:click=on_export>
                    "Export CSV"
                </button>
            </div>

            <Show
                when=move || !cards.get().loading
                fallback=move || view! { <p class="card-panel__loading">"Loading cards..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Card Number"</th>
                            <th>"Status"</th>
                            <th>"Created By"</th>
                            <th>"Used By"</th>
                            <th>"Expires"</th>
                            <th>"Created"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let now = Utc::now();
                            visible()
                                .into_iter()
                                .map(|card| {
                                    let status = card_status(&card, now);
                                    let delete_card = card.clone();
                                    view! {
                                        <tr>
                                            <td class="data-table__mono">{card.card_number.clone()}</td>
                                            <td>
                                                <span class=format!("badge {}", status.badge_class())>
                                                    {status.label()}
                                                </span>
                                            </td>
                                            <td>{text_or_dash(card.created_by_username.clone())}</td>
                                            <td>{text_or_dash(card.used_by_identifier.clone())}</td>
                                            <td>{display_date(card.expires_at)}</td>
                                            <td>{display_date(card.created_at)}</td>
                                            <td>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| {
                                                        cards.update(|c| c.delete_target = Some(delete_card.clone()));
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || visible().is_empty()>
                    <p class="card-panel__empty">"No cards match."</p>
                </Show>
            </Show>

            <Show when=move || cards.get().show_generate>
                <GenerateCardsDialog/>
            </Show>
            <Show when=move || cards.get().delete_target.is_some()>
                <DeleteCardDialog/>
            </Show>
        </section>
    }
}

/// Modal dialog for generating a batch of cards. The last submitted values
/// stay in the form as the next defaults.
#[component]
fn GenerateCardsDialog() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cards = expect_context::<RwSignal<CardsState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_cancel = Callback::new(move |_| cards.update(CardsState::close_generate));

    let submit = Callback::new(move |_| {
        if cards.get_untracked().generate_pending {
            return;
        }
        let request = match validate_generate(&cards.get_untracked().form) {
            Ok(request) => request,
            Err(err) => {
                cards.update(|c| c.form_error = Some(err.to_string()));
                return;
            }
        };
        cards.update(|c| {
            c.generate_pending = true;
            c.form_error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let snapshot = session.get_untracked();
            let Some(token) = snapshot.token else {
                return;
            };
            let epoch = snapshot.epoch;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::generate_cards(&token, &request).await;
                if session.get_untracked().epoch != epoch {
                    return;
                }
                match result {
                    Ok(created) => {
                        log::info!("generated {} cards", created.count());
                        cards.update(CardsState::close_generate);
                        crate::state::sync::spawn_card_refresh(session, cards, users, ui);
                    }
                    Err(err) => {
                        log::error!("card generation failed: {err}");
                        if err == crate::net::error::ApiError::SessionInvalidated {
                            crate::state::session::handle_failure(&err, session, cards, users, ui);
                        } else {
                            cards.update(|c| {
                                c.generate_pending = false;
                                c.form_error = Some(err.to_string());
                            });
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, users, ui);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Generate Cards"</h2>
                <label class="dialog__label">
                    "Count (1-100)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        max="100"
                        prop:value=move || cards.get().form.count
                        on:input=move |ev| {
                            cards.update(|c| c.form.count = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Duration (days)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        prop:value=move || cards.get().form.duration_days
                        on:input=move |ev| {
                            cards.update(|c| c.form.duration_days = event_target_value(&ev));
                        }
                    />
                </label>
                <Show when=move || cards.get().form_error.is_some()>
                    <p class="dialog__error">{move || cards.get().form_error.unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || cards.get().generate_pending
                        on:click=move |_| submit.run(())
                    >
                        {move || {
                            if cards.get().generate_pending { "Generating..." } else { "Generate" }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for deleting a card. The row disappears only after
/// the server acknowledges and the list has been re-fetched.
#[component]
fn DeleteCardDialog() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cards = expect_context::<RwSignal<CardsState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_cancel = Callback::new(move |_| cards.update(|c| c.delete_target = None));

    let submit = Callback::new(move |_| {
        let Some(target) = cards.get_untracked().delete_target else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let snapshot = session.get_untracked();
            let Some(token) = snapshot.token else {
                return;
            };
            let epoch = snapshot.epoch;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_card(&token, &target.id).await;
                if session.get_untracked().epoch != epoch {
                    return;
                }
                match result {
                    Ok(()) => {
                        log::info!("deleted card {}", target.id);
                        cards.update(|c| c.delete_target = None);
                        crate::state::sync::spawn_card_refresh(session, cards, users, ui);
                    }
                    Err(err) => {
                        log::error!("card delete failed: {err}");
                        cards.update(|c| c.delete_target = None);
                        crate::state::session::handle_failure(&err, session, cards, users, ui);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, session, users, ui);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Card"</h2>
                <p class="dialog__danger">
                    "Delete card "
                    <span class="data-table__mono">
                        {move || {
                            cards.get().delete_target.map(|c| c.card_number).unwrap_or_default()
                        }}
                    </span>
                    "? This cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
