//! User panel: account list with create/edit/delete dialogs. Admin only.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form owns its fields only while a dialog is open and the password
//! field is write-only: blank on edit-load, omitted from update payloads
//! when left blank. Deleting the logged-in account is refused before any
//! request goes out.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::cards::CardsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::state::users::{SaveAction, UsersState, deletable, prepare_save, role_from_input};

fn role_input_value(role: Role) -> &'static str {
    match role {
        Role::Admin => "ADMIN",
        Role::User => "USER",
    }
}

#[component]
pub fn UserPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_new = move |_| users.update(UsersState::open_create);

    view! {
        <Show
            when=move || session.get().is_admin()
            fallback=move || view! { <p class="user-panel__denied">"Not authorized."</p> }
        >
            <section class="user-panel">
                <div class="user-panel__controls">
                    <button class="btn btn--primary" on:click=on_new>
                        "New User"
                    </button>
                </div>

                <Show
                    when=move || !users.get().loading
                    fallback=move || view! { <p class="user-panel__loading">"Loading users..."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Username"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                users
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|user| {
                                        let edit_user = user.clone();
                                        let delete_user = user.clone();
                                        view! {
                                            <tr>
                                                <td>{user.username.clone()}</td>
                                                <td>{user.email.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                                <td>{role_input_value(user.role)}</td>
                                                <td>
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| {
                                                            users.update(|u| u.open_edit(edit_user.clone()));
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| {
                                                            let self_id = session
                                                                .get_untracked()
                                                                .self_id()
                                                                .unwrap_or_default()
                                                                .to_owned();
                                                            match deletable(&delete_user, &self_id) {
                                                                Ok(()) => {
                                                                    users.update(|u| {
                                                                        u.delete_target = Some(delete_user.clone());
                                                                    });
                                                                }
                                                                Err(err) => {
                                                                    ui.update(|u| u.notice = Some(err.to_string()));
                                                                }
                                                            }
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
                </Show>

                <Show when=move || users.get().show_form>
                    <UserFormDialog/>
                </Show>
                <Show when=move || users.get().delete_target.is_some()>
                    <DeleteUserDialog/>
                </Show>
            </section>
        </Show>
    }
}

/// Create/edit dialog. Username is fixed once an account exists; the
/// update payload carries only email, role, and an optionally changed
/// password.
#[component]
fn UserFormDialog() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cards = expect_context::<RwSignal<CardsState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let editing = move || users.get().editing.is_some();
    let on_cancel = Callback::new(move |_| users.update(UsersState::close_form));

    let submit = Callback::new(move |_| {
        if users.get_untracked().save_pending {
            return;
        }
        let action = match prepare_save(&users.get_untracked()) {
            Ok(action) => action,
            Err(err) => {
                users.update(|u| u.form_error = Some(err.to_string()));
                return;
            }
        };
        users.update(|u| {
            u.save_pending = true;
            u.form_error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let snapshot = session.get_untracked();
            let Some(token) = snapshot.token else {
                return;
            };
            let epoch = snapshot.epoch;
            leptos::task::spawn_local(async move {
                let result = match action {
                    SaveAction::Update(id, request) => {
                        crate::net::api::update_user(&token, &id, &request).await
                    }
                    SaveAction::Create(request) => {
                        crate::net::api::create_user(&token, &request).await
                    }
                };
                if session.get_untracked().epoch != epoch {
                    return;
                }
                match result {
                    Ok(saved) => {
                        log::info!("saved user {}", saved.username);
                        users.update(UsersState::close_form);
                        crate::state::sync::spawn_user_refresh(session, cards, users, ui);
                    }
                    Err(err) => {
                        log::error!("user save failed: {err}");
                        if err == crate::net::error::ApiError::SessionInvalidated {
                            crate::state::session::handle_failure(&err, session, cards, users, ui);
                        } else {
                            users.update(|u| {
                                u.save_pending = false;
                                u.form_error = Some(err.to_string());
                            });
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (action, session, cards, ui);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if editing() { "Edit User" } else { "New User" }}</h2>
                <label class="dialog__label">
                    "Username"
                    <input
                        class="dialog__input"
                        type="text"
                        disabled=editing
                        prop:value=move || users.get().form.username
                        on:input=move |ev| {
                            users.update(|u| u.form.username = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    {move || if editing() { "Password (blank keeps current)" } else { "Password" }}
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || users.get().form.password
                        on:input=move |ev| {
                            users.update(|u| u.form.password = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Email (optional)"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || users.get().form.email
                        on:input=move |ev| {
                            users.update(|u| u.form.email = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Role"
                    <select
                        class="dialog__input"
                        prop:value=move || role_input_value(users.get().form.role)
                        on:change=move |ev| {
                            users.update(|u| u.form.role = role_from_input(&event_target_value(&ev)));
                        }
                    >
                        <option value="USER">"User"</option>
                        <option value="ADMIN">"Admin"</option>
                    </select>
                </label>
                <Show when=move || users.get().form_error.is_some()>
                    <p class="dialog__error">{move || users.get().form_error.unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || users.get().save_pending
                        on:click=move |_| submit.run(())
                    >
                        {move || if users.get().save_pending { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog for deleting an account.
#[component]
fn DeleteUserDialog() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let cards = expect_context::<RwSignal<CardsState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_cancel = Callback::new(move |_| users.update(|u| u.delete_target = None));

    let submit = Callback::new(move |_| {
        let Some(target) = users.get_untracked().delete_target else {
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
                let result = crate::net::api::delete_user(&token, &target.id).await;
                if session.get_untracked().epoch != epoch {
                    return;
                }
                match result {
                    Ok(()) => {
                        log::info!("deleted user {}", target.id);
                        users.update(|u| u.delete_target = None);
                        crate::state::sync::spawn_user_refresh(session, cards, users, ui);
                    }
                    Err(err) => {
                        log::error!("user delete failed: {err}");
                        users.update(|u| u.delete_target = None);
                        crate::state::session::handle_failure(&err, session, cards, users, ui);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, session, cards, ui);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete User"</h2>
                <p class="dialog__danger">
                    "Delete account "
                    <span>
                        {move || {
                            users.get().delete_target.map(|u| u.username).unwrap_or_default()
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
