//! User collection state and account-form rules.
//!
//! DESIGN
//! ======
//! The password field is write-only: editing loads a record with the
//! password blank, and a blank password is omitted from update payloads so
//! it can never overwrite a stored one. Deleting the logged-in account is
//! refused client-side before any request goes out.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::error::ApiError;
use crate::net::types::{CreateUserRequest, Role, UpdateUserRequest, UserProfile};

/// Account create/edit form, owned by the user panel while its modal is
/// open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
}

/// Shared user panel state.
#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub items: Vec<UserProfile>,
    pub loading: bool,
    pub show_form: bool,
    pub save_pending: bool,
    /// Record being edited; `None` means the form creates a new account.
    pub editing: Option<UserProfile>,
    /// Inline message inside the form dialog.
    pub form_error: Option<String>,
    /// Account awaiting delete confirmation.
    pub delete_target: Option<UserProfile>,
    pub form: UserForm,
}

impl UsersState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn open_create(&mut self) {
        self.editing = None;
        self.form = UserForm::default();
        self.form_error = None;
        self.show_form = true;
    }

    pub fn open_edit(&mut self, user: UserProfile) {
        self.form = form_for_edit(&user);
        self.editing = Some(user);
        self.form_error = None;
        self.show_form = true;
    }

    /// Close the modal and discard the form.
    pub fn close_form(&mut self) {
        self.show_form = false;
        self.save_pending = false;
        self.editing = None;
        self.form = UserForm::default();
        self.form_error = None;
    }
}

/// Load a record into the form; the password is never echoed.
pub fn form_for_edit(user: &UserProfile) -> UserForm {
    UserForm {
        username: user.username.clone(),
        password: String::new(),
        email: user.email.clone().unwrap_or_default(),
        role: user.role,
    }
}

/// Build a registration payload.
///
/// # Errors
///
/// `ApiError::Validation` when the username or password is blank.
pub fn build_create_request(form: &UserForm) -> Result<CreateUserRequest, ApiError> {
    let username = form.username.trim();
    if username.is_empty() {
        return Err(ApiError::Validation("Username is required".to_owned()));
    }
    if form.password.is_empty() {
        return Err(ApiError::Validation("Password is required".to_owned()));
    }
    Ok(CreateUserRequest {
        username: username.to_owned(),
        password: form.password.clone(),
        email: normalize_email(&form.email),
        role: form.role,
    })
}

/// Build an update payload; blank password and email are omitted entirely.
pub fn build_update_request(form: &UserForm) -> UpdateUserRequest {
    UpdateUserRequest {
        email: normalize_email(&form.email),
        role: Some(form.role),
        password: if form.password.is_empty() {
            None
        } else {
            Some(form.password.clone())
        },
    }
}

/// A validated save operation for the form dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveAction {
    Create(CreateUserRequest),
    /// Target id plus the partial payload.
    Update(String, UpdateUserRequest),
}

/// Validate the open form into a save action. Editing produces an update
/// for the loaded record; otherwise a registration.
///
/// # Errors
///
/// `ApiError::Validation` from the create-payload rules.
pub fn prepare_save(state: &UsersState) -> Result<SaveAction, ApiError> {
    match &state.editing {
        Some(target) => Ok(SaveAction::Update(
            target.id.clone(),
            build_update_request(&state.form),
        )),
        None => Ok(SaveAction::Create(build_create_request(&state.form)?)),
    }
}

/// Whether `target` may be deleted by the account with id `self_id`.
///
/// # Errors
///
/// `ApiError::Validation` when the target is the caller's own account.
pub fn deletable(target: &UserProfile, self_id: &str) -> Result<(), ApiError> {
    if target.id == self_id {
        return Err(ApiError::Validation(
            "You cannot delete the account you are logged in with".to_owned(),
        ));
    }
    Ok(())
}

/// Map a role `<select>` value back to a role.
pub fn role_from_input(value: &str) -> Role {
    if value.eq_ignore_ascii_case("admin") {
        Role::Admin
    } else {
        Role::User
    }
}

fn normalize_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
