use super::*;

fn profile(id: &str) -> UserProfile {
    UserProfile {
        id: id.to_owned(),
        username: "bob".to_owned(),
        email: Some("bob@example.com".to_owned()),
        role: Role::User,
    }
}

#[test]
fn form_for_edit_never_echoes_password() {
    let form = form_for_edit(&profile("u2"));
    assert_eq!(form.username, "bob");
    assert_eq!(form.password, "");
    assert_eq!(form.email, "bob@example.com");
}

#[test]
fn form_for_edit_blank_email_when_absent() {
    let mut user = profile("u2");
    user.email = None;
    assert_eq!(form_for_edit(&user).email, "");
}

#[test]
fn create_request_requires_username_and_password() {
    let form = UserForm {
        username: "   ".to_owned(),
        password: "pw".to_owned(),
        ..UserForm::default()
    };
    assert!(matches!(
        build_create_request(&form),
        Err(ApiError::Validation(_))
    ));

    let form = UserForm {
        username: "carol".to_owned(),
        password: String::new(),
        ..UserForm::default()
    };
    assert!(matches!(
        build_create_request(&form),
        Err(ApiError::Validation(_))
    ));
}

#[test]
fn create_request_drops_blank_email() {
    let form = UserForm {
        username: "carol".to_owned(),
        password: "pw".to_owned(),
        email: "   ".to_owned(),
        role: Role::Admin,
    };
    let req = build_create_request(&form).unwrap();
    assert_eq!(req.email, None);
    assert_eq!(req.role, Role::Admin);
}

#[test]
fn update_request_omits_blank_password() {
    let form = UserForm {
        username: "bob".to_owned(),
        password: String::new(),
        email: "bob@example.com".to_owned(),
        role: Role::User,
    };
    let req = build_update_request(&form);
    assert_eq!(req.password, None);
    assert_eq!(req.email.as_deref(), Some("bob@example.com"));
    assert_eq!(req.role, Some(Role::User));
}

#[test]
fn update_request_carries_new_password_when_entered() {
    let form = UserForm {
        password: "new-secret".to_owned(),
        ..UserForm::default()
    };
    assert_eq!(
        build_update_request(&form).password.as_deref(),
        Some("new-secret")
    );
}

#[test]
fn prepare_save_targets_the_record_under_edit() {
    let mut state = UsersState::default();
    state.open_edit(profile("u2"));
    state.form.password = "changed".to_owned();
    match prepare_save(&state).unwrap() {
        SaveAction::Update(id, req) => {
            assert_eq!(id, "u2");
            assert_eq!(req.password.as_deref(), Some("changed"));
        }
        SaveAction::Create(_) => panic!("expected an update"),
    }
}

#[test]
fn prepare_save_registers_when_nothing_is_under_edit() {
    let mut state = UsersState::default();
    state.open_create();
    state.form.username = "carol".to_owned();
    state.form.password = "pw".to_owned();
    match prepare_save(&state).unwrap() {
        SaveAction::Create(req) => assert_eq!(req.username, "carol"),
        SaveAction::Update(..) => panic!("expected a registration"),
    }
}

#[test]
fn prepare_save_rejects_an_invalid_registration() {
    let state = UsersState::default();
    assert!(matches!(
        prepare_save(&state),
        Err(ApiError::Validation(_))
    ));
}

#[test]
fn deleting_own_account_is_refused() {
    let err = deletable(&profile("u1"), "u1").unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[test]
fn deleting_other_accounts_is_allowed() {
    assert!(deletable(&profile("u2"), "u1").is_ok());
}

#[test]
fn role_from_input_recognizes_admin_case_insensitively() {
    assert_eq!(role_from_input("ADMIN"), Role::Admin);
    assert_eq!(role_from_input("admin"), Role::Admin);
    assert_eq!(role_from_input("USER"), Role::User);
    assert_eq!(role_from_input("anything-else"), Role::User);
}

#[test]
fn open_edit_then_close_discards_the_form() {
    let mut state = UsersState::default();
    state.open_edit(profile("u2"));
    assert!(state.show_form);
    assert_eq!(state.editing.as_ref().map(|u| u.id.as_str()), Some("u2"));
    state.close_form();
    assert!(!state.show_form);
    assert!(state.editing.is_none());
    assert_eq!(state.form, UserForm::default());
}
