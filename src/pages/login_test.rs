use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  admin  ", "pw"),
        Ok(("admin".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("   ", "pw"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("admin", ""),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords may legitimately contain leading or trailing spaces.
    assert_eq!(
        validate_login_input("admin", "  spaced  "),
        Ok(("admin".to_owned(), "  spaced  ".to_owned()))
    );
}
