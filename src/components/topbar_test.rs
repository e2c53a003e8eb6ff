use super::*;

#[test]
fn tab_class_marks_active_tab() {
    assert_eq!(tab_class(true), "btn toolbar__tab toolbar__tab--active");
    assert_eq!(tab_class(false), "btn toolbar__tab");
}

#[test]
fn role_label_covers_both_roles() {
    assert_eq!(role_label(Role::Admin), "admin");
    assert_eq!(role_label(Role::User), "user");
}
