use super::*;

#[test]
fn card_endpoint_formats_expected_path() {
    assert_eq!(card_endpoint("65a1b2c3"), "/api/cards/65a1b2c3");
}

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("u42"), "/api/users/u42");
}
