use super::*;

#[test]
fn card_deserializes_with_extended_json_oid() {
    let card: Card = serde_json::from_value(serde_json::json!({
        "_id": { "$oid": "65a1b2c3d4e5f6a7b8c9d0e1" },
        "card_number": "ABCD1234EFGH5678",
        "is_activated": false
    }))
    .unwrap();
    assert_eq!(card.id, "65a1b2c3d4e5f6a7b8c9d0e1");
    assert!(!card.is_activated);
    assert_eq!(card.expires_at, None);
}

#[test]
fn card_deserializes_with_plain_string_underscore_id() {
    let card: Card = serde_json::from_value(serde_json::json!({
        "_id": "abc123",
        "card_number": "K1"
    }))
    .unwrap();
    assert_eq!(card.id, "abc123");
}

#[test]
fn card_deserializes_with_bare_id_field() {
    let card: Card = serde_json::from_value(serde_json::json!({
        "id": "xyz789",
        "card_number": "K2",
        "is_activated": true,
        "expires_at_str": "2026-09-01T00:00:00Z",
        "used_by_identifier": "device-1",
        "created_by_username": "admin"
    }))
    .unwrap();
    assert_eq!(card.id, "xyz789");
    assert!(card.expires_at.is_some());
    assert_eq!(card.used_by_identifier.as_deref(), Some("device-1"));
    assert_eq!(card.created_by_username.as_deref(), Some("admin"));
}

#[test]
fn card_without_any_id_is_rejected() {
    let result: Result<Card, _> = serde_json::from_value(serde_json::json!({
        "card_number": "ORPHAN"
    }));
    assert!(result.is_err());
}

#[test]
fn card_with_unparseable_expiry_keeps_expiry_absent() {
    let card: Card = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "card_number": "K3",
        "is_activated": true,
        "expires_at_str": "not a date"
    }))
    .unwrap();
    assert_eq!(card.expires_at, None);
}

#[test]
fn role_accepts_uppercase_and_mixed_case() {
    assert_eq!(serde_json::from_str::<Role>("\"ADMIN\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"Admin\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"USER\"").unwrap(), Role::User);
    assert_eq!(serde_json::from_str::<Role>("\"User\"").unwrap(), Role::User);
}

#[test]
fn role_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
}

#[test]
fn one_or_many_decodes_both_generation_response_shapes() {
    let one: OneOrMany<Card> = serde_json::from_value(serde_json::json!({
        "id": "c1", "card_number": "K1"
    }))
    .unwrap();
    assert_eq!(one.count(), 1);

    let many: OneOrMany<Card> = serde_json::from_value(serde_json::json!([
        { "id": "c1", "card_number": "K1" },
        { "id": "c2", "card_number": "K2" }
    ]))
    .unwrap();
    assert_eq!(many.count(), 2);
}

#[test]
fn update_request_omits_absent_fields() {
    let body = serde_json::to_value(UpdateUserRequest {
        email: None,
        role: Some(Role::User),
        password: None,
    })
    .unwrap();
    let map = body.as_object().unwrap();
    assert!(!map.contains_key("password"));
    assert!(!map.contains_key("email"));
    assert_eq!(map.get("role").unwrap(), "USER");
}

#[test]
fn create_request_omits_absent_email() {
    let body = serde_json::to_value(CreateUserRequest {
        username: "alice".to_owned(),
        password: "secret".to_owned(),
        email: None,
        role: Role::Admin,
    })
    .unwrap();
    assert!(!body.as_object().unwrap().contains_key("email"));
}

#[test]
fn parse_rfc3339_handles_offsets() {
    let parsed = parse_rfc3339("2026-01-02T03:04:05+08:00").unwrap();
    assert_eq!(parsed.to_rfc3339(), "2026-01-01T19:04:05+00:00");
}
