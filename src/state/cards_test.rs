use super::*;
use chrono::TimeZone;

fn card(number: &str) -> Card {
    Card {
        id: format!("id-{number}"),
        card_number: number.to_owned(),
        is_activated: false,
        expires_at: None,
        used_by_identifier: None,
        created_by_username: None,
        created_at: None,
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn status_not_activated_wins_over_everything() {
    let mut c = card("K1");
    c.is_activated = false;
    c.expires_at = Some(now() - chrono::Duration::days(1));
    c.used_by_identifier = Some("device".to_owned());
    assert_eq!(card_status(&c, now()), CardStatus::NotActivated);
}

#[test]
fn status_expired_wins_over_used() {
    let mut c = card("K1");
    c.is_activated = true;
    c.expires_at = Some(now() - chrono::Duration::seconds(1));
    c.used_by_identifier = Some("device".to_owned());
    assert_eq!(card_status(&c, now()), CardStatus::Expired);
}

#[test]
fn status_used_when_activated_and_unexpired() {
    let mut c = card("K1");
    c.is_activated = true;
    c.expires_at = Some(now() + chrono::Duration::days(30));
    c.used_by_identifier = Some("device".to_owned());
    assert_eq!(card_status(&c, now()), CardStatus::Used);
}

#[test]
fn status_active_otherwise() {
    let mut c = card("K1");
    c.is_activated = true;
    c.expires_at = Some(now() + chrono::Duration::days(30));
    assert_eq!(card_status(&c, now()), CardStatus::Active);
    // Absent expiry on an activated card is not expired.
    c.expires_at = None;
    assert_eq!(card_status(&c, now()), CardStatus::Active);
}

#[test]
fn status_is_one_of_four_labels() {
    for status in [
        CardStatus::NotActivated,
        CardStatus::Expired,
        CardStatus::Used,
        CardStatus::Active,
    ] {
        assert!(!status.label().is_empty());
        assert!(status.badge_class().starts_with("bg-"));
    }
}

#[test]
fn filter_empty_query_returns_everything() {
    let cards = vec![card("ABC"), card("DEF")];
    assert_eq!(filter_cards(&cards, "", now()).len(), 2);
    assert_eq!(filter_cards(&cards, "   ", now()).len(), 2);
}

#[test]
fn filter_matches_card_number_case_insensitively() {
    let cards = vec![card("AbCdEf"), card("XYZ")];
    let hits = filter_cards(&cards, "bcd", now());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].card_number, "AbCdEf");
}

#[test]
fn filter_matches_creator_username() {
    let mut c = card("K1");
    c.created_by_username = Some("Admin".to_owned());
    let cards = vec![c, card("K2")];
    let hits = filter_cards(&cards, "admin", now());
    assert_eq!(hits.len(), 1);
}

#[test]
fn filter_matches_status_label() {
    let mut used = card("K1");
    used.is_activated = true;
    used.used_by_identifier = Some("d1".to_owned());
    let cards = vec![used, card("K2")];
    let hits = filter_cards(&cards, "used", now());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].card_number, "K1");
}

#[test]
fn filter_is_idempotent_and_non_mutating() {
    let cards = vec![card("ABC"), card("BCD"), card("XYZ")];
    let snapshot = cards.clone();
    let once = filter_cards(&cards, "bc", now());
    let twice = filter_cards(&once, "bc", now());
    assert_eq!(once, twice);
    assert_eq!(cards, snapshot);
}

#[test]
fn validate_accepts_range_bounds() {
    let form = GenerateForm {
        duration_days: "30".to_owned(),
        count: "1".to_owned(),
    };
    assert_eq!(
        validate_generate(&form).unwrap(),
        GenerateCardsRequest {
            duration_days: 30,
            count: 1
        }
    );
    let form = GenerateForm {
        duration_days: "1".to_owned(),
        count: "100".to_owned(),
    };
    assert!(validate_generate(&form).is_ok());
}

#[test]
fn validate_rejects_count_out_of_range() {
    for count in ["0", "101", "-3", "abc", ""] {
        let form = GenerateForm {
            duration_days: "30".to_owned(),
            count: count.to_owned(),
        };
        assert!(
            matches!(validate_generate(&form), Err(ApiError::Validation(_))),
            "count {count:?} should be rejected"
        );
    }
}

#[test]
fn validate_rejects_non_positive_duration() {
    for duration in ["0", "-1", "1.5", ""] {
        let form = GenerateForm {
            duration_days: duration.to_owned(),
            count: "3".to_owned(),
        };
        assert!(
            matches!(validate_generate(&form), Err(ApiError::Validation(_))),
            "duration {duration:?} should be rejected"
        );
    }
}

#[test]
fn generate_form_defaults_match_backend_defaults() {
    let form = GenerateForm::default();
    assert_eq!(form.duration_days, "30");
    assert_eq!(form.count, "1");
}

#[test]
fn close_generate_keeps_last_submitted_values() {
    let mut state = CardsState {
        show_generate: true,
        generate_pending: true,
        form_error: Some("x".to_owned()),
        form: GenerateForm {
            duration_days: "90".to_owned(),
            count: "25".to_owned(),
        },
        ..CardsState::default()
    };
    state.close_generate();
    assert!(!state.show_generate);
    assert!(!state.generate_pending);
    assert!(state.form_error.is_none());
    assert_eq!(state.form.count, "25");
    assert_eq!(state.form.duration_days, "90");
}
