use super::*;

#[test]
fn text_or_dash_passes_values_through() {
    assert_eq!(text_or_dash(Some("admin".to_owned())), "admin");
}

#[test]
fn text_or_dash_dashes_absent_and_empty() {
    assert_eq!(text_or_dash(None), "-");
    assert_eq!(text_or_dash(Some(String::new())), "-");
}
