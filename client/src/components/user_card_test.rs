use super::*;

#[test]
fn display_user_name_capitalizes_first_letter_only() {
    assert_eq!(display_user_name(Some("aLICE")), "Alice");
    assert_eq!(display_user_name(Some("bob")), "Bob");
}

#[test]
fn display_user_name_missing_or_blank_is_guest() {
    assert_eq!(display_user_name(None), "Guest");
    assert_eq!(display_user_name(Some("")), "Guest");
    assert_eq!(display_user_name(Some("   ")), "Guest");
}

#[test]
fn display_user_name_single_character() {
    assert_eq!(display_user_name(Some("z")), "Z");
}

#[test]
fn display_user_name_keeps_inner_spaces() {
    assert_eq!(display_user_name(Some("mary ANN")), "Mary ann");
}
