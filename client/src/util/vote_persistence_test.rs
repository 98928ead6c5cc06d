use super::*;

#[test]
fn key_is_scoped_by_period() {
    assert_eq!(voted_flag_key("2025-11"), "voted_for_2025-11");
    assert_ne!(voted_flag_key("2025-11"), voted_flag_key("2025-12"));
}

#[test]
fn only_exact_true_counts_as_voted() {
    assert!(is_voted_value(Some("true")));
    assert!(!is_voted_value(Some("TRUE")));
    assert!(!is_voted_value(Some("1")));
    assert!(!is_voted_value(None));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn without_a_browser_nothing_is_voted() {
    assert!(!has_voted("voted_for_2025-11"));
    assert_eq!(mark_voted("voted_for_2025-11"), Err(PersistError::Unavailable));
}
