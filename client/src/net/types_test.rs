use super::*;

// =============================================================
// Helpers
// =============================================================

fn parse(raw: &str) -> ResultsPayload {
    serde_json::from_str(raw).unwrap()
}

// =============================================================
// Full documents
// =============================================================

#[test]
fn well_formed_payload_parses() {
    let payload = parse(
        r#"{
            "currentMonth": {"counts": {"A": 3, "B": 0, "B (typo)": 2}, "options": ["A", "B"]},
            "totalVotes": 5,
            "trueAnswer": {"displayAnswer": "He paid nothing."}
        }"#,
    );
    assert_eq!(payload.current_month.counts["A"], 3);
    assert_eq!(payload.current_month.counts["B (typo)"], 2);
    assert_eq!(payload.current_month.options, vec!["A", "B"]);
    assert_eq!(payload.total_votes, 5);
    assert_eq!(payload.truth_message(), Some("He paid nothing."));
}

#[test]
fn empty_object_is_all_defaults() {
    let payload = parse("{}");
    assert_eq!(payload, ResultsPayload::default());
    assert_eq!(payload.truth_message(), None);
}

#[test]
fn null_and_mistyped_sections_fall_back() {
    let payload = parse(
        r#"{"currentMonth": {"counts": null, "options": "nope"}, "totalVotes": "7", "trueAnswer": false}"#,
    );
    assert!(payload.current_month.counts.is_empty());
    assert!(payload.current_month.options.is_empty());
    assert_eq!(payload.total_votes, 7);
    assert!(payload.true_answer.is_none());
}

#[test]
fn non_json_body_is_an_error() {
    assert!(serde_json::from_str::<ResultsPayload>("<html>").is_err());
}

// =============================================================
// Counts
// =============================================================

#[test]
fn counts_are_clamped_to_non_negative_integers() {
    let payload = parse(r#"{"currentMonth": {"counts": {"neg": -4, "frac": 2.9, "str": " 3 ", "bool": true}}}"#);
    let counts = &payload.current_month.counts;
    assert_eq!(counts["neg"], 0);
    assert_eq!(counts["frac"], 2);
    assert_eq!(counts["str"], 3);
    assert_eq!(counts["bool"], 0);
}

#[test]
fn non_string_option_entries_are_dropped() {
    let payload = parse(r#"{"currentMonth": {"options": ["A", 1, null, "B"]}}"#);
    assert_eq!(payload.current_month.options, vec!["A", "B"]);
}

// =============================================================
// Truth message
// =============================================================

#[test]
fn empty_or_missing_display_answer_is_no_truth() {
    assert_eq!(parse(r#"{"trueAnswer": {"displayAnswer": ""}}"#).truth_message(), None);
    assert_eq!(parse(r#"{"trueAnswer": {}}"#).truth_message(), None);
    assert_eq!(parse(r#"{"trueAnswer": {"displayAnswer": 42}}"#).truth_message(), None);
}
