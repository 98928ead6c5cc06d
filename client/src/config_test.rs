use super::*;

// =============================================================
// Helpers
// =============================================================

fn sample() -> PollConfig {
    PollConfig {
        period_id: "2025-11".to_owned(),
        submit_url: "https://forms.example.com/formResponse".to_owned(),
        field_id: "entry.898720741".to_owned(),
        results_url: "https://results.example.com/exec".to_owned(),
        aliases: BTreeMap::new(),
        fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
    }
}

// =============================================================
// Options
// =============================================================

#[test]
fn poll_options_follow_ballot_order() {
    let options = poll_options();
    assert_eq!(options.len(), 5);
    assert_eq!(options[0].text, DEFAULT_OPTIONS[0]);
    assert_eq!(options[4].text, DEFAULT_OPTIONS[4]);
}

#[test]
fn poll_option_ids_are_emoji_free() {
    let ids: Vec<String> = poll_options().into_iter().map(|o| o.id).collect();
    assert_eq!(
        ids,
        vec![
            "He will pay nothing",
            "He will pay a small amount (under 25%)",
            "He will pay around half (~50%)",
            "He will pay most of it (75% or more)",
            "He will pay it in full (100%)",
        ]
    );
}

// =============================================================
// Embedded JSON
// =============================================================

#[test]
fn embedded_json_uses_camel_case() {
    let json = sample().to_embedded_json().unwrap();
    assert!(json.contains("\"periodId\":\"2025-11\""));
    assert!(json.contains("\"fetchTimeoutMs\":10000"));
}

#[test]
fn embedded_json_cannot_close_the_script_tag() {
    let mut config = sample();
    config.aliases.insert("</script><b>".to_owned(), "A".to_owned());
    let json = config.to_embedded_json().unwrap();
    assert!(!json.contains("</"));
    assert_eq!(PollConfig::from_embedded_json(&json).unwrap(), config);
}

#[test]
fn embedded_json_defaults_optional_fields() {
    let raw = r#"{"periodId":"p","submitUrl":"s","fieldId":"f","resultsUrl":"r"}"#;
    let config = PollConfig::from_embedded_json(raw).unwrap();
    assert!(config.aliases.is_empty());
    assert_eq!(config.fetch_timeout_ms, DEFAULT_FETCH_TIMEOUT_MS);
}

#[test]
fn embedded_json_missing_period_is_rejected() {
    let raw = r#"{"submitUrl":"s","fieldId":"f","resultsUrl":"r"}"#;
    assert!(PollConfig::from_embedded_json(raw).is_err());
}

// =============================================================
// Aliases
// =============================================================

#[test]
fn parse_aliases_reads_pairs_and_skips_blanks() {
    let aliases = parse_aliases(" B (typo) => B ;; Z=>A ;").unwrap();
    assert_eq!(aliases.len(), 2);
    assert_eq!(aliases["B (typo)"], "B");
    assert_eq!(aliases["Z"], "A");
}

#[test]
fn parse_aliases_empty_input_is_empty_table() {
    assert!(parse_aliases("").unwrap().is_empty());
}

#[test]
fn parse_aliases_rejects_entry_without_arrow() {
    let err = parse_aliases("A=>B;oops").unwrap_err();
    assert_eq!(err.entry, "oops");
}

#[test]
fn parse_aliases_rejects_empty_side() {
    assert!(parse_aliases("=>B").is_err());
    assert!(parse_aliases("A=>").is_err());
}

#[test]
fn resolve_alias_falls_back_to_reported_label() {
    let mut config = sample();
    config.aliases.insert("B (typo)".to_owned(), "B".to_owned());
    assert_eq!(config.resolve_alias("B (typo)"), "B");
    assert_eq!(config.resolve_alias("C"), "C");
}
