use std::collections::HashMap;

use super::*;
use crate::util::vote_persistence::{VOTED_VALUE, is_voted_value};

// =============================================================
// Helpers
// =============================================================

/// Mount a widget against an in-memory flag store, the way the page does
/// against localStorage.
fn mount(store: &HashMap<String, String>, period: &str) -> (PollState, bool) {
    let mut state = PollState::new(period);
    let present = is_voted_value(store.get(&state.storage_key()).map(String::as_str));
    let prefetch = state.restore(present);
    (state, prefetch)
}

fn voted(period: &str) -> PollState {
    let mut state = PollState::new(period);
    state.select("B");
    state
}

// =============================================================
// Mount / restore
// =============================================================

#[test]
fn fresh_state_is_selectable_ballot() {
    let state = PollState::new("2025-11");
    assert_eq!(state.phase(), PollPhase::NotVoted);
    assert!(!state.has_voted());
    assert_eq!(state.scene(), Scene::Ballot);
    assert_eq!(state.storage_key(), "voted_for_2025-11");
}

#[test]
fn absent_flag_needs_no_network_call() {
    let (state, prefetch) = mount(&HashMap::new(), "2025-11");
    assert!(!prefetch);
    assert_eq!(state.phase(), PollPhase::NotVoted);
}

#[test]
fn present_flag_restores_voted_and_prefetches_truth() {
    let mut store = HashMap::new();
    store.insert("voted_for_2025-11".to_owned(), VOTED_VALUE.to_owned());
    let (state, prefetch) = mount(&store, "2025-11");
    assert!(prefetch);
    assert!(state.has_voted());
    assert_eq!(state.phase(), PollPhase::VotedAwaitingTruth);
    assert_eq!(state.scene(), Scene::Voted { results_ready: false });
}

#[test]
fn vote_in_one_period_does_not_carry_to_the_next() {
    let mut store = HashMap::new();
    let (mut state, _) = mount(&store, "2025-11");
    state.select("A");
    store.insert(state.storage_key(), VOTED_VALUE.to_owned());

    let (same, _) = mount(&store, "2025-11");
    assert!(same.has_voted());
    let (next, prefetch) = mount(&store, "2025-12");
    assert!(!next.has_voted());
    assert!(!prefetch);
    assert_eq!(next.scene(), Scene::Ballot);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_yields_one_intent_with_option_id() {
    let mut state = PollState::new("p");
    assert_eq!(
        state.select("B"),
        Some(VoteIntent { option_id: "B".to_owned(), storage_key: "voted_for_p".to_owned() })
    );
    assert!(state.has_voted());
    assert_eq!(state.phase(), PollPhase::VotedAwaitingTruth);
}

#[test]
fn burst_of_selections_submits_exactly_once() {
    let mut state = PollState::new("p");
    let intents: Vec<VoteIntent> = ["A", "B", "C", "A", "E"].iter().filter_map(|id| state.select(id)).collect();
    assert_eq!(intents.len(), 1);
    assert_eq!(intents[0].option_id, "A");
}

#[test]
fn intent_carries_the_flag_key_for_its_period() {
    let mut state = PollState::new("2025-12");
    let intent = state.select("A").unwrap();
    assert_eq!(intent.storage_key, "voted_for_2025-12");
    assert_eq!(intent.storage_key, state.storage_key());
}

#[test]
fn restored_vote_blocks_selection() {
    let mut state = PollState::new("p");
    state.restore(true);
    assert_eq!(state.select("A"), None);
}

// =============================================================
// Truth
// =============================================================

#[test]
fn truth_unlocks_results_button() {
    let mut state = voted("p");
    state.apply_truth(Some("He paid nothing.".to_owned()));
    assert_eq!(state.phase(), PollPhase::VotedTruthAvailable);
    assert_eq!(state.truth(), Some("He paid nothing."));
    assert_eq!(state.scene(), Scene::Voted { results_ready: true });
}

#[test]
fn missing_or_empty_truth_keeps_waiting() {
    let mut state = voted("p");
    state.apply_truth(None);
    state.apply_truth(Some(String::new()));
    assert_eq!(state.phase(), PollPhase::VotedAwaitingTruth);
    assert_eq!(state.truth(), None);
}

#[test]
fn truth_before_voting_is_ignored() {
    let mut state = PollState::new("p");
    state.apply_truth(Some("early".to_owned()));
    assert_eq!(state.phase(), PollPhase::NotVoted);
    assert_eq!(state.truth(), None);
}

#[test]
fn truth_arriving_while_viewing_results_is_stored_without_phase_change() {
    let mut state = voted("p");
    state.apply_truth(Some("first".to_owned()));
    state.request_results();
    state.apply_truth(Some("second".to_owned()));
    assert_eq!(state.phase(), PollPhase::ViewingResults);
    assert_eq!(state.truth(), Some("second"));
}

#[test]
fn restore_after_truth_does_not_refetch() {
    let mut state = voted("p");
    state.apply_truth(Some("known".to_owned()));
    assert!(!state.restore(true));
    assert_eq!(state.phase(), PollPhase::VotedTruthAvailable);
}

// =============================================================
// Results
// =============================================================

#[test]
fn results_require_truth() {
    let mut state = PollState::new("p");
    assert!(!state.request_results());
    state.select("A");
    assert!(!state.request_results());
    assert_eq!(state.phase(), PollPhase::VotedAwaitingTruth);
}

#[test]
fn results_can_be_requested_again() {
    let mut state = voted("p");
    state.apply_truth(Some("t".to_owned()));
    assert!(state.request_results());
    assert!(state.request_results());
    assert_eq!(state.phase(), PollPhase::ViewingResults);
    assert!(state.has_voted());
}
