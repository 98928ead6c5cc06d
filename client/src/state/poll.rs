//! Poll state controller: has this device voted this period, and what
//! should the widget show.
//!
//! DESIGN
//! ======
//! One explicit state object per mounted widget, changed only through the
//! transition methods below. The in-memory `voted` bit flips synchronously
//! inside [`PollState::select`], before any network or storage work, so a
//! burst of clicks can never yield a second submission.
//!
//! ```text
//! NotVoted --select--> VotedAwaitingTruth --truth--> VotedTruthAvailable
//!                                                        |
//!                                              request_results
//!                                                        v
//!                                                  ViewingResults
//! ```
//!
//! There is no way back to `NotVoted` within a period.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use canvas::input::Scene;

use crate::util::vote_persistence::voted_flag_key;

/// Widget phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PollPhase {
    #[default]
    NotVoted,
    VotedAwaitingTruth,
    VotedTruthAvailable,
    ViewingResults,
}

/// The single submission a host must send after a successful selection.
///
/// The host writes the voted flag under `storage_key` right away, before the
/// submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteIntent {
    pub option_id: String,
    pub storage_key: String,
}

/// Per-mount poll state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollState {
    period_id: String,
    phase: PollPhase,
    voted: bool,
    truth: Option<String>,
}

impl PollState {
    #[must_use]
    pub fn new(period_id: impl Into<String>) -> Self {
        Self { period_id: period_id.into(), phase: PollPhase::NotVoted, voted: false, truth: None }
    }

    /// Apply the stored voted flag read on mount. Returns `true` when the host
    /// should pre-fetch the truth status.
    pub fn restore(&mut self, flag_present: bool) -> bool {
        if !flag_present {
            return false;
        }
        self.voted = true;
        if self.phase == PollPhase::NotVoted {
            self.phase = PollPhase::VotedAwaitingTruth;
        }
        self.truth.is_none()
    }

    /// The user picked `option_id`. Yields the vote to submit, once per period.
    pub fn select(&mut self, option_id: &str) -> Option<VoteIntent> {
        if self.voted {
            return None;
        }
        self.voted = true;
        self.phase = PollPhase::VotedAwaitingTruth;
        Some(VoteIntent { option_id: option_id.to_owned(), storage_key: self.storage_key() })
    }

    /// A truth fetch resolved. `None` (or an empty message) means "not yet".
    pub fn apply_truth(&mut self, truth: Option<String>) {
        let Some(message) = truth.filter(|m| !m.is_empty()) else {
            return;
        };
        if !self.voted {
            return;
        }
        self.truth = Some(message);
        if self.phase == PollPhase::VotedAwaitingTruth {
            self.phase = PollPhase::VotedTruthAvailable;
        }
    }

    /// The user asked for results. Only honoured once the truth is known.
    pub fn request_results(&mut self) -> bool {
        match self.phase {
            PollPhase::VotedTruthAvailable | PollPhase::ViewingResults => {
                self.phase = PollPhase::ViewingResults;
                true
            }
            PollPhase::NotVoted | PollPhase::VotedAwaitingTruth => false,
        }
    }

    /// localStorage key of this period's voted flag.
    #[must_use]
    pub fn storage_key(&self) -> String {
        voted_flag_key(&self.period_id)
    }

    #[must_use]
    pub fn phase(&self) -> PollPhase {
        self.phase
    }

    #[must_use]
    pub fn has_voted(&self) -> bool {
        self.voted
    }

    #[must_use]
    pub fn truth(&self) -> Option<&str> {
        self.truth.as_deref()
    }

    /// Canvas face for the current phase.
    #[must_use]
    pub fn scene(&self) -> Scene {
        match self.phase {
            PollPhase::NotVoted => Scene::Ballot,
            PollPhase::VotedAwaitingTruth => Scene::Voted { results_ready: false },
            PollPhase::VotedTruthAvailable | PollPhase::ViewingResults => Scene::Voted { results_ready: true },
        }
    }
}
