//! Results fetch state and label reconciliation.
//!
//! DESIGN
//! ======
//! The results endpoint and the client can disagree about labels (typos,
//! renamed options). [`reconcile`] charts the union: every declared option,
//! in ballot order, then any label only the endpoint knows (from its own
//! option list or its counts), sorted. An option nobody voted for shows as
//! zero instead of vanishing.
//!
//! Fetches are sequenced: at most one is in flight, and a response whose
//! sequence number is no longer current is dropped.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use std::collections::{BTreeMap, HashSet};

use canvas::chart::ChartModel;

use crate::net::api::ApiError;
use crate::net::types::ResultsPayload;

/// Shown in place of the chart when the fetch fails.
pub const LOAD_FAILED_MESSAGE: &str = "Sorry, could not load live results.";

/// What the results panel shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResultsView {
    #[default]
    Idle,
    Loading,
    Ready(ChartModel),
    Failed(String),
}

/// Fetch lifecycle for the results panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsState {
    pub view: ResultsView,
    truth: Option<String>,
    last_seq: u64,
    in_flight: Option<u64>,
}

impl ResultsState {
    /// Start a fetch. Returns its sequence number, or `None` if one is already running.
    pub fn begin_fetch(&mut self) -> Option<u64> {
        if self.in_flight.is_some() {
            return None;
        }
        self.last_seq += 1;
        self.in_flight = Some(self.last_seq);
        self.view = ResultsView::Loading;
        Some(self.last_seq)
    }

    /// Settle fetch `seq`. Returns `false` (and changes nothing) for a stale sequence.
    pub fn finish(
        &mut self,
        seq: u64,
        result: Result<ResultsPayload, ApiError>,
        declared: &[String],
        aliases: &BTreeMap<String, String>,
    ) -> bool {
        if self.in_flight != Some(seq) {
            return false;
        }
        self.in_flight = None;
        self.view = match result {
            Ok(payload) => {
                self.truth = payload.truth_message().map(str::to_owned);
                ResultsView::Ready(chart_model(&payload, declared, aliases))
            }
            Err(e) => {
                leptos::logging::warn!("results fetch failed: {e}");
                ResultsView::Failed(LOAD_FAILED_MESSAGE.to_owned())
            }
        };
        true
    }

    /// Forget any running fetch and go back to idle; its response will be ignored.
    pub fn reset(&mut self) {
        self.in_flight = None;
        self.view = ResultsView::Idle;
    }

    /// Truth message carried by the last successful results payload.
    #[must_use]
    pub fn truth(&self) -> Option<&str> {
        self.truth.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn chart(&self) -> Option<&ChartModel> {
        match &self.view {
            ResultsView::Ready(model) => Some(model),
            _ => None,
        }
    }
}

/// Union of declared and reported labels with their counts.
///
/// Reported labels (`reported_options` and the keys of `counts`) are first
/// mapped through `aliases`; counts that land on the same label are summed.
#[must_use]
pub fn reconcile(
    declared: &[String],
    reported_options: &[String],
    counts: &BTreeMap<String, u64>,
    aliases: &BTreeMap<String, String>,
) -> Vec<(String, u64)> {
    let mut merged: BTreeMap<&str, u64> = BTreeMap::new();
    for label in reported_options {
        merged.entry(aliases.get(label).unwrap_or(label).as_str()).or_default();
    }
    for (label, count) in counts {
        let canonical = aliases.get(label).unwrap_or(label);
        let slot = merged.entry(canonical.as_str()).or_default();
        *slot = slot.saturating_add(*count);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows = Vec::with_capacity(declared.len() + merged.len());
    for label in declared {
        if seen.insert(label.as_str()) {
            rows.push((label.clone(), merged.get(label.as_str()).copied().unwrap_or(0)));
        }
    }
    for (label, count) in &merged {
        if seen.insert(*label) {
            rows.push(((*label).to_owned(), *count));
        }
    }
    rows
}

/// Chart model for a fetched payload.
#[must_use]
pub fn chart_model(payload: &ResultsPayload, declared: &[String], aliases: &BTreeMap<String, String>) -> ChartModel {
    let month = &payload.current_month;
    ChartModel::new(reconcile(declared, &month.options, &month.counts, aliases), payload.total_votes)
}
