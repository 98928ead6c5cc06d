//! Poll page: owns the widget state and runs the vote and results flows.
//!
//! ARCHITECTURE
//! ============
//! `PollState` and `ResultsState` live in page-scoped signals. The canvas
//! reports picks and results requests through callbacks; this page applies
//! them to the state machines and fires the outbound calls with
//! `spawn_local`. The vote submission and the truth fetch start back to back
//! and may settle in either order.

use leptos::prelude::*;

use crate::components::poll_canvas::PollCanvas;
use crate::components::results_panel::ResultsPanel;
use crate::config::{PollConfig, QUESTION, poll_options};
use crate::state::poll::{PollPhase, PollState};
use crate::state::results::ResultsState;

/// Shown once when the vote request could not be sent.
pub const SUBMIT_FAILED_ALERT: &str = "There was a problem submitting. Please check your connection.";

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Fetch the truth status and feed it to the poll state.
fn spawn_truth_fetch(config: &PollConfig, poll: RwSignal<PollState>) {
    #[cfg(feature = "hydrate")]
    {
        let url = config.results_url.clone();
        let timeout_ms = config.fetch_timeout_ms;
        leptos::task::spawn_local(async move {
            let truth = crate::net::api::fetch_truth(&url, timeout_ms).await;
            poll.update(|p| p.apply_truth(truth));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, poll);
    }
}

/// Send the vote. The voted flag is already persisted by the caller.
fn spawn_vote(config: &PollConfig, option_id: String) {
    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let sent = crate::net::api::submit_vote(
                &config.submit_url,
                &config.field_id,
                &option_id,
                config.fetch_timeout_ms,
            )
            .await;
            if let Err(e) = sent {
                leptos::logging::warn!("vote submission failed: {e}");
                if crate::net::api::should_alert(&e) {
                    alert(SUBMIT_FAILED_ALERT);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, option_id);
    }
}

/// Write the voted flag now, so a reload mid-submission keeps the vote.
fn persist_vote(storage_key: &str) {
    if let Err(e) = crate::util::vote_persistence::mark_voted(storage_key) {
        leptos::logging::warn!("could not persist voted flag: {e}");
    }
}

/// Fetch results for the panel, unless a fetch is already running.
fn spawn_results_fetch(
    config: &PollConfig,
    poll: RwSignal<PollState>,
    results: RwSignal<ResultsState>,
    declared: Vec<String>,
) {
    let Some(seq) = results.try_update(ResultsState::begin_fetch).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let url = config.results_url.clone();
        let timeout_ms = config.fetch_timeout_ms;
        let aliases = config.aliases.clone();
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_results(&url, timeout_ms).await;
            // A truth message in the results payload outranks the earlier fetch.
            let truth = results
                .try_update(|r| {
                    let current = r.finish(seq, fetched, &declared, &aliases);
                    current.then(|| r.truth().map(str::to_owned)).flatten()
                })
                .flatten();
            if truth.is_some() {
                poll.try_update(|p| p.apply_truth(truth));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, poll, seq, declared);
    }
}

/// The poll page.
#[component]
pub fn PollPage() -> impl IntoView {
    let config = expect_context::<PollConfig>();
    let options = poll_options();
    let option_texts: Vec<String> = options.iter().map(|o| o.text.clone()).collect();
    let declared: Vec<String> = options.iter().map(|o| o.id.clone()).collect();

    let poll = RwSignal::new(PollState::new(config.period_id.clone()));
    let results = RwSignal::new(ResultsState::default());

    // Restore the voted flag once, in the browser.
    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        Effect::new(move |restored: Option<()>| {
            if restored.is_some() {
                return;
            }
            let key = poll.with_untracked(PollState::storage_key);
            let flag = crate::util::vote_persistence::has_voted(&key);
            if poll.try_update(|p| p.restore(flag)).unwrap_or(false) {
                spawn_truth_fetch(&config, poll);
            }
        });
    }

    let on_vote = {
        let config = config.clone();
        Callback::new(move |index: usize| {
            let Some(option) = options.get(index) else {
                return;
            };
            let Some(intent) = poll.try_update(|p| p.select(&option.id)).flatten() else {
                return;
            };
            persist_vote(&intent.storage_key);
            spawn_vote(&config, intent.option_id);
            spawn_truth_fetch(&config, poll);
        })
    };

    let on_show_results = {
        let config = config.clone();
        Callback::new(move |()| {
            if poll.try_update(PollState::request_results).unwrap_or(false) {
                spawn_results_fetch(&config, poll, results, declared.clone());
            }
        })
    };

    let scene = Signal::derive(move || poll.with(PollState::scene));
    let viewing_results = move || poll.with(|p| p.phase() == PollPhase::ViewingResults);
    let truth = Signal::derive(move || poll.with(|p| p.truth().map(str::to_owned)));

    view! {
        <main class="poll-page">
            <div class="poll-container" style:display=move || if viewing_results() { "none" } else { "block" }>
                <PollCanvas
                    question=QUESTION.to_owned()
                    options=option_texts
                    scene=scene
                    on_vote=on_vote
                    on_show_results=on_show_results
                />
            </div>
            <Show when=viewing_results>
                <ResultsPanel results=results truth=truth/>
            </Show>
        </main>
    }
}
