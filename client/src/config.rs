//! Poll content and operator configuration.
//!
//! DESIGN
//! ======
//! The question and its options are compile-time constants. Everything that
//! changes between deployments (period id, endpoints, alias table, timeout)
//! lives in [`PollConfig`], which the page host builds from its environment
//! and embeds in the SSR shell as JSON for the hydrating client to read back.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::util::labels::canonical_label;

/// The poll question, as drawn on the canvas.
pub const QUESTION: &str = "How much of this month\u{2019}s loan installment will he pay? \u{1F914}";

/// Option display texts in ballot order.
pub const DEFAULT_OPTIONS: [&str; 5] = [
    "He will pay nothing \u{1F645}\u{200D}\u{2642}\u{FE0F}",
    "He will pay a small amount (under 25%) \u{1F90F}",
    "He will pay around half (~50%) \u{2696}\u{FE0F}",
    "He will pay most of it (75% or more) \u{1F44D}",
    "He will pay it in full (100%) \u{1F607}",
];

/// DOM id of the `<script type="application/json">` carrying the config.
pub const CONFIG_ELEMENT_ID: &str = "poll-config";

/// Network timeout when the operator does not set one.
pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 10_000;

/// One selectable answer: canonical id plus the text drawn on the ballot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollOption {
    pub id: String,
    pub text: String,
}

impl PollOption {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self { id: canonical_label(text), text: text.to_owned() }
    }
}

/// The fixed option list, with ids derived from the display text.
#[must_use]
pub fn poll_options() -> Vec<PollOption> {
    DEFAULT_OPTIONS.iter().map(|t| PollOption::from_text(t)).collect()
}

/// Deployment settings shared by the page host and the widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollConfig {
    /// Scopes the one-vote rule, e.g. `2025-11`.
    pub period_id: String,
    /// Form-collection endpoint receiving the vote.
    pub submit_url: String,
    /// Name of the single form field, e.g. `entry.898720741`.
    pub field_id: String,
    /// Aggregate results endpoint.
    pub results_url: String,
    /// Reported label -> canonical label.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u32,
}

fn default_fetch_timeout_ms() -> u32 {
    DEFAULT_FETCH_TIMEOUT_MS
}

impl PollConfig {
    /// The canonical label a reported label stands for.
    #[must_use]
    pub fn resolve_alias<'a>(&'a self, reported: &'a str) -> &'a str {
        self.aliases.get(reported).map_or(reported, String::as_str)
    }

    /// JSON safe to place inside a `<script>` element.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_embedded_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }

    /// Parse the JSON produced by [`PollConfig::to_embedded_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a valid config document.
    pub fn from_embedded_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw.trim())
    }
}

/// A `reported=>canonical` entry that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid label alias entry: {entry:?} (expected `reported=>canonical`)")]
pub struct AliasParseError {
    pub entry: String,
}

/// Parse an alias table of the form `a=>b;c=>d`. Empty entries are skipped.
///
/// # Errors
///
/// Returns [`AliasParseError`] for an entry without `=>` or with an empty side.
pub fn parse_aliases(raw: &str) -> Result<BTreeMap<String, String>, AliasParseError> {
    let mut out = BTreeMap::new();
    for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((from, to)) = entry.split_once("=>") else {
            return Err(AliasParseError { entry: entry.to_owned() });
        };
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(AliasParseError { entry: entry.to_owned() });
        }
        out.insert(from.to_owned(), to.to_owned());
    }
    Ok(out)
}

/// Read the config the page host embedded in the shell.
pub fn read_embedded() -> Option<PollConfig> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()?
            .document()?
            .get_element_by_id(CONFIG_ELEMENT_ID)?
            .text_content()?;
        match PollConfig::from_embedded_json(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                leptos::logging::warn!("embedded poll config is malformed: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
