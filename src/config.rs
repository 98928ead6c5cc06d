//! Operator configuration read from the process environment.
//!
//! Every poll setting the widget needs at runtime is validated here at
//! startup, so a misconfigured deployment fails before it serves a page
//! rather than shipping a widget that cannot submit.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{AliasParseError, DEFAULT_FETCH_TIMEOUT_MS, PollConfig, parse_aliases};

/// Listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
    #[error("POLL_LABEL_ALIASES: {0}")]
    Aliases(#[from] AliasParseError),
}

/// Everything the page host needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub poll: PollConfig,
    pub port: u16,
}

impl HostConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Same as [`HostConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing { var })
        };

        let period_id = required("POLL_PERIOD_ID")?;
        let submit_url = required("POLL_SUBMIT_URL")?;
        let field_id = required("POLL_FIELD_ID")?;
        let results_url = required("POLL_RESULTS_URL")?;
        require_http_url("POLL_SUBMIT_URL", &submit_url)?;
        require_http_url("POLL_RESULTS_URL", &results_url)?;

        let aliases = parse_aliases(&lookup("POLL_LABEL_ALIASES").unwrap_or_default())?;
        let fetch_timeout_ms = parse_or("POLL_FETCH_TIMEOUT_MS", lookup("POLL_FETCH_TIMEOUT_MS"), DEFAULT_FETCH_TIMEOUT_MS)?;
        if fetch_timeout_ms == 0 {
            return Err(ConfigError::Invalid { var: "POLL_FETCH_TIMEOUT_MS", reason: "must be positive".into() });
        }
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        Ok(Self {
            poll: PollConfig { period_id, submit_url, field_id, results_url, aliases, fetch_timeout_ms },
            port,
        })
    }
}

fn require_http_url(var: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(())
    } else {
        Err(ConfigError::Invalid { var, reason: format!("expected an http(s) URL, got {value:?}") })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|e: T::Err| ConfigError::Invalid { var, reason: e.to_string() }),
    }
}
