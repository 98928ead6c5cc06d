//! Browser localStorage access for the per-period voted flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flag is the only thing the widget keeps across sessions. It lives under
//! `voted_for_<period>` with the value `"true"`; a new period id means a new
//! key, so the previous vote simply stops applying.

#[cfg(test)]
#[path = "vote_persistence_test.rs"]
mod vote_persistence_test;

/// Prefix of every voted-flag key.
pub const VOTED_KEY_PREFIX: &str = "voted_for_";

/// Value stored for a cast vote.
pub const VOTED_VALUE: &str = "true";

/// Storage key for `period_id`.
#[must_use]
pub fn voted_flag_key(period_id: &str) -> String {
    format!("{VOTED_KEY_PREFIX}{period_id}")
}

/// Whether a stored value counts as "voted".
#[must_use]
pub fn is_voted_value(raw: Option<&str>) -> bool {
    raw == Some(VOTED_VALUE)
}

/// Why the flag could not be written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistError {
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("localStorage write rejected: {0}")]
    Write(String),
}

/// Read the voted flag for `key`. Missing storage reads as "not voted".
pub fn has_voted(key: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(key).ok().flatten());
        is_voted_value(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        false
    }
}

/// Persist the voted flag under `key`.
///
/// # Errors
///
/// Returns [`PersistError`] when storage is missing or rejects the write
/// (private mode, quota).
pub fn mark_voted(key: &str) -> Result<(), PersistError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(PersistError::Unavailable)?;
        storage
            .set_item(key, VOTED_VALUE)
            .map_err(|e| PersistError::Write(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Err(PersistError::Unavailable)
    }
}
