//! Outbound HTTP calls: vote submission and the results endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each bounded by a
//! `gloo-timers` timeout. Server-side (SSR): stubs returning
//! [`ApiError::Unavailable`]/`None` since these calls only make sense in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result`/`Option` instead of panicking so a dead
//! endpoint degrades the widget (alert, "could not load" message, missing
//! results button) without breaking hydration. Nothing is retried. A timed-out
//! request is abandoned, not cancelled; its late response is dropped.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ResultsPayload;

/// Failure of an outbound call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed results body: {0}")]
    Parse(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("network calls are only available in the browser")]
    Unavailable,
}

/// `application/x-www-form-urlencoded` body carrying one field.
pub fn vote_form_body(field_id: &str, option_id: &str) -> String {
    format!("{}={}", urlencoding::encode(field_id), urlencoding::encode(option_id))
}

/// Map a response status to success or [`ApiError::Status`].
///
/// # Errors
///
/// Returns [`ApiError::Status`] for anything outside `200..=299`.
pub fn ensure_success(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Parse a results body.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] when the body is not a JSON document of the
/// expected shape (individual fields are read leniently).
pub fn parse_results(body: &str) -> Result<ResultsPayload, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Whether a failed vote submission is worth telling the voter about.
///
/// Only a transport failure means the vote never left the browser. A timeout
/// is indeterminate (the form may still record it) and is logged instead.
#[must_use]
pub fn should_alert(err: &ApiError) -> bool {
    matches!(err, ApiError::Transport(_))
}

/// Submit one vote to the form-collection endpoint.
///
/// The request is `no-cors`, so the response is opaque: `Ok` means the
/// request left the browser, not that the form accepted it.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] if the request could not be sent and
/// [`ApiError::Timeout`] if it did not settle in time.
pub async fn submit_vote(submit_url: &str, field_id: &str, option_id: &str, timeout_ms: u32) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = vote_form_body(field_id, option_id);
        let request = gloo_net::http::Request::post(submit_url)
            .mode(web_sys::RequestMode::NoCors)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        with_timeout(timeout_ms, async move {
            request
                .send()
                .await
                .map(|_| ())
                .map_err(|e| ApiError::Transport(e.to_string()))
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (submit_url, field_id, option_id, timeout_ms);
        Err(ApiError::Unavailable)
    }
}

/// Fetch and parse the aggregate results document.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, unparseable
/// body, or timeout.
pub async fn fetch_results(results_url: &str, timeout_ms: u32) -> Result<ResultsPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = results_url.to_owned();
        with_timeout(timeout_ms, async move {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            ensure_success(resp.status())?;
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            parse_results(&body)
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (results_url, timeout_ms);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the truth message. Any failure reads as "not available yet".
pub async fn fetch_truth(results_url: &str, timeout_ms: u32) -> Option<String> {
    match fetch_results(results_url, timeout_ms).await {
        Ok(payload) => payload.truth_message().map(str::to_owned),
        Err(e) => {
            leptos::logging::warn!("could not fetch truth status: {e}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
async fn with_timeout<T>(
    timeout_ms: u32,
    work: impl std::future::Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    use futures::future::{Either, select};

    let work = std::pin::pin!(work);
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));
    match select(work, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(timeout_ms)),
    }
}
