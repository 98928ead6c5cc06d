//! Wire schema of the aggregate results endpoint.
//!
//! DESIGN
//! ======
//! The endpoint is a loosely maintained script, so every field is optional
//! and every value is read leniently: missing or mistyped fields fall back to
//! empty/zero/absent instead of failing the whole document. Only a body that
//! is not JSON at all is a parse error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Aggregate results document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPayload {
    #[serde(default)]
    pub current_month: MonthResults,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_votes: u64,
    #[serde(default, deserialize_with = "deserialize_true_answer")]
    pub true_answer: Option<TrueAnswer>,
}

/// Counts for the running period.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MonthResults {
    /// Reported label -> vote count.
    #[serde(default, deserialize_with = "deserialize_counts")]
    pub counts: BTreeMap<String, u64>,
    /// Labels the endpoint declares for the period, in its own order.
    #[serde(default, deserialize_with = "deserialize_labels")]
    pub options: Vec<String>,
}

/// The revealed outcome, once the operator publishes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrueAnswer {
    pub display_answer: Option<String>,
}

impl ResultsPayload {
    /// The truth message, when present and non-empty.
    #[must_use]
    pub fn truth_message(&self) -> Option<&str> {
        self.true_answer
            .as_ref()
            .and_then(|t| t.display_answer.as_deref())
            .filter(|msg| !msg.is_empty())
    }
}

/// Coerce a JSON value to a vote count: negative and fractional numbers are
/// clamped/truncated, numeric strings are parsed, anything else is zero.
#[must_use]
pub fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return int;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
            match number.as_f64() {
                Some(float) if float.is_finite() && float > 0.0 => float.min(u64::MAX as f64).trunc() as u64,
                _ => 0,
            }
        }
        Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_or(0, |f| count_from_value(&Value::from(f))),
        _ => 0,
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn deserialize_counts<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(map) = value else {
        return Ok(BTreeMap::new());
    };
    Ok(map.iter().map(|(label, v)| (label.clone(), count_from_value(v))).collect())
}

fn deserialize_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(label) => Some(label),
            _ => None,
        })
        .collect())
}

fn deserialize_true_answer<'de, D>(deserializer: D) -> Result<Option<TrueAnswer>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(map) = value else {
        return Ok(None);
    };
    let display_answer = map
        .get("displayAnswer")
        .and_then(Value::as_str)
        .map(str::to_owned);
    Ok(Some(TrueAnswer { display_answer }))
}
