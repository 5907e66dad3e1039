//! Lenient decoding of external API responses
//!
//! External responses are only partially reliable: top-level keys go missing,
//! collections come back as `null`, and individual records occasionally carry a
//! field of the wrong type. Cleaners must never fail on such input, so raw records
//! are decoded through these helpers instead of `serde_json::from_value` directly.
//!
//! - [`decode`]: whole-document decoding that degrades to `T::default()`
//! - [`lenient_vec`]: `deserialize_with` adapter decoding each array element on its own
//! - [`lenient`]: `deserialize_with` adapter turning a mistyped scalar into `None`
//! - [`non_empty`]: truthiness check used when a blank string must count as absent
//! - [`truthy`]: whether a whole response counts as present

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a raw response into `T`, falling back to `T::default()`.
///
/// `null` and other non-object bodies decode to the default silently; a body that
/// is an object but still fails to decode is logged before falling back.
#[must_use]
pub fn decode<T>(value: &Value) -> T
where
    T: DeserializeOwned + Default,
{
    if !value.is_object() {
        return T::default();
    }

    match serde_json::from_value(value.clone()) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!(
                target: "outreach::json",
                error = %e,
                record = std::any::type_name::<T>(),
                "falling back to empty record"
            );
            T::default()
        }
    }
}

/// `deserialize_with` adapter for optional collections.
///
/// Absent or non-array values become `None`; every element of an array is decoded
/// on its own, so one malformed element becomes `T::default()` instead of
/// discarding the rest.
/// Use together with `#[serde(default)]`.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value at all.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(items.into_iter().map(element).collect()),
        _ => None,
    })
}

fn element<T>(item: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if item.is_null() {
        return T::default();
    }

    serde_json::from_value(item).unwrap_or_else(|e| {
        tracing::warn!(
            target: "outreach::json",
            error = %e,
            record = std::any::type_name::<T>(),
            "falling back to empty element"
        );
        T::default()
    })
}

/// `deserialize_with` adapter for optional scalars.
///
/// A value of the wrong type is treated as absent rather than failing the record.
/// Use together with `#[serde(default)]`.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value at all.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// `Some(s)` only when `s` is present and not empty
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Whether a response body counts as present.
///
/// `null`, `false`, `0` and `""` are treated as "no response"; anything else,
/// including empty objects and arrays, is present.
#[must_use]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
