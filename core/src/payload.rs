//! Raw-or-cleaned response wrapper

use serde::Serialize;

/// Response returned by every request builder.
///
/// `Raw` carries the external API's body untouched (the caller asked for raw mode);
/// `Cleaned` carries the normalized document. Serialization is untagged, so either
/// variant serializes as the bare inner JSON.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Payload<T> {
    /// Untouched external response
    Raw(serde_json::Value),
    /// Cleaned, LLM-friendly document
    Cleaned(T),
}

impl<T> Payload<T> {
    /// Build a payload from a decoded body, cleaning it unless `raw` is set
    pub fn from_body(
        body: serde_json::Value,
        raw: bool,
        clean: impl FnOnce(&serde_json::Value) -> T,
    ) -> Self {
        if raw {
            Self::Raw(body)
        } else {
            Self::Cleaned(clean(&body))
        }
    }

    /// The cleaned document, if this payload is not raw
    #[must_use]
    pub const fn cleaned(&self) -> Option<&T> {
        match self {
            Self::Cleaned(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Consume the payload, returning the cleaned document if present
    #[must_use]
    pub fn into_cleaned(self) -> Option<T> {
        match self {
            Self::Cleaned(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Whether the payload is the untouched external response
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}
