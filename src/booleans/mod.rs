// ABOUTME: Boolean resource lifecycle engine with store-of-record and write-intent types
// ABOUTME: Ties together validation, identifier generation, expiry, decoding, and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Boolean resources
//!
//! A boolean is a named flag with an optional expiry. Two shapes describe it:
//! [`Resource`] is what the store keeps (`label` and `value`), while
//! [`WriteIntent`] carries the request-only directives (absolute or relative
//! expiry and the target identifier for replace-by-id). They meet only in a
//! [`BooleanDraft`] handed to the [`repository::BooleanRepository`].

/// Request body decoding by content type
pub mod decoder;
/// Absolute expiry resolution
pub mod expiry;
/// Random identifier generation
pub mod id;
/// Store adapter for create, read, toggle, and delete
pub mod repository;
/// Expiry validation rules
pub mod validator;

pub use decoder::{decoder_for, BodyDecoder, FormDecoder, JsonDecoder, RequestDecoder};
pub use expiry::Expiry;
pub use id::IdGenerator;
pub use repository::BooleanRepository;
pub use validator::{ValidationFailure, ValidationRule, Validator};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-of-record shape of a boolean
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Free-form label, omitted from responses when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// The flag itself
    #[serde(default)]
    pub value: bool,
}

impl Resource {
    /// Create a resource
    #[must_use]
    pub fn new(label: impl Into<String>, value: bool) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Request-only directives attached to a write
///
/// Zero expiry values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteIntent {
    /// Absolute expiry in Unix epoch seconds
    pub expires_at: Option<i64>,
    /// Relative expiry in seconds from the time of the write
    pub expires_in: Option<i64>,
    /// Existing identifier to replace; `None` creates a new boolean
    pub id: Option<String>,
}

impl WriteIntent {
    /// Intent targeting an existing identifier
    #[must_use]
    pub fn replace(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the absolute expiry
    #[must_use]
    pub const fn with_expires_at(mut self, epoch_secs: i64) -> Self {
        self.expires_at = Some(epoch_secs);
        self
    }

    /// Set the relative expiry
    #[must_use]
    pub const fn with_expires_in(mut self, secs: i64) -> Self {
        self.expires_in = Some(secs);
        self
    }
}

/// A resource together with the intent it is written under
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooleanDraft {
    /// Fields to persist
    pub resource: Resource,
    /// Directives for this write
    pub intent: WriteIntent,
}

impl BooleanDraft {
    /// Draft for a new boolean with no expiry
    #[must_use]
    pub fn create(resource: Resource) -> Self {
        Self {
            resource,
            intent: WriteIntent::default(),
        }
    }
}

/// A persisted boolean addressed by its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBoolean {
    /// Store key
    pub id: String,
    /// Stored fields
    #[serde(flatten)]
    pub resource: Resource,
}

impl fmt::Display for StoredBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]: {}, Label: \"{}\"",
            self.id, self.resource.value, self.resource.label
        )
    }
}

/// Success envelope: `{ "data": { "id", "label"?, "value" } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanEnvelope {
    /// The boolean
    pub data: StoredBoolean,
}

impl From<StoredBoolean> for BooleanEnvelope {
    fn from(data: StoredBoolean) -> Self {
        Self { data }
    }
}

/// Parse the boolean spellings accepted in forms and store values
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Store encoding of a boolean value
#[must_use]
pub const fn encode_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_spellings() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("tRuE"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_envelope_omits_empty_label() {
        let envelope = BooleanEnvelope::from(StoredBoolean {
            id: "abc".to_owned(),
            resource: Resource::new("", true),
        });

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, serde_json::json!({ "data": { "id": "abc", "value": true } }));
    }

    #[test]
    fn test_envelope_includes_label() {
        let envelope = BooleanEnvelope::from(StoredBoolean {
            id: "abc".to_owned(),
            resource: Resource::new("beta", false),
        });

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["data"]["label"], "beta");
        assert_eq!(json["data"]["value"], false);
    }

    #[test]
    fn test_display() {
        let stored = StoredBoolean {
            id: "abc".to_owned(),
            resource: Resource::new("beta", true),
        };
        assert_eq!(stored.to_string(), "[abc]: true, Label: \"beta\"");
    }
}
