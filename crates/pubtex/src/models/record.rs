//! Publication record model.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RecordKey;

/// One citation from the input document.
///
/// Kept as the raw JSON object: every recognized field is optional and a
/// present key always counts as present, whatever its value. Unknown keys are
/// carried along and ignored by the formatters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicationRecord {
    fields: Map<String, Value>,
}

impl PublicationRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this record with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: RecordKey, value: impl Into<Value>) -> Self {
        self.fields.insert(key.as_str().to_string(), value.into());
        self
    }

    /// Return a copy of this record without `key`.
    #[must_use]
    pub fn without(mut self, key: RecordKey) -> Self {
        self.fields.shift_remove(key.as_str());
        self
    }

    /// Check whether `key` is present.
    #[must_use]
    pub fn contains(&self, key: RecordKey) -> bool {
        self.fields.contains_key(key.as_str())
    }

    /// Get the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: RecordKey) -> Option<&Value> {
        self.fields.get(key.as_str())
    }

    /// Get the value for `key` rendered as text.
    ///
    /// Strings are returned verbatim; any other JSON value is rendered as its
    /// compact JSON text (`2020`, `true`, `null`).
    #[must_use]
    pub fn text(&self, key: RecordKey) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| match value {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        })
    }

    /// Get the title if present.
    #[must_use]
    pub fn title(&self) -> Option<Cow<'_, str>> {
        self.text(RecordKey::Title)
    }

    /// Split `named_authors` on commas, keeping surrounding whitespace.
    #[must_use]
    pub fn named_authors(&self) -> Option<Vec<String>> {
        self.text(RecordKey::NamedAuthors)
            .map(|names| names.split(',').map(str::to_string).collect())
    }

    /// Check whether unnamed additional authors are flagged.
    #[must_use]
    pub fn has_extra_authors(&self) -> bool {
        self.contains(RecordKey::ExtraAuthors)
    }

    /// Get the collaboration if present.
    #[must_use]
    pub fn collaboration(&self) -> Option<Cow<'_, str>> {
        self.text(RecordKey::Collaboration)
    }

    /// Get the venue reference if present.
    #[must_use]
    pub fn how_published(&self) -> Option<Cow<'_, str>> {
        self.text(RecordKey::HowPublished)
    }

    /// Get the year if present.
    #[must_use]
    pub fn year(&self) -> Option<Cow<'_, str>> {
        self.text(RecordKey::Year)
    }

    /// Check whether none of the recognized keys are present.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        RecordKey::ALL.iter().all(|key| !self.contains(*key))
    }
}

impl From<Map<String, Value>> for PublicationRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
