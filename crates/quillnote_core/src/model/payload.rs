//! Structured extraction payload merged into project documents.

use serde::{Deserialize, Serialize};

/// Fact set produced by chapter extraction and consumed by one sync call.
///
/// Missing list fields deserialize as empty lists so partial extraction
/// results are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPayload {
    /// Chapter title, rendered in bold in the outline bullet.
    #[serde(default)]
    pub title: String,
    /// Chapter body. Not merged; only used for chapter statistics.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    /// One-line chapter summary.
    #[serde(default)]
    pub summary: String,
    /// Reserved; not merged yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tropes: Option<Vec<String>>,
}

impl SyncPayload {
    /// Creates a payload with title and summary and no extracted entities.
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter for characters.
    pub fn with_characters<I, S>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.characters = characters.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style setter for locations.
    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style setter for chapter text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}
