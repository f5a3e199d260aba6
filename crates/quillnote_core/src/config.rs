//! Section sync configuration.
//!
//! # Responsibility
//! - Define which existing headings count as the characters, setting and
//!   outline sections, and which heading to create when none matches.
//! - Load overrides from a JSON file.
//!
//! # Invariants
//! - Every rule has at least one non-blank keyword.
//! - Default headings are non-blank single-line text.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Default heading created for character bullets.
pub const DEFAULT_CHARACTERS_HEADING: &str = "Characters";
/// Default heading created for location bullets.
pub const DEFAULT_SETTING_HEADING: &str = "Setting";
/// Default heading created for outline bullets.
pub const DEFAULT_OUTLINE_HEADING: &str = "Full Outline";

/// Semantic section category targeted by one sync step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Characters,
    Setting,
    Outline,
}

impl Category {
    /// Stable name used in log events and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Setting => "setting",
            Self::Outline => "outline",
        }
    }
}

/// Keyword match rule for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRule {
    /// Case-insensitive substrings searched in existing heading text.
    pub keywords: Vec<String>,
    /// Heading created when no existing heading matches.
    pub default_heading: String,
}

impl HeadingRule {
    pub fn new(keywords: &[&str], default_heading: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|value| value.to_string()).collect(),
            default_heading: default_heading.to_string(),
        }
    }

    fn validate(&self, category: Category) -> Result<(), ConfigError> {
        if self.keywords.iter().all(|keyword| keyword.trim().is_empty()) {
            return Err(ConfigError::MissingKeywords(category));
        }
        let heading = self.default_heading.trim();
        if heading.is_empty() || heading.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidDefaultHeading {
                category,
                heading: self.default_heading.clone(),
            });
        }
        Ok(())
    }
}

/// Heading rules for all sync categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub characters: HeadingRule,
    pub setting: HeadingRule,
    pub outline: HeadingRule,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            characters: HeadingRule::new(&["character"], DEFAULT_CHARACTERS_HEADING),
            setting: HeadingRule::new(&["setting", "location", "place"], DEFAULT_SETTING_HEADING),
            outline: HeadingRule::new(&["outline"], DEFAULT_OUTLINE_HEADING),
        }
    }
}

impl SyncConfig {
    /// Rule for `category`.
    pub fn rule(&self, category: Category) -> &HeadingRule {
        match category {
            Category::Characters => &self.characters,
            Category::Setting => &self.setting,
            Category::Outline => &self.outline,
        }
    }

    /// Validates every rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in [Category::Characters, Category::Setting, Category::Outline] {
            self.rule(category).validate(category)?;
        }
        Ok(())
    }

    /// Parses and validates a JSON config document.
    ///
    /// Categories absent from the document keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Loads a [`SyncConfig`] from a JSON file.
///
/// # Errors
/// - Returns [`ConfigError::Io`] when the file cannot be read.
/// - Returns [`ConfigError::Parse`] for malformed JSON.
/// - Returns a validation variant when a rule is unusable.
pub fn load_sync_config(path: impl AsRef<Path>) -> Result<SyncConfig, ConfigError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    SyncConfig::from_json(&text)
}

/// Configuration loading/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// Rule has no usable keyword.
    MissingKeywords(Category),
    /// Default heading is blank or spans several lines.
    InvalidDefaultHeading { category: Category, heading: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read sync config: {err}"),
            Self::Parse(err) => write!(f, "invalid sync config json: {err}"),
            Self::MissingKeywords(category) => write!(
                f,
                "sync config rule `{}` needs at least one keyword",
                category.as_str()
            ),
            Self::InvalidDefaultHeading { category, heading } => write!(
                f,
                "sync config rule `{}` has invalid default heading `{heading}`",
                category.as_str()
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::MissingKeywords(_) | Self::InvalidDefaultHeading { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, ConfigError, SyncConfig};

    #[test]
    fn default_config_is_valid() {
        assert!(SyncConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = SyncConfig::from_json(
            r#"{"setting":{"keywords":["world"],"default_heading":"World"}}"#,
        )
        .expect("partial config should load");
        assert_eq!(config.setting.default_heading, "World");
        assert_eq!(config.characters, SyncConfig::default().characters);
    }

    #[test]
    fn rejects_blank_keywords() {
        let err = SyncConfig::from_json(
            r#"{"outline":{"keywords":[" "],"default_heading":"Outline"}}"#,
        )
        .expect_err("blank keywords must be rejected");
        assert!(matches!(err, ConfigError::MissingKeywords(Category::Outline)));
    }

    #[test]
    fn rejects_multiline_default_heading() {
        let err = SyncConfig::from_json(
            r#"{"characters":{"keywords":["cast"],"default_heading":"Cast\nList"}}"#,
        )
        .expect_err("multi-line heading must be rejected");
        assert!(matches!(err, ConfigError::InvalidDefaultHeading { .. }));
    }
}
