//! Error types for field configuration.
//!
//! Rendering itself never fails: a missing surface skips the frame. Only
//! loading and validating a [`FieldConfig`](super::config::FieldConfig) can
//! produce an error.

use std::fmt;

/// Errors that can occur while building a field configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// A value is outside its allowed range.
    Invalid {
        field: &'static str,
        reason: String,
    },
    /// No preset with this name exists.
    UnknownPreset(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse field config: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid field config value `{}`: {}", field, reason)
            }
            ConfigError::UnknownPreset(name) => write!(
                f,
                "Unknown preset `{}` (expected one of: constellation, wave, bloom)",
                name
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
