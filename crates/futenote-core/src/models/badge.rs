//! Badge value and category types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value shown inside a badge: free text or a non-negative count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BadgeValue {
    Count(u64),
    Text(String),
}

impl fmt::Display for BadgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for BadgeValue {
    fn from(count: u64) -> Self {
        Self::Count(count)
    }
}

impl From<u32> for BadgeValue {
    fn from(count: u32) -> Self {
        Self::Count(u64::from(count))
    }
}

impl From<&str> for BadgeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for BadgeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Styling category of a badge.
///
/// Unknown names are preserved verbatim in [`BadgeType::Other`] and render
/// with the neutral style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BadgeType {
    #[default]
    Default,
    Primary,
    Success,
    Other(String),
}

impl BadgeType {
    /// Name used in serialized form
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for BadgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for BadgeType {
    fn from(name: &str) -> Self {
        match name {
            "default" => Self::Default,
            "primary" => Self::Primary,
            "success" => Self::Success,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for BadgeType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<BadgeType> for String {
    fn from(badge_type: BadgeType) -> Self {
        badge_type.as_str().to_string()
    }
}
