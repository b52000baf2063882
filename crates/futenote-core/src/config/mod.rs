//! Runtime configuration.
//!
//! Values come from the process environment (the desktop binary loads a
//! `.env` file first). Every field has a default, so an empty environment
//! yields a working app.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::normalize_text_option;

pub const ENV_BRAND: &str = "FUTENOTE_BRAND";
pub const ENV_USER_NAME: &str = "FUTENOTE_USER_NAME";
pub const ENV_USER_EMAIL: &str = "FUTENOTE_USER_EMAIL";
pub const ENV_SIDEBAR_OPEN: &str = "FUTENOTE_SIDEBAR_OPEN";
pub const ENV_SEED_FILE: &str = "FUTENOTE_SEED_FILE";

const DEFAULT_BRAND: &str = "Futénote";
const DEFAULT_USER_NAME: &str = "John Doe";
const DEFAULT_USER_EMAIL: &str = "john.dow@mailbox.org";

/// Identity shown in the top navigation user menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub name: String,
    pub email: String,
}

impl UserIdentity {
    /// Up to two uppercase initials from the name, e.g. `JD` for `John Doe`
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_USER_NAME.to_string(),
            email: DEFAULT_USER_EMAIL.to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Brand name shown in the top navigation bar
    pub brand: String,
    pub user: UserIdentity,
    /// Whether the sidebar starts open on narrow windows
    pub sidebar_open: bool,
    /// Optional JSON file replacing the built-in seed notes
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            user: UserIdentity::default(),
            sidebar_open: false,
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| normalize_text_option(lookup(key));
        let defaults = Self::default();

        let sidebar_open = match get(ENV_SIDEBAR_OPEN) {
            Some(raw) => parse_bool(ENV_SIDEBAR_OPEN, &raw)?,
            None => defaults.sidebar_open,
        };

        Ok(Self {
            brand: get(ENV_BRAND).unwrap_or(defaults.brand),
            user: UserIdentity {
                name: get(ENV_USER_NAME).unwrap_or(defaults.user.name),
                email: get(ENV_USER_EMAIL).unwrap_or(defaults.user.email),
            },
            sidebar_open,
            seed_file: get(ENV_SEED_FILE).map(PathBuf::from),
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidConfig(format!(
            "{key} must be a boolean, got {raw:?}"
        ))),
    }
}

/// Up to two uppercase initials from a display name
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
