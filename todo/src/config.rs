//! Configuration management for tickbox.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A `.env` file in the working directory is read first, if present.

use std::env;

/// Default prompt shown before each line of input
pub const DEFAULT_PROMPT: &str = "|> ";

/// Default greeting printed once at startup
pub const DEFAULT_BANNER: &str = "Welcome to tickbox!";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt printed before reading a line (`TICKBOX_PROMPT`)
    pub prompt: String,
    /// Greeting printed at startup (`TICKBOX_BANNER`)
    pub banner: String,
    /// Identifier given to the first todo (`TICKBOX_FIRST_ID`)
    pub first_id: u64,
    /// Print the command summary at startup (`TICKBOX_SHOW_HELP`)
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: DEFAULT_BANNER.to_string(),
            first_id: 0,
            show_help: false,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Missing or unparsable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            prompt: lookup("TICKBOX_PROMPT").unwrap_or(defaults.prompt),
            banner: lookup("TICKBOX_BANNER").unwrap_or(defaults.banner),
            first_id: lookup("TICKBOX_FIRST_ID")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.first_id),
            show_help: lookup("TICKBOX_SHOW_HELP")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.show_help),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
