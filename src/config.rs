//! Startup configuration.
//!
//! Values come from the process environment (plus `.env` on native builds)
//! and fall back to the `assets/config.env` file bundled into the binary.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::Level;

/// In the browser the widget talks to the origin that served the page.
#[cfg(target_arch = "wasm32")]
pub const DEFAULT_ENDPOINT: &str = "/chat";

/// Native builds have no page origin, so they default to the local backend.
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/chat";

pub const ENDPOINT_KEY: &str = "CHAT_ENDPOINT";
pub const LOG_LEVEL_KEY: &str = "CHAT_LOG_LEVEL";

/// Bundled config for web and mobile builds, where there is no usable environment
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

static BUNDLED: Lazy<HashMap<String, String>> = Lazy::new(|| parse_env_file(BUNDLED_CONFIG));

#[derive(Clone, Debug, PartialEq)]
pub struct ChatConfig {
    pub endpoint: String,
    pub log_level: Level,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl ChatConfig {
    /// Resolve the config for the current target.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        // A missing .env is normal outside development
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| BUNDLED.get(key).cloned())
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::from_lookup(|key| BUNDLED.get(key).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let endpoint = lookup(ENDPOINT_KEY)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.endpoint);
        let log_level = lookup(LOG_LEVEL_KEY)
            .and_then(|value| parse_level(&value))
            .unwrap_or(defaults.log_level);
        Self {
            endpoint,
            log_level,
        }
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Parse `KEY=VALUE` lines, skipping comments and blank lines.
pub fn parse_env_file(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
