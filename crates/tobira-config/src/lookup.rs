use std::env;

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "www.wanikani.com".to_string()
}

fn default_debounce_ms() -> u64 {
    100
}

fn default_max_chars() -> usize {
    50
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Host the lookup pages are opened on
    #[serde(default = "default_host")]
    pub host: String,
    /// Accepted lookups within this window suppress further ones
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Selections at or above this char count are rejected
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl LookupConfig {
    pub fn new() -> Self {
        let host = env::var("LOOKUP_HOST").unwrap_or_else(|_| default_host());

        let debounce_ms = env::var("DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_debounce_ms);

        let max_chars = env::var("MAX_SELECTION_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_chars);

        Self {
            host,
            debounce_ms,
            max_chars,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            debounce_ms: default_debounce_ms(),
            max_chars: default_max_chars(),
        }
    }
}
