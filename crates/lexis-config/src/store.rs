use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the mobile app expects its bundled vocabulary
pub const DEFAULT_STORE_PATH: &str = "app/src/main/assets/vocabulary_database.json";

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_atomic_write() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Vocabulary JSON file read at the start and rewritten at the end of a run
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Write to a sibling temp file and rename over the target
    #[serde(default = "default_atomic_write")]
    pub atomic_write: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            atomic_write: default_atomic_write(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        let path = env::var("LEXIS_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_path());

        let atomic_write = env::var("LEXIS_ATOMIC_WRITE")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or_else(default_atomic_write);

        Self { path, atomic_write }
    }
}

pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
