use std::env;

use serde::{Deserialize, Serialize};

use self::generator::GeneratorConfig;
use self::store::StoreConfig;

pub mod generator;
pub mod store;

fn default_target_count() -> usize {
    2000
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub generator: GeneratorConfig,

    /// Vocabulary size the study plan aims for
    #[serde(default = "default_target_count")]
    pub target_count: usize,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            generator: GeneratorConfig::default(),
            target_count: default_target_count(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let target_count = env::var("LEXIS_TARGET_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_target_count());

        let log_format = env::var("LEXIS_LOG_FORMAT")
            .ok()
            .and_then(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        Config {
            store: StoreConfig::new(),
            generator: GeneratorConfig::new(),

            target_count,
            log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::store::parse_flag;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.store.path,
            Path::new("app/src/main/assets/vocabulary_database.json")
        );
        assert!(config.store.atomic_write);
        assert_eq!(config.target_count, 2000);
        assert_eq!(config.generator.max_week, 30);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "store": { "path": "vocab.json" }, "target_count": 50 }"#)
                .unwrap();
        assert_eq!(config.store.path, Path::new("vocab.json"));
        assert!(config.store.atomic_write);
        assert_eq!(config.target_count, 50);
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_clamp_week() {
        let generator = GeneratorConfig::default();
        assert_eq!(generator.clamp_week(-3), 1);
        assert_eq!(generator.clamp_week(14), 14);
        assert_eq!(generator.clamp_week(45), 30);

        let inverted = GeneratorConfig {
            min_week: 5,
            max_week: 2,
            week_start: 10,
        };
        assert_eq!(inverted.clamp_week(9), 5);
    }

    #[test]
    fn test_parse_flag_and_log_format() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(LogFormat::parse("Json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("xml"), None);
    }
}
