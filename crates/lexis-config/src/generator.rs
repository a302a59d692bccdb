use std::env;

use serde::{Deserialize, Serialize};

fn default_min_week() -> u32 {
    1
}

fn default_max_week() -> u32 {
    30
}

fn default_week_start() -> u32 {
    10
}

/// Knobs for templated entry generation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    #[serde(default = "default_min_week")]
    pub min_week: u32,
    /// Last week of the study plan
    #[serde(default = "default_max_week")]
    pub max_week: u32,
    /// Base week for seeds that don't carry their own
    #[serde(default = "default_week_start")]
    pub week_start: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_week: default_min_week(),
            max_week: default_max_week(),
            week_start: default_week_start(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        let min_week = env::var("LEXIS_MIN_WEEK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_min_week());

        let max_week = env::var("LEXIS_MAX_WEEK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_max_week());

        let week_start = env::var("LEXIS_WEEK_START")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_week_start());

        Self {
            min_week,
            max_week: max_week.max(min_week),
            week_start,
        }
    }

    pub fn clamp_week(&self, week: i64) -> u32 {
        let low = i64::from(self.min_week);
        let high = i64::from(self.max_week.max(self.min_week));
        u32::try_from(week.clamp(low, high)).unwrap_or(self.max_week)
    }
}
