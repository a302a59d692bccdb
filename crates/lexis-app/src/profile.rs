use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use lexis_config::Config;

/// Load a config file; fields it leaves out keep their defaults
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

/// Config file when one is given, environment otherwise
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => load_config_file(path),
        None => Ok(Config::new()),
    }
}

pub fn render_config(config: &Config) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
