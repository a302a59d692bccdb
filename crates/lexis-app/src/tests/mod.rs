
use std::fs;
use std::path::{Path, PathBuf};

use lexis_config::Config;
use lexis_config::store::StoreConfig;
use lexis_core::CategoryReport;
use serde_json::{Value, json};

use crate::cli::StoreArgs;

pub(crate) fn config_for(store: &Path) -> Config {
    Config {
        store: StoreConfig {
            path: store.to_path_buf(),
            atomic_write: true,
        },
        ..Config::default()
    }
}

pub(crate) fn vocab(word: &str, category: &str) -> Value {
    json!({
        "word": word,
        "definition": format!("definition of {word}"),
        "difficulty": 3,
        "category": category,
        "contexts": [format!("{word} in a sentence")],
        "relatedWords": [],
        "grammarPattern": null,
        "weekIntroduced": 12
    })
}

pub(crate) fn numbered(prefix: &str, range: std::ops::Range<usize>) -> Vec<Value> {
    range
        .map(|i| vocab(&format!("{prefix}{i}"), "ACADEMIC"))
        .collect()
}

pub(crate) fn write_json(path: &Path, value: &Value) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path.to_path_buf()
}

pub(crate) fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

pub(crate) fn count_of(report: &CategoryReport, category: &str) -> usize {
    report
        .counts
        .iter()
        .find(|(c, _)| c.as_str() == category)
        .map_or(0, |(_, n)| *n)
}

pub(crate) fn words_in(path: &Path) -> Vec<String> {
    read_json(path)
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["word"].as_str().unwrap().to_string())
        .collect()
}

pub(crate) fn default_store_args() -> StoreArgs {
    StoreArgs::default()
}
