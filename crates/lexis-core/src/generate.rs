use std::path::Path;

use lexis_config::generator::GeneratorConfig;
use lexis_types::{Category, VocabularyEntry};
use serde::Deserialize;

use crate::error::{StoreError, StoreResult};

/// Terse word-list item that the generator expands into a full entry.
/// Anything left out is filled from templates and heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedWord {
    pub word: String,
    pub category: Category,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub difficulty: Option<u32>,
    #[serde(default, alias = "weekIntroduced")]
    pub week: Option<u32>,
    #[serde(default)]
    pub week_start: Option<u32>,
    #[serde(default)]
    pub contexts: Option<Vec<String>>,
    #[serde(default)]
    pub related_words: Option<Vec<String>>,
    #[serde(default)]
    pub grammar_pattern: Option<String>,
}

#[cfg(test)]
impl SeedWord {
    pub(crate) fn new(word: impl Into<String>, category: impl Into<Category>) -> Self {
        Self {
            word: word.into(),
            category: category.into(),
            definition: None,
            difficulty: None,
            week: None,
            week_start: None,
            contexts: None,
            related_words: None,
            grammar_pattern: None,
        }
    }
}

/// Load a JSON array of seeds
pub fn read_seeds(path: &Path) -> StoreResult<Vec<SeedWord>> {
    let json = std::fs::read_to_string(path).map_err(|e| StoreError::read(path, e))?;
    serde_json::from_str(&json).map_err(|e| StoreError::parse(path, e))
}

/// Suffix-based grammar hint; first matching rule wins
pub fn grammar_pattern_for(word: &str) -> Option<&'static str> {
    const RULES: &[(&[&str], &str)] = &[
        (&["ing"], "gerund_or_present_participle"),
        (&["tion", "sion"], "noun_from_verb"),
        (&["able", "ible"], "adjective_suffix"),
        (&["ism"], "abstract_noun"),
        (&["ity", "ty"], "noun_quality"),
        (&["ize", "ise"], "verb_suffix"),
        (&["ly"], "adverb"),
        (&["ous", "ious"], "adjective_suffix"),
        (&["ent", "ant"], "adjective_or_noun"),
    ];

    let word = word.to_lowercase();
    RULES
        .iter()
        .find(|(suffixes, _)| suffixes.iter().any(|suffix| word.ends_with(suffix)))
        .map(|(_, pattern)| *pattern)
}

/// Difficulty from word length in characters
pub fn difficulty_for(word: &str) -> u32 {
    match word.chars().count() {
        0..=6 => 2,
        7..=9 => 3,
        _ => 4,
    }
}

/// Week a word enters the plan, before clamping
pub fn raw_week_for(category: &Category, difficulty: u32, week_start: u32) -> i64 {
    let ws = i64::from(week_start);
    let d = i64::from(difficulty);

    match category.as_str() {
        Category::ACADEMIC => ws + (d - 2) * 2,
        Category::BUSINESS => ws + 1 + (d - 2) * 2,
        Category::EXAM_SPECIFIC => ws - 2 + d,
        Category::EVERYDAY => (ws - 5 + d).max(1),
        Category::GRAMMAR_FOCUSED => ws + d,
        _ => ws,
    }
}

pub fn default_definition(word: &str) -> String {
    format!("relating to or involving {word}")
}

pub fn default_contexts(word: &str) -> Vec<String> {
    vec![
        format!("The {word} shows important characteristics."),
        format!("This {word} demonstrates key principles."),
    ]
}

pub fn default_related_words() -> Vec<String> {
    ["related", "associated", "connected"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Expands seeds into full vocabulary entries
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn entry(&self, seed: SeedWord) -> VocabularyEntry {
        let difficulty = seed.difficulty.unwrap_or_else(|| difficulty_for(&seed.word));
        let week = match seed.week {
            Some(week) => week,
            None => {
                let week_start = seed.week_start.unwrap_or(self.config.week_start);
                self.config
                    .clamp_week(raw_week_for(&seed.category, difficulty, week_start))
            }
        };
        let grammar_pattern = seed
            .grammar_pattern
            .or_else(|| grammar_pattern_for(&seed.word).map(str::to_string));

        VocabularyEntry {
            definition: seed
                .definition
                .unwrap_or_else(|| default_definition(&seed.word)),
            contexts: seed
                .contexts
                .unwrap_or_else(|| default_contexts(&seed.word)),
            related_words: seed.related_words.unwrap_or_else(default_related_words),
            word: seed.word,
            difficulty,
            category: seed.category,
            grammar_pattern,
            week_introduced: week,
        }
    }

    pub fn generate<I>(&self, seeds: I) -> Vec<VocabularyEntry>
    where
        I: IntoIterator<Item = SeedWord>,
    {
        let entries: Vec<_> = seeds.into_iter().map(|seed| self.entry(seed)).collect();
        tracing::info!("Generated {} vocabulary entries from seeds", entries.len());
        entries
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
