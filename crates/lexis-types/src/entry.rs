use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::category::Category;

pub const FIELD_WORD: &str = "word";
pub const FIELD_DEFINITION: &str = "definition";
pub const FIELD_DIFFICULTY: &str = "difficulty";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_CONTEXTS: &str = "contexts";
pub const FIELD_RELATED_WORDS: &str = "relatedWords";
pub const FIELD_GRAMMAR_PATTERN: &str = "grammarPattern";
pub const FIELD_WEEK_INTRODUCED: &str = "weekIntroduced";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("Entry is missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("Entry field `{field}` is not a {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl EntryError {
    pub fn field(&self) -> &'static str {
        match self {
            EntryError::MissingField { field } | EntryError::InvalidField { field, .. } => *field,
        }
    }
}

/// A stored record exactly as it appeared in the JSON array.
///
/// Nothing is validated on load. Accessors check a field the first time
/// something actually reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawEntry(Map<String, Value>);

impl RawEntry {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    pub fn word(&self) -> Result<&str, EntryError> {
        self.str_field(FIELD_WORD)
    }

    /// Normalized dedup key: the lowercased word
    pub fn key(&self) -> Result<String, EntryError> {
        self.word().map(normalize_word)
    }

    pub fn definition(&self) -> Result<&str, EntryError> {
        self.str_field(FIELD_DEFINITION)
    }

    pub fn category(&self) -> Result<Category, EntryError> {
        self.str_field(FIELD_CATEGORY).map(Category::from)
    }

    pub fn difficulty(&self) -> Result<u32, EntryError> {
        self.u32_field(FIELD_DIFFICULTY)
    }

    pub fn week_introduced(&self) -> Result<u32, EntryError> {
        self.u32_field(FIELD_WEEK_INTRODUCED)
    }

    pub fn contexts(&self) -> Result<Vec<String>, EntryError> {
        self.string_list(FIELD_CONTEXTS)
    }

    pub fn related_words(&self) -> Result<Vec<String>, EntryError> {
        self.string_list(FIELD_RELATED_WORDS)
    }

    /// Absent and `null` both read as no pattern
    pub fn grammar_pattern(&self) -> Result<Option<&str>, EntryError> {
        match self.0.get(FIELD_GRAMMAR_PATTERN) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(pattern)) => Ok(Some(pattern)),
            Some(_) => Err(EntryError::InvalidField {
                field: FIELD_GRAMMAR_PATTERN,
                expected: "string or null",
            }),
        }
    }

    fn required(&self, field: &'static str) -> Result<&Value, EntryError> {
        self.0.get(field).ok_or(EntryError::MissingField { field })
    }

    fn str_field(&self, field: &'static str) -> Result<&str, EntryError> {
        self.required(field)?
            .as_str()
            .ok_or(EntryError::InvalidField {
                field,
                expected: "string",
            })
    }

    fn u32_field(&self, field: &'static str) -> Result<u32, EntryError> {
        self.required(field)?
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(EntryError::InvalidField {
                field,
                expected: "non-negative integer",
            })
    }

    fn string_list(&self, field: &'static str) -> Result<Vec<String>, EntryError> {
        let invalid = EntryError::InvalidField {
            field,
            expected: "list of strings",
        };
        let items = self.required(field)?.as_array().ok_or(invalid.clone())?;
        items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or(invalid.clone()))
            .collect()
    }
}

/// Case-insensitive key used for uniqueness within a store
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

/// Fully-typed vocabulary record in the layout the mobile app reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub word: String,
    pub definition: String,
    pub difficulty: u32,
    pub category: Category,
    pub contexts: Vec<String>,
    pub related_words: Vec<String>,
    pub grammar_pattern: Option<String>,
    pub week_introduced: u32,
}

impl From<VocabularyEntry> for RawEntry {
    fn from(entry: VocabularyEntry) -> Self {
        let strings =
            |items: Vec<String>| Value::Array(items.into_iter().map(Value::String).collect());

        let mut fields = Map::new();
        fields.insert(FIELD_WORD.into(), Value::String(entry.word));
        fields.insert(FIELD_DEFINITION.into(), Value::String(entry.definition));
        fields.insert(FIELD_DIFFICULTY.into(), Value::from(entry.difficulty));
        fields.insert(
            FIELD_CATEGORY.into(),
            Value::String(entry.category.as_str().to_string()),
        );
        fields.insert(FIELD_CONTEXTS.into(), strings(entry.contexts));
        fields.insert(FIELD_RELATED_WORDS.into(), strings(entry.related_words));
        fields.insert(
            FIELD_GRAMMAR_PATTERN.into(),
            entry.grammar_pattern.map_or(Value::Null, Value::String),
        );
        fields.insert(
            FIELD_WEEK_INTRODUCED.into(),
            Value::from(entry.week_introduced),
        );

        RawEntry(fields)
    }
}

impl TryFrom<&RawEntry> for VocabularyEntry {
    type Error = EntryError;

    fn try_from(raw: &RawEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            word: raw.word()?.to_string(),
            definition: raw.definition()?.to_string(),
            difficulty: raw.difficulty()?,
            category: raw.category()?,
            contexts: raw.contexts()?,
            related_words: raw.related_words()?,
            grammar_pattern: raw.grammar_pattern()?.map(str::to_string),
            week_introduced: raw.week_introduced()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawEntry {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> VocabularyEntry {
        VocabularyEntry {
            word: "empirical".to_string(),
            definition: "based on observation or experience".to_string(),
            difficulty: 4,
            category: Category::academic(),
            contexts: vec!["empirical evidence".to_string()],
            related_words: vec!["observational".to_string()],
            grammar_pattern: None,
            week_introduced: 12,
        }
    }

    #[test]
    fn test_field_names_and_order() {
        let raw = RawEntry::from(sample());
        let keys: Vec<&str> = raw.fields().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "word",
                "definition",
                "difficulty",
                "category",
                "contexts",
                "relatedWords",
                "grammarPattern",
                "weekIntroduced"
            ]
        );
        assert_eq!(raw.get("grammarPattern"), Some(&Value::Null));
    }

    #[test]
    fn test_serde_matches_raw_layout() {
        let typed = serde_json::to_value(sample()).unwrap();
        let raw = serde_json::to_value(RawEntry::from(sample())).unwrap();
        assert_eq!(typed, raw);
    }

    #[test]
    fn test_typed_conversion() {
        let entry = sample();
        let raw = RawEntry::from(entry.clone());
        assert_eq!(VocabularyEntry::try_from(&raw).unwrap(), entry);
    }

    #[test]
    fn test_missing_field_is_reported_on_access() {
        let entry = raw(json!({ "definition": "no word here" }));
        assert_eq!(entry.definition().unwrap(), "no word here");
        assert_eq!(
            entry.word(),
            Err(EntryError::MissingField { field: "word" })
        );
        assert_eq!(
            VocabularyEntry::try_from(&entry).unwrap_err().field(),
            "word"
        );
    }

    #[test]
    fn test_invalid_field_type() {
        let entry = raw(json!({ "word": 42, "difficulty": "hard" }));
        assert!(matches!(
            entry.word(),
            Err(EntryError::InvalidField { field: "word", .. })
        ));
        assert!(matches!(
            entry.difficulty(),
            Err(EntryError::InvalidField { field: "difficulty", .. })
        ));
    }

    #[test]
    fn test_key_is_lowercased() {
        let entry = raw(json!({ "word": "Gerund" }));
        assert_eq!(entry.key().unwrap(), "gerund");
        assert_eq!(normalize_word("ÖZEL Kelime"), "özel kelime");
    }

    #[test]
    fn test_grammar_pattern_absent_or_null() {
        assert_eq!(raw(json!({})).grammar_pattern(), Ok(None));
        assert_eq!(
            raw(json!({ "grammarPattern": null })).grammar_pattern(),
            Ok(None)
        );
        assert_eq!(
            raw(json!({ "grammarPattern": "noun_from_verb" })).grammar_pattern(),
            Ok(Some("noun_from_verb"))
        );
    }
}
