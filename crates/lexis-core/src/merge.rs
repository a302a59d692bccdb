use std::collections::HashSet;

use lexis_types::{EntryError, RawEntry};

use crate::store::VocabularyStore;

/// Outcome of merging one candidate batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub added: usize,
    pub skipped: usize,
}

impl BatchReport {
    pub fn candidates(&self) -> usize {
        self.added + self.skipped
    }
}

/// Merge-dedup engine.
///
/// Holds the growing store together with the set of lowercased words already
/// present. The key set is shared by every batch merged through the same
/// `Merger`, so a word added from one source suppresses it in all later ones.
/// Among duplicates the first one encountered is kept whole; later
/// duplicates are dropped, never merged field by field.
#[derive(Debug, Default)]
pub struct Merger {
    entries: Vec<RawEntry>,
    seen: HashSet<String>,
}

impl Merger {
    /// Start from `base`. Every base record must carry a `word`.
    pub fn new(base: VocabularyStore) -> Result<Self, EntryError> {
        let entries = base.into_entries();
        let seen = entries
            .iter()
            .map(RawEntry::key)
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Self { entries, seen })
    }

    /// Append every candidate whose key has not been seen yet, in order.
    ///
    /// Keys are computed for the whole batch before anything is appended, so
    /// a candidate without a `word` leaves the merger untouched.
    pub fn merge_batch<I>(&mut self, candidates: I) -> Result<BatchReport, EntryError>
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let keyed = candidates
            .into_iter()
            .map(|entry| entry.key().map(|key| (key, entry)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = BatchReport::default();
        for (key, entry) in keyed {
            if self.seen.contains(&key) {
                tracing::debug!("Skipping duplicate word '{}'", key);
                report.skipped += 1;
                continue;
            }
            self.seen.insert(key);
            self.entries.push(entry);
            report.added += 1;
        }

        Ok(report)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, word: &str) -> bool {
        self.seen.contains(&lexis_types::normalize_word(word))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn finish(self) -> VocabularyStore {
        VocabularyStore::from(self.entries)
    }
}

/// One-shot merge of a single candidate batch into `base`.
/// Returns the merged store and how many candidates were added.
pub fn merge<I>(
    base: VocabularyStore,
    candidates: I,
) -> Result<(VocabularyStore, usize), EntryError>
where
    I: IntoIterator<Item = RawEntry>,
{
    let mut merger = Merger::new(base)?;
    let report = merger.merge_batch(candidates)?;
    Ok((merger.finish(), report.added))
}

/// First-wins dedup of a single batch against itself
pub fn dedup<I>(entries: I) -> Result<Vec<RawEntry>, EntryError>
where
    I: IntoIterator<Item = RawEntry>,
{
    let mut merger = Merger::default();
    merger.merge_batch(entries)?;
    Ok(merger.finish().into_entries())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn entry(word: &str, definition: &str) -> RawEntry {
        serde_json::from_value(json!({
            "word": word,
            "definition": definition,
            "difficulty": 2,
            "category": "GRAMMAR_FOCUSED",
            "contexts": [],
            "relatedWords": [],
            "grammarPattern": null,
            "weekIntroduced": 3
        }))
        .unwrap()
    }

    fn words(store: &VocabularyStore) -> Vec<&str> {
        store.words().unwrap()
    }

    fn numbered(prefix: &str, range: std::ops::Range<usize>) -> Vec<RawEntry> {
        range
            .map(|i| entry(&format!("{prefix}{i}"), "generated"))
            .collect()
    }

    #[test]
    fn test_merge_with_itself_adds_nothing() {
        let base = VocabularyStore::from(vec![
            entry("analyze", "examine in detail"),
            entry("Evaluate", "assess the value"),
            entry("refute", "prove wrong"),
        ]);

        let (merged, added) = merge(base.clone(), base.clone()).unwrap();
        assert_eq!(added, 0);
        assert_eq!(merged, base);
    }

    #[test]
    fn test_output_words_are_unique_ignoring_case() {
        let base = VocabularyStore::from(vec![entry("Paradigm", "pattern")]);
        let candidates = vec![
            entry("paradigm", "model"),
            entry("GENOME", "set of DNA"),
            entry("genome", "again"),
            entry("Genome", "and again"),
            entry("ecosystem", "community"),
        ];

        let (merged, added) = merge(base, candidates).unwrap();
        assert_eq!(added, 2);

        let keys: HashSet<String> = merged.iter().map(|e| e.key().unwrap()).collect();
        assert_eq!(keys.len(), merged.len());
    }

    #[test]
    fn test_base_order_kept_and_new_entries_appended() {
        let base = VocabularyStore::from(vec![entry("zeta", ""), entry("alpha", "")]);
        let mut merger = Merger::new(base).unwrap();
        merger
            .merge_batch(vec![entry("mu", ""), entry("beta", "")])
            .unwrap();
        merger
            .merge_batch(vec![entry("gamma", ""), entry("ALPHA", "")])
            .unwrap();

        let merged = merger.finish();
        assert_eq!(words(&merged), vec!["zeta", "alpha", "mu", "beta", "gamma"]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let candidates = vec![entry("Cat", "A"), entry("cat", "B")];

        let (merged, added) = merge(VocabularyStore::new(), candidates).unwrap();
        assert_eq!(added, 1);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.entries()[0].word().unwrap(), "Cat");
        assert_eq!(merged.entries()[0].definition().unwrap(), "A");
    }

    #[test]
    fn test_richer_duplicate_is_dropped_whole() {
        let base = VocabularyStore::from(vec![entry("synthesis", "combination")]);
        let mut richer = entry("Synthesis", "combination of ideas to form a theory");
        richer = RawEntry::new({
            let mut fields = richer.into_fields();
            fields.insert("contexts".into(), json!(["synthesis of research"]));
            fields
        });

        let (merged, added) = merge(base.clone(), vec![richer]).unwrap();
        assert_eq!(added, 0);
        assert_eq!(merged, base);
        assert_eq!(merged.entries()[0].get("contexts"), Some(&json!([])));
    }

    #[test]
    fn test_gerund_scenario() {
        let base = VocabularyStore::from(vec![entry("gerund", "verb form used as a noun")]);
        let candidates = vec![
            entry("Gerund", "-ing form"),
            entry("infinitive", "base form with to"),
        ];

        let (merged, added) = merge(base, candidates).unwrap();
        assert_eq!(added, 1);
        assert_eq!(words(&merged), vec!["gerund", "infinitive"]);
        assert_eq!(
            merged.entries()[0].definition().unwrap(),
            "verb form used as a noun"
        );
    }

    #[test]
    fn test_empty_base_takes_all_distinct_candidates() {
        let candidates = vec![
            entry("whereby", "by which"),
            entry("widespread", "found over large area"),
            entry("subsequent", "coming after"),
        ];

        let (merged, added) = merge(VocabularyStore::new(), candidates).unwrap();
        assert_eq!(added, 3);
        assert_eq!(words(&merged), vec!["whereby", "widespread", "subsequent"]);
    }

    #[test]
    fn test_key_set_is_cumulative_across_batches() {
        let base = VocabularyStore::from(numbered("base", 0..1000));
        let batch1 = numbered("new", 0..50);
        let mut batch2 = numbered("new", 40..50);
        batch2.extend(numbered("later", 0..40));
        assert_eq!(batch2.len(), 50);

        let mut merger = Merger::new(base).unwrap();
        let first = merger.merge_batch(batch1).unwrap();
        let second = merger.merge_batch(batch2).unwrap();

        assert_eq!(first, BatchReport { added: 50, skipped: 0 });
        assert_eq!(second, BatchReport { added: 40, skipped: 10 });
        assert_eq!(merger.finish().len(), 1090);
    }

    #[test]
    fn test_merge_is_deterministic() {
        let base = VocabularyStore::from(numbered("w", 0..20));
        let candidates: Vec<RawEntry> = numbered("w", 10..40).into_iter().rev().collect();

        let first = merge(base.clone(), candidates.clone()).unwrap();
        let second = merge(base, candidates).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_word_in_base_fails() {
        let nameless: RawEntry = serde_json::from_value(json!({ "definition": "?" })).unwrap();
        let base = VocabularyStore::from(vec![entry("ok", ""), nameless]);

        let err = Merger::new(base).unwrap_err();
        assert_eq!(err, EntryError::MissingField { field: "word" });
    }

    #[test]
    fn test_missing_word_in_batch_leaves_merger_untouched() {
        let mut merger = Merger::new(VocabularyStore::from(vec![entry("kept", "")])).unwrap();
        let broken = RawEntry::new(serde_json::Map::from_iter([(
            "word".to_string(),
            Value::Null,
        )]));

        let result = merger.merge_batch(vec![entry("fresh", ""), broken]);
        assert!(matches!(
            result,
            Err(EntryError::InvalidField { field: "word", .. })
        ));
        assert_eq!(merger.len(), 1);
        assert!(!merger.contains("fresh"));
        assert!(merger.contains("KEPT"));
    }

    #[test]
    fn test_dedup_single_batch() {
        let deduped = dedup(vec![
            entry("Apple", "first"),
            entry("banana", ""),
            entry("apple", "second"),
        ])
        .unwrap();

        let kept: Vec<&str> = deduped.iter().map(|e| e.definition().unwrap()).collect();
        assert_eq!(kept, vec!["first", ""]);
    }
}
