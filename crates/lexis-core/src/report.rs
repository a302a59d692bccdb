use std::collections::HashMap;
use std::fmt;

use lexis_types::{Category, EntryError};

use crate::store::VocabularyStore;

/// Entry counts per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryReport {
    pub total: usize,
    /// Known categories in report order, then other labels alphabetically
    pub counts: Vec<(Category, usize)>,
}

impl CategoryReport {
    /// Every entry must carry a `category`
    pub fn from_store(store: &VocabularyStore) -> Result<Self, EntryError> {
        let mut tally: HashMap<Category, usize> = HashMap::new();
        for entry in store.iter() {
            *tally.entry(entry.category()?).or_insert(0) += 1;
        }

        let mut counts: Vec<(Category, usize)> = tally.into_iter().collect();
        counts.sort_by(|(a, _), (b, _)| {
            let rank = |c: &Category| c.known_rank().unwrap_or(Category::KNOWN.len());
            rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
        });

        Ok(Self {
            total: store.len(),
            counts,
        })
    }

    #[cfg(test)]
    pub(crate) fn count(&self, category: &str) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| c.as_str() == category)
            .map_or(0, |(_, n)| *n)
    }
}

impl fmt::Display for CategoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total words: {}", self.total)?;
        for (category, count) in &self.counts {
            writeln!(f, "  {}: {} words", category.display_name(), count)?;
        }
        Ok(())
    }
}

/// Distance from the configured vocabulary goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetProgress {
    pub total: usize,
    pub target: usize,
}

impl TargetProgress {
    pub fn new(total: usize, target: usize) -> Self {
        Self { total, target }
    }

    pub fn reached(&self) -> bool {
        self.total >= self.target
    }

    pub fn remaining(&self) -> usize {
        self.target.saturating_sub(self.total)
    }
}

impl fmt::Display for TargetProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reached() {
            write!(f, "Target of {} words reached ({} total)", self.target, self.total)
        } else {
            write!(
                f,
                "Still need {} more words to reach {}",
                self.remaining(),
                self.target
            )
        }
    }
}
