use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use lexis_config::store::StoreConfig;
use lexis_types::RawEntry;
use tempfile::NamedTempFile;

use crate::error::{StoreError, StoreResult};

/// Ordered vocabulary records, as loaded from or written to disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabularyStore {
    entries: Vec<RawEntry>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[RawEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RawEntry> {
        self.entries
    }

    /// Words in store order, failing on the first record without one
    #[cfg(test)]
    pub(crate) fn words(&self) -> Result<Vec<&str>, lexis_types::EntryError> {
        self.entries.iter().map(RawEntry::word).collect()
    }
}

impl From<Vec<RawEntry>> for VocabularyStore {
    fn from(entries: Vec<RawEntry>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for VocabularyStore {
    type Item = RawEntry;
    type IntoIter = std::vec::IntoIter<RawEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Read a JSON array of records. A missing file is `StoreError::NotFound`.
pub fn read_entries(path: &Path) -> StoreResult<Vec<RawEntry>> {
    let json = fs::read_to_string(path).map_err(|e| StoreError::read(path, e))?;
    serde_json::from_str(&json).map_err(|e| StoreError::parse(path, e))
}

/// Serialize records the way the app bundle expects: two-space indent,
/// non-ASCII kept literal
pub fn to_pretty_json(entries: &[RawEntry]) -> StoreResult<String> {
    serde_json::to_string_pretty(entries).map_err(StoreError::Serialize)
}

/// The on-disk vocabulary file
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
    atomic_write: bool,
}

impl StoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic_write: true,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            path: config.path.clone(),
            atomic_write: config.atomic_write,
        }
    }

    pub fn with_atomic_write(mut self, atomic_write: bool) -> Self {
        self.atomic_write = atomic_write;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store. A missing file means no prior data and yields an
    /// empty store; malformed JSON is an error.
    pub fn load(&self) -> StoreResult<VocabularyStore> {
        match read_entries(&self.path) {
            Ok(entries) => {
                tracing::info!(
                    "Loaded {} vocabulary entries from {}",
                    entries.len(),
                    self.path.display()
                );
                Ok(VocabularyStore::from(entries))
            }
            Err(StoreError::NotFound { .. }) => {
                tracing::warn!(
                    "Vocabulary store {} not found, starting empty",
                    self.path.display()
                );
                Ok(VocabularyStore::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Overwrite the file with the whole store, creating parent directories
    pub fn write(&self, store: &VocabularyStore) -> StoreResult<()> {
        let json = to_pretty_json(store.entries())?;

        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| StoreError::write(parent, e))?;

        if self.atomic_write {
            self.write_atomic(parent, json.as_bytes())?;
        } else {
            fs::write(&self.path, json).map_err(|e| StoreError::write(&self.path, e))?;
        }

        tracing::info!(
            "Wrote {} vocabulary entries to {}",
            store.len(),
            self.path.display()
        );
        Ok(())
    }

    fn write_atomic(&self, dir: &Path, bytes: &[u8]) -> StoreResult<()> {
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::write(dir, e))?;
        tmp.write_all(bytes)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| StoreError::write(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::write(&self.path, e.error))?;
        Ok(())
    }
}
