pub mod category;
pub mod entry;

pub use category::Category;
pub use entry::{EntryError, RawEntry, VocabularyEntry, normalize_word};
