pub mod error;
pub mod generate;
pub mod merge;
pub mod report;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use generate::{Generator, SeedWord};
pub use merge::{BatchReport, Merger, dedup, merge};
pub use report::{CategoryReport, TargetProgress};
pub use store::{StoreFile, VocabularyStore};
