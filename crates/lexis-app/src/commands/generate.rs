use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lexis_config::Config;
use lexis_core::generate::read_seeds;
use lexis_core::{Generator, Merger, StoreFile, VocabularyStore, dedup};
use lexis_types::RawEntry;

use crate::cli::GenerateArgs;
use crate::commands::store_file;

#[derive(Debug, Default)]
pub struct GenerateSummary {
    pub seeds: usize,
    /// Entries left after first-wins dedup within the batch
    pub generated: usize,
    pub batch_path: Option<PathBuf>,
    /// Set when the batch was merged into the store: (added, store total)
    pub merged: Option<(usize, usize)>,
}

impl fmt::Display for GenerateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generated {} vocabulary entries from {} seeds",
            self.generated, self.seeds
        )?;
        if let Some(path) = &self.batch_path {
            writeln!(f, "Batch saved to {}", path.display())?;
        }
        if let Some((added, total)) = self.merged {
            writeln!(f, "Added {added} new words")?;
            writeln!(f, "Total vocabulary: {total} words")?;
        }
        Ok(())
    }
}

pub fn handle_generate(config: &Config, args: &GenerateArgs) -> anyhow::Result<GenerateSummary> {
    let seeds = read_seeds(&args.seeds)
        .with_context(|| format!("reading seeds {}", args.seeds.display()))?;
    let seed_count = seeds.len();

    let generator = Generator::new(config.generator.clone());
    let batch = dedup(generator.generate(seeds).into_iter().map(RawEntry::from))
        .context("deduplicating generated batch")?;
    if batch.len() < seed_count {
        tracing::info!(
            "Dropped {} repeated seed words",
            seed_count - batch.len()
        );
    }

    let mut summary = GenerateSummary {
        seeds: seed_count,
        generated: batch.len(),
        ..Default::default()
    };

    let store_file = store_file(config, &args.store);
    if let Some(output) = &args.output
        && args.merge_into_store
        && same_path(output, store_file.path())
    {
        anyhow::bail!(
            "batch output {} is the store itself; pick another --output",
            output.display()
        );
    }

    let merged = if args.merge_into_store {
        let base = store_file
            .load()
            .with_context(|| format!("loading store {}", store_file.path().display()))?;

        let mut merger = Merger::new(base).context("indexing existing vocabulary")?;
        let report = merger.merge_batch(batch.clone())?;
        Some((report, merger.finish()))
    } else {
        None
    };

    if let Some(output) = &args.output {
        let batch_file = StoreFile::new(output)
            .with_atomic_write(config.store.atomic_write && !args.store.no_atomic);
        batch_file
            .write(&VocabularyStore::from(batch))
            .with_context(|| format!("writing batch {}", output.display()))?;
        summary.batch_path = Some(output.clone());
    }

    if let Some((report, merged)) = merged {
        store_file
            .write(&merged)
            .with_context(|| format!("writing store {}", store_file.path().display()))?;
        summary.merged = Some((report.added, merged.len()));
    }

    Ok(summary)
}

fn same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
