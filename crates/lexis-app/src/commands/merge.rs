use std::fmt;
use std::path::PathBuf;

use anyhow::Context;
use lexis_config::Config;
use lexis_core::store::read_entries;
use lexis_core::{BatchReport, CategoryReport, Merger, StoreFile, TargetProgress};

use crate::cli::MergeArgs;
use crate::commands::store_file;

#[derive(Debug)]
pub struct MergeSummary {
    pub before: usize,
    pub sources: Vec<(PathBuf, BatchReport)>,
    pub total: usize,
    pub written_to: Option<PathBuf>,
    pub categories: Option<CategoryReport>,
    pub progress: TargetProgress,
}

impl MergeSummary {
    pub fn added(&self) -> usize {
        self.sources.iter().map(|(_, report)| report.added).sum()
    }
}

impl fmt::Display for MergeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current vocabulary: {} words", self.before)?;
        for (path, report) in &self.sources {
            writeln!(
                f,
                "  {}: {} added, {} already present",
                path.display(),
                report.added,
                report.skipped
            )?;
        }
        writeln!(f, "Added {} new words", self.added())?;
        match &self.written_to {
            Some(path) => writeln!(f, "Saved to {}", path.display())?,
            None => writeln!(f, "Dry run, nothing written")?,
        }
        if let Some(categories) = &self.categories {
            write!(f, "{categories}")?;
        }
        writeln!(f, "{}", self.progress)
    }
}

pub fn handle_merge(config: &Config, args: &MergeArgs) -> anyhow::Result<MergeSummary> {
    let store_file = store_file(config, &args.store);
    let base = store_file
        .load()
        .with_context(|| format!("loading store {}", store_file.path().display()))?;
    let before = base.len();

    let mut merger = Merger::new(base).context("indexing existing vocabulary")?;
    let mut sources = Vec::with_capacity(args.candidates.len());

    for path in &args.candidates {
        let candidates =
            read_entries(path).with_context(|| format!("reading candidates {}", path.display()))?;
        let report = merger
            .merge_batch(candidates)
            .with_context(|| format!("merging candidates {}", path.display()))?;

        tracing::info!(
            "{}: {} added, {} skipped",
            path.display(),
            report.added,
            report.skipped
        );
        sources.push((path.clone(), report));
    }

    let merged = merger.finish();
    let total = merged.len();

    let written_to = if args.dry_run {
        tracing::info!("Dry run, leaving {} untouched", store_file.path().display());
        None
    } else {
        let target = match &args.output {
            Some(path) => StoreFile::new(path)
                .with_atomic_write(config.store.atomic_write && !args.store.no_atomic),
            None => store_file.clone(),
        };
        target
            .write(&merged)
            .with_context(|| format!("writing store {}", target.path().display()))?;
        Some(target.path().to_path_buf())
    };

    let categories = match CategoryReport::from_store(&merged) {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::warn!("Skipping category distribution: {e}");
            None
        }
    };

    Ok(MergeSummary {
        before,
        sources,
        total,
        written_to,
        categories,
        progress: TargetProgress::new(total, config.target_count),
    })
}
