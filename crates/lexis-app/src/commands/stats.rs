use std::fmt;

use anyhow::Context;
use lexis_config::Config;
use lexis_core::{CategoryReport, TargetProgress};

use crate::cli::StatsArgs;
use crate::commands::store_file;

#[derive(Debug)]
pub struct StatsSummary {
    pub categories: CategoryReport,
    pub progress: TargetProgress,
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.categories)?;
        writeln!(f, "{}", self.progress)
    }
}

pub fn handle_stats(config: &Config, args: &StatsArgs) -> anyhow::Result<StatsSummary> {
    let store_file = store_file(config, &args.store);
    let store = store_file
        .load()
        .with_context(|| format!("loading store {}", store_file.path().display()))?;

    let categories = CategoryReport::from_store(&store).context("counting categories")?;
    let target = args.target.unwrap_or(config.target_count);

    Ok(StatsSummary {
        progress: TargetProgress::new(categories.total, target),
        categories,
    })
}
