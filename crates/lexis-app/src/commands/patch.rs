use std::fmt;
use std::path::PathBuf;

use anyhow::Context;
use lexis_patch::{PatchReport, apply_to_file, load_patch_set};

use crate::cli::PatchArgs;

#[derive(Debug, Default)]
pub struct PatchSummary {
    pub patched: Vec<(PathBuf, PatchReport)>,
    pub dry_run: bool,
}

impl fmt::Display for PatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, report) in &self.patched {
            let status = match (report.changed, self.dry_run) {
                (false, _) => "unchanged",
                (true, true) => "would change",
                (true, false) => "patched",
            };
            writeln!(
                f,
                "{}: {} ({} replacements)",
                path.display(),
                status,
                report.total()
            )?;
        }
        Ok(())
    }
}

/// Every target is attempted; the run fails afterwards if any file did
pub fn handle_patch(args: &PatchArgs) -> anyhow::Result<PatchSummary> {
    let set = load_patch_set(&args.rules)
        .with_context(|| format!("loading rules {}", args.rules.display()))?;

    let mut summary = PatchSummary {
        dry_run: args.dry_run,
        ..Default::default()
    };
    let mut failures = 0;

    for path in &args.targets {
        match apply_to_file(&set, path, args.dry_run) {
            Ok(report) => summary.patched.push((path.clone(), report)),
            Err(e) => {
                tracing::error!("{}: {e}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} file(s) could not be patched", args.targets.len());
    }

    Ok(summary)
}
