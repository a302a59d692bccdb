//! Literal text substitution over source files, e.g. swapping hardcoded UI
//! strings for resource lookups. Has nothing to do with the vocabulary store.

use std::fs;
use std::path::{Path, PathBuf};

mod rule;

pub use rule::{PatchRule, PatchSet};

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid patch rules in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Required rule #{index} (`{find}`) matched nothing")]
    RuleNotMatched { index: usize, find: String },
}

/// What a patch run did to one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Replacements made per rule, in rule order
    pub replacements: Vec<usize>,
    pub changed: bool,
}

impl PatchReport {
    pub fn total(&self) -> usize {
        self.replacements.iter().sum()
    }
}

pub fn load_patch_set(path: &Path) -> Result<PatchSet, PatchError> {
    let json = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| PatchError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply every rule in order; each rule sees the output of the previous one
pub fn apply_to_text(set: &PatchSet, text: &str) -> Result<(String, PatchReport), PatchError> {
    let mut current = text.to_string();
    let mut replacements = Vec::with_capacity(set.rules.len());

    for (index, rule) in set.rules.iter().enumerate() {
        let hits = if rule.find.is_empty() {
            0
        } else {
            current.matches(rule.find.as_str()).count()
        };

        if hits == 0 && rule.required {
            return Err(PatchError::RuleNotMatched {
                index,
                find: rule.find.clone(),
            });
        }
        if hits > 0 {
            current = current.replace(&rule.find, &rule.replace);
        }
        replacements.push(hits);
    }

    let changed = current != text;
    Ok((
        current,
        PatchReport {
            replacements,
            changed,
        },
    ))
}

/// Patch a file in place. Nothing is written when a required rule fails or
/// the content comes out unchanged.
pub fn apply_to_file(
    set: &PatchSet,
    path: &Path,
    dry_run: bool,
) -> Result<PatchReport, PatchError> {
    let text = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (patched, report) = apply_to_text(set, &text)?;

    if report.changed && !dry_run {
        fs::write(path, patched).map_err(|source| PatchError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            "Patched {} ({} replacements)",
            path.display(),
            report.total()
        );
    } else {
        tracing::debug!("Left {} as is", path.display());
    }

    Ok(report)
}
