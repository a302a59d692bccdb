use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lexis_config::LogFormat;

/// Build and maintain the bundled vocabulary database
#[derive(Parser, Debug)]
#[command(name = "lexis", author, version, about)]
pub struct Cli {
    /// JSON config file; environment variables are used when absent
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log output format (text or json)
    #[arg(long, global = true, value_parser = parse_log_format)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge candidate batches into the store, skipping known words
    Merge(MergeArgs),
    /// Expand a seed word list into full entries
    Generate(GenerateArgs),
    /// Print the category distribution and progress to the target size
    Stats(StatsArgs),
    /// Apply literal find/replace rules to source files
    Patch(PatchArgs),
    /// Print the effective configuration as JSON
    Config,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Vocabulary store path (overrides config)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Write the store in place instead of via a temp file
    #[arg(long)]
    pub no_atomic: bool,
}

#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Write the merged store here instead of back to the store path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report what would be added without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Candidate JSON arrays, merged in the given order
    #[arg(required = true)]
    pub candidates: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// JSON array of seed words
    pub seeds: PathBuf,

    /// Where to write the generated batch
    #[arg(short, long, required_unless_present = "merge_into_store")]
    pub output: Option<PathBuf>,

    /// Merge the generated batch straight into the store
    #[arg(long)]
    pub merge_into_store: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Target vocabulary size (overrides config)
    #[arg(long)]
    pub target: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct PatchArgs {
    /// JSON file with `{ "rules": [...] }`
    pub rules: PathBuf,

    /// Files to patch in place
    #[arg(required = true)]
    pub targets: Vec<PathBuf>,

    #[arg(long)]
    pub dry_run: bool,
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    LogFormat::parse(value).ok_or_else(|| format!("unknown log format '{value}'"))
}
