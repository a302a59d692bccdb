use lexis_config::Config;
use lexis_core::StoreFile;

use crate::cli::{Command, StoreArgs};
use crate::profile;

pub mod generate;
pub mod merge;
pub mod patch;
pub mod stats;

use generate::handle_generate;
use merge::handle_merge;
use patch::handle_patch;
use stats::handle_stats;

pub fn dispatch(config: &Config, command: Command) -> anyhow::Result<()> {
    tracing::debug!("Running {:?}", command);
    match command {
        Command::Merge(args) => {
            let summary = handle_merge(config, &args)?;
            print!("{summary}");
        }
        Command::Generate(args) => {
            let summary = handle_generate(config, &args)?;
            print!("{summary}");
        }
        Command::Stats(args) => {
            let summary = handle_stats(config, &args)?;
            print!("{summary}");
        }
        Command::Patch(args) => {
            let summary = handle_patch(&args)?;
            print!("{summary}");
        }
        Command::Config => {
            println!("{}", profile::render_config(config)?);
        }
    }

    Ok(())
}

/// Store file from config with CLI overrides applied
pub(crate) fn store_file(config: &Config, args: &StoreArgs) -> StoreFile {
    let file = match &args.store {
        Some(path) => StoreFile::new(path).with_atomic_write(config.store.atomic_write),
        None => StoreFile::from_config(&config.store),
    };

    if args.no_atomic {
        file.with_atomic_write(false)
    } else {
        file
    }
}
