use clap::Parser;

mod cli;
mod commands;
mod logging;
mod profile;

#[cfg(test)]
mod tests;

use self::cli::Cli;

fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    logging::init_tracing(config.log_format);

    commands::dispatch(&config, cli.command)
}
