//! Rotolog CLI - drives the rotating file logger from the command line

use anyhow::Result;
use clap::Parser;
use rotolog_core::{ConfigFile, LogConfig};
use rotolog_engine::LogWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Diagnostics go to stderr so they never interleave with the
    // deduped console stream on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("rotolog={0},rotolog_engine={0},rotolog_core={0}", log_level).into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = build_config(&cli)?;
    tracing::debug!(
        "effective config: path={} verbosity={} max_size={} max_backups={}",
        config.path().display(),
        config.verbosity(),
        config.max_size(),
        config.max_backups()
    );
    let mut writer = LogWriter::new(config);

    let result = match cli.command {
        Commands::Write(args) => commands::write::execute(&mut writer, args),
        Commands::Break => commands::section::execute(&mut writer),
        Commands::Demo(args) => commands::demo::execute(&mut writer, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Defaults, then config-file values, then command-line flags.
fn build_config(cli: &Cli) -> Result<LogConfig> {
    let mut config = LogConfig::default();

    if let Some(path) = &cli.config {
        ConfigFile::load(path)?.apply(&mut config);
    } else if let Some((file, _)) = ConfigFile::find_and_load(&std::env::current_dir()?)? {
        file.apply(&mut config);
    }

    if let Some(path) = &cli.log_file {
        config.set_path(path.clone());
    }
    if let Some(v) = cli.verbosity {
        config.set_verbosity(v);
    }
    if let Some(s) = cli.max_size {
        config.set_max_size(s);
    }
    if let Some(b) = cli.max_backups {
        config.set_max_backups(b);
    }
    Ok(config)
}
