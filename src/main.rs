use anyhow::Result;
use clap::Parser;
use colored::*;
use seolens::cli::Cli;
use seolens::config::Config;
use seolens::run;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // RUST_LOG wins; otherwise -v raises the level. Logs go to stderr so
    // JSON output on stdout stays parseable.
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let loaded = if let Some(path) = &args.config {
        Config::from_file(Path::new(path)).map(Some)
    } else {
        Config::from_default_paths()
    };

    let args = match loaded {
        Ok(Some(config)) => config.merge_with_cli(&args),
        Ok(None) => args,
        Err(e) => {
            eprintln!("{} {}", "Error:".bright_red().bold(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("{} {}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
