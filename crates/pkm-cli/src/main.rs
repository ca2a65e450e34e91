mod cmd;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pkm_core::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pkm",
    about = "Personal knowledge management — gather and report on GitHub reviews, Jira issues, and git commits",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ~/.config/pkm/config.json)
    #[arg(long, global = true, env = "PKM_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the gather scripts for GitHub reviews, Jira issues, and today's commits
    Gather,

    /// Print a report from the gathered data
    Report,

    /// Print the environment variables passed to gather scripts
    Env,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = Config::load(cli.config.as_deref())
        .context("failed to resolve pkm config")
        .and_then(|config| match cli.command {
            Commands::Gather => cmd::gather::run(&config),
            Commands::Report => cmd::report::run(&config, cli.json),
            Commands::Env => cmd::env::run(&config, cli.json),
        });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
