mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, BrowseArgs, Command};
use cli_utils::DataPaths;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise). Logs go to
    // stderr so JSON output stays clean.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("maidx_cli=warn,maidx_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(&args.config);
    let paths = DataPaths::resolve(args.songs, args.stats, &config);

    match args.command {
        Some(Command::Browse(browse)) => commands::browse::run(&paths, &config, &browse),
        Some(Command::Show { id, json }) => commands::show::run(&paths, &config, &id, json),
        Some(Command::Badges) => commands::badges::run(),
        Some(Command::Query { query }) => commands::query::run(&query),
        None => commands::browse::run(&paths, &config, &BrowseArgs::default()),
    }
}
