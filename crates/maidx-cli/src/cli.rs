//! CLI argument definitions for maidx.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use maidx_core::{Badge, DsRange, SearchField};

#[derive(Parser)]
#[command(name = "maidx")]
#[command(about = "maimai DX chart catalog browser", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "maidx.toml")]
    pub config: PathBuf,

    /// Song metadata JSON (overrides config)
    #[arg(long, value_name = "FILE", env = "MAIDX_SONGS")]
    pub songs: Option<PathBuf>,

    /// Chart statistics JSON (overrides config)
    #[arg(long, value_name = "FILE", env = "MAIDX_STATS")]
    pub stats: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Browse the filtered catalog (default)
    Browse(BrowseArgs),
    /// Show every tier of one song
    Show {
        /// Song ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List badge keys, labels and rules
    Badges,
    /// Normalize a query string (parse and re-serialize)
    Query {
        /// Query string, with or without a leading '?'
        query: String,
    },
}

#[derive(clap::Args, Default)]
pub struct BrowseArgs {
    /// Start from a query string (e.g. "page=2&badgeFilters=dilei")
    #[arg(long, short)]
    pub query: Option<String>,
    /// Search term
    #[arg(long, short)]
    pub search: Option<String>,
    /// Search fields (comma-separated: alias,charter,title)
    #[arg(long, value_delimiter = ',')]
    pub fields: Option<Vec<SearchField>>,
    /// Required badges (comma-separated keys, see `maidx badges`)
    #[arg(long, short, value_delimiter = ',')]
    pub badges: Option<Vec<Badge>>,
    /// Lowest difficulty constant (1.0 to 15.0, snapped to 0.1)
    #[arg(long, value_parser = DsRange::parse_bound)]
    pub ds_min: Option<f64>,
    /// Highest difficulty constant (1.0 to 15.0, snapped to 0.1)
    #[arg(long, value_parser = DsRange::parse_bound)]
    pub ds_max: Option<f64>,
    /// Page number, starting at 1
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,
    /// Songs per page (overrides config)
    #[arg(long)]
    pub page_size: Option<usize>,
    /// Song IDs to show expanded (comma-separated)
    #[arg(long, short, value_delimiter = ',')]
    pub expand: Vec<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
