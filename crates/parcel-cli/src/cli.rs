use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "parcel")]
#[command(about = "Search Indian land-record portals for one property and merge what they return")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file. Built-in defaults apply when omitted.
    #[arg(long, short = 'c', global = true, env = "PARCEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, overriding the configured level (e.g. "debug").
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one search and print the JSON response on stdout
    #[command(after_help = "\
Examples:
  parcel search --query query.json --simulate --seed 7 --pretty
  cat query.json | parcel search --query - --config parcel.toml")]
    Search(SearchArgs),

    /// List the portals a search would reach
    Portals(PortalsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// JSON query file, or "-" to read from stdin.
    #[arg(long, short = 'q', value_name = "FILE")]
    pub query: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Pretty-print the response.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PortalsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Where portal answers come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Use simulated portals instead of configured HTTP endpoints.
    #[arg(long)]
    pub simulate: bool,

    /// Seed for simulated faults and latency. Implies --simulate.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

impl SourceArgs {
    pub fn simulated(&self) -> bool {
        self.simulate || self.seed.is_some()
    }
}
