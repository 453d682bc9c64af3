//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::repos::ReposCommand;

/// CLI for aggregating GitHub repository details.
#[derive(Parser, Debug)]
#[command(name = "hublens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Repository queries against the GitHub API
    Repos(ReposCommand),
}
