//! Repos subcommand implementations.

mod details;
mod list;
mod shared;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ReposCommand {
    #[command(subcommand)]
    pub command: ReposSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReposSubcommand {
    /// List repositories with their sizes
    List(list::ListArgs),

    /// Aggregate repository details (file counts, webhooks, config files)
    Details(details::DetailsArgs),
}

pub async fn handle(cmd: ReposCommand) -> Result<()> {
    match cmd.command {
        ReposSubcommand::List(args) => list::run(args).await,
        ReposSubcommand::Details(args) => details::run(args).await,
    }
}
