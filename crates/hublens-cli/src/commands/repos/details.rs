//! Repository details command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use hublens_core::user_repositories_details;
use hublens_github::GithubClient;

use crate::output;

use super::shared::PageArgs;

#[derive(Args, Debug)]
pub struct DetailsArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

pub async fn run(args: DetailsArgs) -> Result<()> {
    let request = args.page.to_request()?;
    let client = GithubClient::new();

    let result = user_repositories_details(&client, &request)
        .await
        .context("Failed to fetch repository details")?;

    if result.repositories.is_empty() {
        eprintln!("{}", "No repositories found.".dimmed());
        return Ok(());
    }

    if args.page.pretty {
        output::json_pretty(&result.repositories)?;
    } else {
        output::json(&result.repositories)?;
    }

    if let Some(cursor) = &result.cursor {
        eprintln!();
        output::field("Next cursor", cursor);
    }

    Ok(())
}
