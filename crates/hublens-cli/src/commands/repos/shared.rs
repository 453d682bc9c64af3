//! Flags shared by the repos subcommands.

use anyhow::{Context, Result};
use clap::Args;

use hublens_core::{AuthToken, PageRequest};

#[derive(Args, Debug)]
pub struct PageArgs {
    /// GitHub token; falls back to the GITHUB_TOKEN environment variable
    #[arg(long)]
    pub token: Option<String>,

    /// Number of repositories to fetch (1-20)
    #[arg(long, default_value_t = 10)]
    pub count: i64,

    /// Pagination cursor to resume from
    #[arg(long)]
    pub cursor: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl PageArgs {
    /// Build a validated page request from the flags.
    pub fn to_request(&self) -> Result<PageRequest> {
        let raw = match &self.token {
            Some(token) => token.clone(),
            None => std::env::var("GITHUB_TOKEN")
                .context("No token provided. Pass --token or set GITHUB_TOKEN.")?,
        };

        let token = AuthToken::new(raw).context("Invalid token")?;

        PageRequest::new(token, self.count, self.cursor.clone()).context("Invalid page request")
    }
}
