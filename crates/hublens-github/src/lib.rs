//! hublens-github - Network-backed GithubApi implementation.

mod api;
mod client;
mod queries;

pub use client::{GITHUB_API_URL, GITHUB_GRAPHQL_URL, GithubClient};
