//! Core trait for the upstream GitHub collaborator.

mod github_api;

pub use github_api::GithubApi;
