//! Aggregation operations over the [`GithubApi`](crate::traits::GithubApi)
//! collaborator.
//!
//! Both operations are request-scoped: every piece of state they create
//! lives for one invocation and nothing is shared across calls.

mod details;
mod list;

pub use details::{RepositoriesDetailsOutput, RepositoryDetails, user_repositories_details};
pub use list::{RepositoriesListOutput, RepositoryListItem, user_repositories_list};

/// Fixed caller-facing message for any primary-loop upstream failure.
const PULL_REPOSITORIES_ERROR: &str = "Failed to pull user repositories";
