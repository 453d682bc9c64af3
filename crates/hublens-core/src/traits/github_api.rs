//! GithubApi trait.

use async_trait::async_trait;

use crate::Result;
use crate::repo::{
    RepositoriesPage, RepositoryDetailsNode, RepositoryFile, RepositoryListNode, Webhook,
};
use crate::types::AuthToken;

/// The upstream GitHub collaborator.
///
/// Implementations speak GitHub's GraphQL API for repository pages and its
/// REST API for per-repository secondary fetches. The aggregation logic in
/// [`crate::service`] is written against this trait so it can be exercised
/// with an in-memory implementation.
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Fetch one page of repository nodes with default-branch tree details.
    async fn repositories_details_page(
        &self,
        count: usize,
        cursor: Option<&str>,
        token: &AuthToken,
    ) -> Result<RepositoriesPage<RepositoryDetailsNode>>;

    /// Fetch one page of repository nodes with name, owner and size.
    async fn repositories_list_page(
        &self,
        count: usize,
        cursor: Option<&str>,
        token: &AuthToken,
    ) -> Result<RepositoriesPage<RepositoryListNode>>;

    /// List a repository's webhooks, decoded and validated.
    async fn list_webhooks(&self, owner: &str, name: &str, token: &AuthToken)
    -> Result<Vec<Webhook>>;

    /// Fetch a file from a repository's contents endpoint.
    ///
    /// The returned content is still base64 as delivered by GitHub.
    async fn file_content(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        token: &AuthToken,
    ) -> Result<RepositoryFile>;
}
