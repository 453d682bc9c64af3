//! GithubApi implementation over the HTTP client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use hublens_core::Result;
use hublens_core::decode::decode;
use hublens_core::repo::{
    RepositoriesPage, RepositoryDetailsNode, RepositoryFile, RepositoryListNode, Webhook,
};
use hublens_core::traits::GithubApi;
use hublens_core::types::AuthToken;

use crate::client::GithubClient;
use crate::queries;

/// Response shape of the viewer repositories queries.
#[derive(Debug, Deserialize)]
struct ViewerData<T> {
    viewer: Viewer<T>,
}

#[derive(Debug, Deserialize)]
struct Viewer<T> {
    repositories: RepositoriesConnection<T>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RepositoriesConnection<T> {
    #[serde(default)]
    nodes: Option<Vec<Option<T>>>,
    #[serde(default)]
    edges: Option<Vec<Edge>>,
}

#[derive(Debug, Deserialize)]
struct Edge {
    #[serde(default)]
    cursor: Option<String>,
}

impl<T> RepositoriesConnection<T> {
    fn into_page(self) -> RepositoriesPage<T> {
        let last_cursor = self
            .edges
            .and_then(|edges| edges.into_iter().next_back())
            .and_then(|edge| edge.cursor);

        RepositoriesPage {
            nodes: self.nodes.unwrap_or_default(),
            last_cursor,
        }
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    #[instrument(skip(self, token))]
    async fn repositories_details_page(
        &self,
        count: usize,
        cursor: Option<&str>,
        token: &AuthToken,
    ) -> Result<RepositoriesPage<RepositoryDetailsNode>> {
        debug!(count, "fetching repository details page");

        let data: ViewerData<RepositoryDetailsNode> = self
            .graphql(
                &queries::user_repositories_details(),
                json!({ "count": count, "cursor": cursor }),
                token,
            )
            .await?;

        Ok(data.viewer.repositories.into_page())
    }

    #[instrument(skip(self, token))]
    async fn repositories_list_page(
        &self,
        count: usize,
        cursor: Option<&str>,
        token: &AuthToken,
    ) -> Result<RepositoriesPage<RepositoryListNode>> {
        debug!(count, "fetching repository list page");

        let data: ViewerData<RepositoryListNode> = self
            .graphql(
                queries::USER_REPOSITORIES_LIST,
                json!({ "count": count, "cursor": cursor }),
                token,
            )
            .await?;

        Ok(data.viewer.repositories.into_page())
    }

    #[instrument(skip(self, token))]
    async fn list_webhooks(
        &self,
        owner: &str,
        name: &str,
        token: &AuthToken,
    ) -> Result<Vec<Webhook>> {
        let raw = self
            .rest_get(&format!("/repos/{owner}/{name}/hooks"), token)
            .await?;

        decode(raw)
    }

    #[instrument(skip(self, token))]
    async fn file_content(
        &self,
        owner: &str,
        name: &str,
        path: &str,
        token: &AuthToken,
    ) -> Result<RepositoryFile> {
        let raw = self
            .rest_get(&format!("/repos/{owner}/{name}/contents/{path}"), token)
            .await?;

        decode(raw)
    }
}
