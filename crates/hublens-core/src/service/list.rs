//! Repository list operation.
//!
//! A single-page projection of the viewer's repositories: name, owner and
//! disk size. No aggregation loop and no secondary fetches.

use serde::Serialize;
use tracing::error;

use crate::Result;
use crate::error::Error;
use crate::repo::RepositoryOwner;
use crate::traits::GithubApi;
use crate::types::PageRequest;

use super::PULL_REPOSITORIES_ERROR;

/// A repository in the list output.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryListItem {
    pub name: String,
    /// Disk usage in kilobytes; zero when the upstream reports none.
    pub size: u64,
    pub owner: RepositoryOwner,
}

/// Output of [`user_repositories_list`].
#[derive(Debug, Clone, Serialize)]
pub struct RepositoriesListOutput {
    pub repositories: Vec<RepositoryListItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// List up to `count` repositories with their sizes.
///
/// # Errors
///
/// Any upstream failure aborts the request with a fixed internal error.
pub async fn user_repositories_list<G>(
    api: &G,
    request: &PageRequest,
) -> Result<RepositoriesListOutput>
where
    G: GithubApi + ?Sized,
{
    let page = api
        .repositories_list_page(request.count(), request.cursor(), request.token())
        .await
        .map_err(|err| {
            error!(error = %err, "failed to pull user repositories");
            Error::api(PULL_REPOSITORIES_ERROR, err)
        })?;

    if page.nodes.is_empty() {
        return Ok(RepositoriesListOutput {
            repositories: Vec::new(),
            cursor: None,
        });
    }

    let repositories = page
        .nodes
        .into_iter()
        .flatten()
        .map(|node| RepositoryListItem {
            name: node.name,
            size: node.disk_usage.unwrap_or(0),
            owner: node.owner,
        })
        .collect();

    Ok(RepositoriesListOutput {
        repositories,
        cursor: page.last_cursor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::repo::{RepositoriesPage, RepositoryListNode};
    use crate::service::testing::FakeGithub;
    use crate::types::AuthToken;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    fn request(count: i64) -> PageRequest {
        PageRequest::new(AuthToken::new("tok").unwrap(), count, None).unwrap()
    }

    fn node(name: &str, disk_usage: Option<u64>) -> RepositoryListNode {
        serde_json::from_value(json!({
            "name": name,
            "owner": { "login": "octocat", "id": "MDQ6VXNlcjE=" },
            "diskUsage": disk_usage
        }))
        .unwrap()
    }

    fn api_with_page(page: Option<RepositoriesPage<RepositoryListNode>>) -> FakeGithub {
        FakeGithub {
            list_pages: Mutex::new(VecDeque::from([page])),
            ..FakeGithub::default()
        }
    }

    #[tokio::test]
    async fn maps_nodes_to_list_items() {
        let api = api_with_page(Some(RepositoriesPage {
            nodes: vec![Some(node("a", Some(128))), None, Some(node("b", None))],
            last_cursor: Some("c1".to_string()),
        }));

        let output = user_repositories_list(&api, &request(5)).await.unwrap();

        assert_eq!(output.repositories.len(), 2);
        assert_eq!(output.repositories[0].size, 128);
        assert_eq!(output.repositories[1].size, 0);
        assert_eq!(output.cursor.as_deref(), Some("c1"));
    }

    #[tokio::test]
    async fn empty_page_yields_empty_output_without_a_cursor() {
        let api = api_with_page(Some(RepositoriesPage {
            nodes: vec![],
            last_cursor: Some("ignored".to_string()),
        }));

        let output = user_repositories_list(&api, &request(5)).await.unwrap();

        assert!(output.repositories.is_empty());
        assert!(output.cursor.is_none());
    }

    #[tokio::test]
    async fn upstream_failure_surfaces_the_fixed_message() {
        let api = api_with_page(None);

        let err = user_repositories_list(&api, &request(5)).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InternalApiError);
        assert_eq!(err.to_string(), "Failed to pull user repositories");
    }
}
