//! Repository details aggregation.
//!
//! Drives the cursor-based pagination loop against the upstream GraphQL
//! API, walks each repository's default-branch tree, then enriches the
//! results with two concurrent batch phases (webhooks, config-file
//! content) that tolerate per-repository failures.

use futures_util::future::join_all;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::Result;
use crate::error::Error;
use crate::repo::{RepositoryDetailsNode, RepositoryOwner, Webhook};
use crate::traits::GithubApi;
use crate::types::PageRequest;
use crate::walk;

use super::PULL_REPOSITORIES_ERROR;

/// A repository in the details output.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryDetails {
    pub name: String,
    pub owner: RepositoryOwner,
    pub is_private: bool,
    pub files_count: u64,
    /// Active webhooks only; empty when the webhook fetch failed.
    pub webhooks: Vec<Webhook>,
    /// Decoded config-file content, when one was found and fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yml_file_content: Option<String>,
}

/// Output of [`user_repositories_details`].
#[derive(Debug, Clone, Serialize)]
pub struct RepositoriesDetailsOutput {
    pub repositories: Vec<RepositoryDetails>,
    /// Cursor to resume from; `None` once the upstream is exhausted.
    pub cursor: Option<String>,
}

/// Aggregate up to `count` repositories with file counts, active webhooks
/// and config-file content.
///
/// # Errors
///
/// Any failure in the primary pagination loop aborts the whole request;
/// secondary per-repository fetches degrade gracefully instead.
pub async fn user_repositories_details<G>(
    api: &G,
    request: &PageRequest,
) -> Result<RepositoriesDetailsOutput>
where
    G: GithubApi + ?Sized,
{
    let (nodes, cursor) = pull_repositories(api, request).await?;

    // Walk each tree up front, remembering which repositories have a
    // config file to fetch in the second batch phase.
    let mut repositories = Vec::with_capacity(nodes.len());
    let mut config_targets: Vec<(usize, String)> = Vec::new();

    for node in nodes {
        let summary =
            walk::summarize_branch_target(node.default_branch_ref.as_ref().and_then(|r| r.target.as_ref()));

        if let Some(path) = summary.config_file_path {
            config_targets.push((repositories.len(), path));
        }

        repositories.push(RepositoryDetails {
            name: node.name,
            owner: node.owner,
            is_private: node.is_private,
            files_count: summary.files_count,
            webhooks: Vec::new(),
            yml_file_content: None,
        });
    }

    attach_webhooks(api, request, &mut repositories).await;
    attach_config_files(api, request, &mut repositories, &config_targets).await;

    Ok(RepositoriesDetailsOutput {
        repositories,
        cursor,
    })
}

/// The pagination loop: repeatedly query upstream until `count`
/// repositories have been accounted for or the cursor is exhausted.
async fn pull_repositories<G>(
    api: &G,
    request: &PageRequest,
) -> Result<(Vec<RepositoryDetailsNode>, Option<String>)>
where
    G: GithubApi + ?Sized,
{
    let mut nodes = Vec::with_capacity(request.count());
    let mut cursor: Option<String> = request.cursor().map(str::to_owned);
    let mut fetched = 0;
    let mut exhausted = false;

    while fetched < request.count() && !exhausted {
        // Query in increments of at most two, with a final singleton when
        // exactly one repository is still owed.
        let batch = if request.count() - fetched == 1 { 1 } else { 2 };

        let page = api
            .repositories_details_page(batch, cursor.as_deref(), request.token())
            .await
            .map_err(|err| {
                error!(error = %err, "failed to pull user repositories");
                Error::api(PULL_REPOSITORIES_ERROR, err)
            })?;

        if page.nodes.is_empty() {
            cursor = None;
            exhausted = true;
            break;
        }

        nodes.extend(page.nodes.into_iter().flatten());

        cursor = page.last_cursor;
        if cursor.is_none() {
            // Missing pagination metadata: treat as end of data.
            exhausted = true;
            break;
        }

        // Null nodes still count against the quota; trust the upstream's
        // count semantics rather than the post-filter length.
        fetched += batch;
    }

    debug!(
        repositories = nodes.len(),
        exhausted, "pulled user repositories"
    );

    Ok((nodes, cursor))
}

/// First batch phase: fetch every repository's webhooks concurrently and
/// attach the active ones. A failed or undecodable fetch leaves that one
/// repository's list empty.
async fn attach_webhooks<G>(api: &G, request: &PageRequest, repositories: &mut [RepositoryDetails])
where
    G: GithubApi + ?Sized,
{
    let results = join_all(repositories.iter().map(|repository| {
        api.list_webhooks(&repository.owner.login, &repository.name, request.token())
    }))
    .await;

    for (repository, result) in repositories.iter_mut().zip(results) {
        match result {
            Ok(webhooks) => {
                repository.webhooks = webhooks.into_iter().filter(|hook| hook.active).collect();
            }
            Err(err) => {
                warn!(
                    repository = %repository.name,
                    error = %err,
                    "failed to fetch repository webhooks"
                );
            }
        }
    }
}

/// Second batch phase: fetch config-file content for the repositories that
/// have one. Results are joined back by index, so two repositories with
/// similar names can never pick up each other's content.
async fn attach_config_files<G>(
    api: &G,
    request: &PageRequest,
    repositories: &mut [RepositoryDetails],
    config_targets: &[(usize, String)],
) where
    G: GithubApi + ?Sized,
{
    let results = join_all(config_targets.iter().map(|(index, path)| {
        let repository = &repositories[*index];
        api.file_content(
            &repository.owner.login,
            &repository.name,
            path,
            request.token(),
        )
    }))
    .await;

    for ((index, path), result) in config_targets.iter().zip(results) {
        match result {
            Ok(file) => match file.decoded_text() {
                Ok(text) => repositories[*index].yml_file_content = Some(text),
                Err(err) => {
                    warn!(path = %path, error = %err, "failed to decode repository config file");
                }
            },
            Err(err) => {
                warn!(path = %path, error = %err, "failed to fetch repository config file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::error::ErrorCode;
    use crate::repo::{RepositoriesPage, RepositoryFile};
    use crate::service::testing::FakeGithub;
    use crate::types::AuthToken;
    use serde_json::json;

    fn request(count: i64, cursor: Option<&str>) -> PageRequest {
        PageRequest::new(
            AuthToken::new("tok").unwrap(),
            count,
            cursor.map(str::to_owned),
        )
        .unwrap()
    }

    fn node(name: &str) -> RepositoryDetailsNode {
        serde_json::from_value(json!({
            "name": name,
            "owner": { "login": "octocat", "id": "MDQ6VXNlcjE=" },
            "isPrivate": false,
            "defaultBranchRef": {
                "target": {
                    "__typename": "Commit",
                    "tree": {
                        "entries": [
                            { "path": "README.md", "name": "README.md",
                              "extension": ".md", "type": "blob" }
                        ]
                    }
                }
            }
        }))
        .unwrap()
    }

    fn node_with_config(name: &str, path: &str) -> RepositoryDetailsNode {
        serde_json::from_value(json!({
            "name": name,
            "owner": { "login": "octocat", "id": "MDQ6VXNlcjE=" },
            "isPrivate": true,
            "defaultBranchRef": {
                "target": {
                    "__typename": "Commit",
                    "tree": {
                        "entries": [
                            { "path": path, "name": path, "extension": ".yml", "type": "blob" }
                        ]
                    }
                }
            }
        }))
        .unwrap()
    }

    fn webhook(id: u64, active: bool) -> Webhook {
        decode(json!({
            "id": id,
            "name": "web",
            "active": active,
            "type": "Repository",
            "events": ["push"],
            "config": {},
            "updated_at": "2024-01-02T00:00:00Z",
            "created_at": "2024-01-01T00:00:00Z",
            "url": "https://api.github.com/repos/octocat/repo/hooks/1",
            "test_url": "https://api.github.com/repos/octocat/repo/hooks/1/test",
            "ping_url": "https://api.github.com/repos/octocat/repo/hooks/1/pings",
            "last_response": {}
        }))
        .unwrap()
    }

    fn page(
        nodes: Vec<Option<RepositoryDetailsNode>>,
        cursor: Option<&str>,
    ) -> RepositoriesPage<RepositoryDetailsNode> {
        RepositoriesPage {
            nodes,
            last_cursor: cursor.map(str::to_owned),
        }
    }

    #[test]
    fn invalid_count_is_rejected_before_any_upstream_call() {
        for count in [0, 21] {
            let err =
                PageRequest::new(AuthToken::new("tok").unwrap(), count, None).unwrap_err();
            assert_eq!(err.code(), ErrorCode::ValidationError);
        }
    }

    #[tokio::test]
    async fn single_repository_with_cursor() {
        let api = FakeGithub::with_details_pages(vec![Some(page(
            vec![Some(node("only"))],
            Some("cursor"),
        ))]);

        let output = user_repositories_details(&api, &request(1, None))
            .await
            .unwrap();

        assert_eq!(output.repositories.len(), 1);
        assert_eq!(output.repositories[0].name, "only");
        assert_eq!(output.repositories[0].files_count, 1);
        assert_eq!(output.cursor.as_deref(), Some("cursor"));
        assert_eq!(api.page_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn aggregates_across_pages_up_to_count() {
        let api = FakeGithub::with_details_pages(vec![
            Some(page(vec![Some(node("a")), Some(node("b"))], Some("c1"))),
            Some(page(vec![Some(node("c"))], Some("c2"))),
        ]);

        let output = user_repositories_details(&api, &request(3, None))
            .await
            .unwrap();

        let names: Vec<_> = output
            .repositories
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(output.cursor.as_deref(), Some("c2"));

        // Second page was requested with the first page's cursor.
        let cursors = api.cursors_seen.lock().unwrap().clone();
        assert_eq!(cursors, [None, Some("c1".to_string())]);
    }

    #[tokio::test]
    async fn exhaustion_clears_the_cursor() {
        let api = FakeGithub::with_details_pages(vec![
            Some(page(vec![Some(node("a")), Some(node("b"))], Some("c1"))),
            Some(page(vec![], None)),
        ]);

        let output = user_repositories_details(&api, &request(5, None))
            .await
            .unwrap();

        assert_eq!(output.repositories.len(), 2);
        assert!(output.cursor.is_none());
    }

    #[tokio::test]
    async fn missing_last_cursor_stops_the_loop() {
        let api = FakeGithub::with_details_pages(vec![Some(page(
            vec![Some(node("a")), Some(node("b"))],
            None,
        ))]);

        let output = user_repositories_details(&api, &request(6, None))
            .await
            .unwrap();

        assert_eq!(output.repositories.len(), 2);
        assert!(output.cursor.is_none());
        assert_eq!(api.page_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn null_nodes_are_filtered_but_still_count_against_the_quota() {
        let api = FakeGithub::with_details_pages(vec![
            Some(page(vec![Some(node("a")), None], Some("c1"))),
            Some(page(vec![Some(node("b")), Some(node("c"))], Some("c2"))),
        ]);

        let output = user_repositories_details(&api, &request(4, None))
            .await
            .unwrap();

        let names: Vec<_> = output
            .repositories
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(api.page_calls.load(std::sync::atomic::Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn upstream_failure_aborts_with_the_fixed_message() {
        let api = FakeGithub::with_details_pages(vec![None]);

        let err = user_repositories_details(&api, &request(2, None))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InternalApiError);
        assert!(err.to_string().contains("Failed to pull user repositories"));
    }

    #[tokio::test]
    async fn webhook_failures_degrade_to_empty_lists() {
        let api = FakeGithub::with_details_pages(vec![Some(page(
            vec![Some(node("good")), Some(node("bad"))],
            Some("c1"),
        ))]);
        api.webhooks
            .lock()
            .unwrap()
            .insert("octocat/good".to_string(), vec![webhook(1, true)]);
        // No entry for octocat/bad: its fetch fails.

        let output = user_repositories_details(&api, &request(2, None))
            .await
            .unwrap();

        assert_eq!(output.repositories[0].webhooks.len(), 1);
        assert!(output.repositories[1].webhooks.is_empty());
    }

    #[tokio::test]
    async fn only_active_webhooks_are_kept() {
        let api = FakeGithub::with_details_pages(vec![Some(page(
            vec![Some(node("repo"))],
            Some("c1"),
        ))]);
        api.webhooks.lock().unwrap().insert(
            "octocat/repo".to_string(),
            vec![webhook(1, false), webhook(2, true)],
        );

        let output = user_repositories_details(&api, &request(1, None))
            .await
            .unwrap();

        let webhooks = &output.repositories[0].webhooks;
        assert_eq!(webhooks.len(), 1);
        assert_eq!(webhooks[0].id, 2);
    }

    #[tokio::test]
    async fn config_file_content_is_fetched_and_decoded() {
        let api = FakeGithub::with_details_pages(vec![Some(page(
            vec![Some(node_with_config("repo", "ci.yml")), Some(node("plain"))],
            Some("c1"),
        ))]);
        api.files.lock().unwrap().insert(
            "octocat/repo/ci.yml".to_string(),
            RepositoryFile {
                content: "b246IHB1c2gK".to_string(), // "on: push\n"
                url: "https://api.github.com/repos/octocat/repo/contents/ci.yml".to_string(),
            },
        );

        let output = user_repositories_details(&api, &request(2, None))
            .await
            .unwrap();

        assert_eq!(
            output.repositories[0].yml_file_content.as_deref(),
            Some("on: push\n")
        );
        // The repository without a config file is never queried.
        assert!(output.repositories[1].yml_file_content.is_none());
    }

    #[tokio::test]
    async fn config_file_fetch_failure_is_a_soft_skip() {
        let api = FakeGithub::with_details_pages(vec![Some(page(
            vec![Some(node_with_config("repo", "ci.yml"))],
            Some("c1"),
        ))]);
        // No file scripted: the content fetch fails.

        let output = user_repositories_details(&api, &request(1, None))
            .await
            .unwrap();

        assert!(output.repositories[0].yml_file_content.is_none());
    }
}
