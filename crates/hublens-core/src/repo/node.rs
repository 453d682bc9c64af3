//! Repository node types from the GraphQL viewer query.

use serde::{Deserialize, Serialize};

use super::tree::GitCommit;

/// Owner of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
    pub id: String,
}

/// A repository node from the details query, carrying the default-branch
/// tree alongside the basic fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDetailsNode {
    pub name: String,
    pub owner: RepositoryOwner,
    pub is_private: bool,
    #[serde(default)]
    pub default_branch_ref: Option<BranchRef>,
}

/// A repository node from the list query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryListNode {
    pub name: String,
    pub owner: RepositoryOwner,
    #[serde(default)]
    pub disk_usage: Option<u64>,
}

/// A repository's default branch reference.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchRef {
    #[serde(default)]
    pub target: Option<BranchTarget>,
}

/// The object a branch ref points at.
///
/// Only commits carry a file tree; tags and any future target kinds are
/// collapsed into `Other` and contribute nothing to the walk.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum BranchTarget {
    Commit(GitCommit),
    #[serde(other)]
    Other,
}

/// One upstream page of repository nodes.
///
/// Nodes are kept nullable: a null entry is a repository that was deleted
/// or became inaccessible between listing and fetching, and the upstream
/// still counts it against the page size.
#[derive(Debug, Clone)]
pub struct RepositoriesPage<T> {
    pub nodes: Vec<Option<T>>,
    /// Cursor of the last edge, if the upstream returned one.
    pub last_cursor: Option<String>,
}
