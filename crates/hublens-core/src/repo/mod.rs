//! Upstream GitHub data model.
//!
//! Shapes mirror what the GitHub GraphQL and REST APIs return; unknown
//! fields are dropped during deserialization.

mod de;
mod file;
mod node;
mod tree;
mod webhook;

pub use file::RepositoryFile;
pub use node::{
    BranchRef, BranchTarget, RepositoriesPage, RepositoryDetailsNode, RepositoryListNode,
    RepositoryOwner,
};
pub use tree::{GitCommit, GitTree, TreeEntry, TreeEntryObject};
pub use webhook::{Webhook, WebhookConfig, WebhookLastResponse};
