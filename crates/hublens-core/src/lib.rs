//! hublens-core - Core types, traits and aggregation logic for the
//! hublens GitHub repository toolkit.

pub mod decode;
pub mod error;
pub mod repo;
pub mod service;
pub mod traits;
pub mod types;
pub mod walk;

pub use error::{DecodeError, Error, ErrorCode, UpstreamError};
pub use repo::{
    BranchTarget, GitCommit, GitTree, RepositoriesPage, RepositoryDetailsNode, RepositoryFile,
    RepositoryListNode, RepositoryOwner, TreeEntry, TreeEntryObject, Webhook,
};
pub use service::{
    RepositoriesDetailsOutput, RepositoriesListOutput, RepositoryDetails, RepositoryListItem,
    user_repositories_details, user_repositories_list,
};
pub use traits::GithubApi;
pub use types::{AuthToken, PageRequest};
pub use walk::{CONFIG_FILE_EXTENSION, ContentSummary};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
