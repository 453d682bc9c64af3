//! Default-branch tree walking.
//!
//! Computes the blob count of a repository's file tree and locates its
//! configuration file, depth-first in entry order.

use crate::repo::{BranchTarget, GitTree, TreeEntry, TreeEntryObject};

/// File extension treated as the repository's configuration file.
pub const CONFIG_FILE_EXTENSION: &str = ".yml";

/// Summary of a repository's default-branch file tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentSummary {
    /// Total number of blob (file) entries, at any depth.
    pub files_count: u64,
    /// Path of the first configuration file found, depth-first in entry
    /// order. Later matches never overwrite it.
    pub config_file_path: Option<String>,
}

/// Summarize a branch target. Anything that is not a commit with a tree
/// yields an empty summary.
pub fn summarize_branch_target(target: Option<&BranchTarget>) -> ContentSummary {
    match target {
        Some(BranchTarget::Commit(commit)) => commit
            .tree
            .as_ref()
            .map(summarize_tree)
            .unwrap_or_default(),
        _ => ContentSummary::default(),
    }
}

/// Recursively summarize a tree.
pub fn summarize_tree(tree: &GitTree) -> ContentSummary {
    let mut summary = ContentSummary::default();

    let Some(entries) = tree.entries.as_ref() else {
        return summary;
    };

    for entry in entries {
        // Union member without an entry type: not ours to interpret.
        let Some(kind) = entry.kind.as_deref() else {
            continue;
        };

        if summary.config_file_path.is_none() && is_config_file(entry) {
            summary.config_file_path = entry.path.clone();
        }

        if kind == "blob" {
            summary.files_count += 1;
            continue;
        }

        // Submodule commits and unselected union members are not trees.
        let Some(TreeEntryObject::Tree(subtree)) = entry.object.as_ref() else {
            continue;
        };

        let child = summarize_tree(subtree);
        summary.files_count += child.files_count;
        if summary.config_file_path.is_none() {
            summary.config_file_path = child.config_file_path;
        }
    }

    summary
}

fn is_config_file(entry: &TreeEntry) -> bool {
    entry.extension.as_deref() == Some(CONFIG_FILE_EXTENSION) && entry.path.is_some()
}
