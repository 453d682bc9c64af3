//! Git tree types from the GraphQL details query.

use serde::Deserialize;

/// A commit on the default branch.
#[derive(Debug, Clone, Deserialize)]
pub struct GitCommit {
    #[serde(default)]
    pub tree: Option<GitTree>,
}

/// A directory tree.
#[derive(Debug, Clone, Deserialize)]
pub struct GitTree {
    #[serde(default)]
    pub entries: Option<Vec<TreeEntry>>,
}

/// A single tree entry.
///
/// `kind` is GitHub's entry type (`blob`, `tree`, `commit` for submodules);
/// an entry without it came from a union member we did not select and is
/// skipped by the walker.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub object: Option<TreeEntryObject>,
}

/// The object behind a tree entry, discriminated by `__typename`.
///
/// Only nested trees are traversable; blobs, submodule commits and
/// anything else collapse into `Other`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__typename")]
pub enum TreeEntryObject {
    Tree(GitTree),
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_object_discriminates_trees_from_blobs() {
        let entry: TreeEntry = serde_json::from_value(json!({
            "path": "src",
            "name": "src",
            "extension": null,
            "type": "tree",
            "object": {
                "__typename": "Tree",
                "entries": [
                    { "path": "src/main.rs", "name": "main.rs", "extension": ".rs", "type": "blob" }
                ]
            }
        }))
        .unwrap();

        let Some(TreeEntryObject::Tree(tree)) = entry.object else {
            panic!("expected a nested tree");
        };
        assert_eq!(tree.entries.unwrap().len(), 1);

        let entry: TreeEntry = serde_json::from_value(json!({
            "path": "vendored",
            "type": "commit",
            "object": { "__typename": "Commit" }
        }))
        .unwrap();
        assert!(matches!(entry.object, Some(TreeEntryObject::Other)));
    }
}
