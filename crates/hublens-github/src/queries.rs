//! GraphQL query documents for the viewer's repositories.

/// Tree nesting depth requested from the details query.
///
/// GraphQL has no recursive fragments, so the tree selection is expanded
/// to a fixed depth; anything deeper is invisible to the walker.
const TREE_DEPTH: usize = 8;

/// Query for repository names, owners and disk usage.
pub(crate) const USER_REPOSITORIES_LIST: &str = "\
query UserRepositoriesList($count: Int!, $cursor: String) {
  viewer {
    repositories(first: $count, after: $cursor) {
      nodes {
        name
        owner { login id }
        diskUsage
      }
      edges { cursor }
    }
  }
}";

/// Build the details query, nesting the tree selection to [`TREE_DEPTH`].
pub(crate) fn user_repositories_details() -> String {
    format!(
        "\
query UserRepositoriesDetails($count: Int!, $cursor: String) {{
  viewer {{
    repositories(first: $count, after: $cursor) {{
      nodes {{
        name
        owner {{ login id }}
        isPrivate
        defaultBranchRef {{
          target {{
            __typename
            ... on Commit {{
              tree {{ {} }}
            }}
          }}
        }}
      }}
      edges {{ cursor }}
    }}
  }}
}}",
        tree_selection(TREE_DEPTH)
    )
}

fn tree_selection(depth: usize) -> String {
    let mut selection = String::from("entries { path name extension type }");

    for _ in 1..depth {
        selection = format!(
            "entries {{ path name extension type \
             object {{ __typename ... on Tree {{ {selection} }} }} }}"
        );
    }

    selection
}
