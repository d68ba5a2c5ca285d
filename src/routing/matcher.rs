//! Trie lookup with exhaustive branch exploration.
//!
//! # Responsibilities
//! - Walk the trie for an incoming (method, path)
//! - Explore literal, parameter and wildcard branches exhaustively
//! - Resolve multi-match ambiguity by lowest registration index
//!
//! # Design Decisions
//! - Branches are never short-circuited: a structural first-match walk would
//!   bias the result toward literal-vs-parameter branch ordering, while the
//!   contract is that the first *registered* route wins
//! - Capture values are collected positionally during the walk and only
//!   bound to names from the winning route's own pattern

use crate::routing::trie::TrieNode;

/// One complete walk that reached a terminal node.
#[derive(Debug)]
pub(crate) struct Candidate {
    /// Registration index of the terminating route.
    pub(crate) index: usize,
    /// Values bound at parameter positions, in path order.
    pub(crate) values: Vec<String>,
    /// Remaining path consumed by a trailing wildcard, if one was taken.
    pub(crate) rest: Option<String>,
}

/// Split a request path into its non-empty `/`-delimited segments.
///
/// `/` alone is zero segments below the root; doubled and trailing slashes
/// collapse.
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|piece| !piece.is_empty()).collect()
}

/// Collect every candidate across all branches, then pick the winner by
/// lowest registration index.
pub(crate) fn find(root: &TrieNode, method: &str, segments: &[&str]) -> Option<Candidate> {
    let mut candidates = Vec::new();
    let mut values = Vec::new();
    descend(root, method, segments, &mut values, &mut candidates);

    candidates
        .into_iter()
        .min_by_key(|candidate| candidate.index)
}

fn descend(
    node: &TrieNode,
    method: &str,
    segments: &[&str],
    values: &mut Vec<String>,
    candidates: &mut Vec<Candidate>,
) {
    let Some((&segment, remaining)) = segments.split_first() else {
        // End of the path: every route terminating here for the method is a
        // candidate with the bindings accumulated so far.
        for &index in node.terminals(method) {
            candidates.push(Candidate {
                index,
                values: values.clone(),
                rest: None,
            });
        }
        return;
    };

    if let Some(child) = node.literal(segment) {
        descend(child, method, remaining, values, candidates);
    }

    if let Some(param) = node.param() {
        values.push(segment.to_string());
        descend(&param.node, method, remaining, values, candidates);
        values.pop();
    }

    if let Some(wildcard) = node.wildcard() {
        // The catch-all consumes everything that is left; its node is a leaf.
        let rest = segments.join("/");
        for &index in wildcard.node.terminals(method) {
            candidates.push(Candidate {
                index,
                values: values.clone(),
                rest: Some(rest.clone()),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::registry::RouteRegistry;
    use crate::routing::trie;

    fn root(routes: &[(&str, &str)]) -> TrieNode {
        let mut registry = RouteRegistry::new();
        for (position, (method, pattern)) in routes.iter().enumerate() {
            registry.register(method, pattern, position).unwrap();
        }
        trie::build(registry.all()).unwrap()
    }

    #[test]
    fn splits_paths_into_nonempty_segments() {
        assert_eq!(split_path("/"), Vec::<&str>::new());
        assert_eq!(split_path("/users/123"), vec!["users", "123"]);
        assert_eq!(split_path("/users//123/"), vec!["users", "123"]);
    }

    #[test]
    fn literal_walk_reaches_the_terminal() {
        let root = root(&[("GET", "/api/users")]);
        let winner = find(&root, "GET", &["api", "users"]).unwrap();
        assert_eq!(winner.index, 0);
        assert!(winner.values.is_empty());
        assert!(winner.rest.is_none());
    }

    #[test]
    fn method_mismatch_is_no_match() {
        let root = root(&[("GET", "/api/users")]);
        assert!(find(&root, "POST", &["api", "users"]).is_none());
    }

    #[test]
    fn param_binds_one_segment() {
        let root = root(&[("GET", "/users/:id")]);
        let winner = find(&root, "GET", &["users", "123"]).unwrap();
        assert_eq!(winner.values, vec!["123".to_string()]);
    }

    #[test]
    fn wildcard_binds_the_remaining_path() {
        let root = root(&[("GET", "/files/*path")]);
        let winner = find(&root, "GET", &["files", "a", "b.txt"]).unwrap();
        assert_eq!(winner.rest.as_deref(), Some("a/b.txt"));
    }

    #[test]
    fn wildcard_requires_at_least_one_remaining_segment() {
        let root = root(&[("GET", "/files/*path")]);
        assert!(find(&root, "GET", &["files"]).is_none());
    }

    #[test]
    fn lowest_registration_index_wins_across_branch_types() {
        // A later literal route must not shadow an earlier param route.
        let root1 = root(&[("GET", "/r/:id"), ("GET", "/r/latest")]);
        let winner = find(&root1, "GET", &["r", "latest"]).unwrap();
        assert_eq!(winner.index, 0);

        // And the literal wins when registration order flips.
        let root2 = root(&[("GET", "/r/latest"), ("GET", "/r/:id")]);
        let winner = find(&root2, "GET", &["r", "latest"]).unwrap();
        assert_eq!(winner.index, 0);
    }

    #[test]
    fn backtracks_out_of_dead_literal_branches() {
        // "users" descends the literal branch, which dead-ends at depth two;
        // the param branch must still be explored.
        let root = root(&[
            ("GET", "/users/admin/settings"),
            ("GET", "/:section/admin/profile"),
        ]);
        let winner = find(&root, "GET", &["users", "admin", "profile"]).unwrap();
        assert_eq!(winner.index, 1);
        assert_eq!(winner.values, vec!["users".to_string()]);
    }
}
