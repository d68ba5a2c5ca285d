//! Prefix-tree construction over route segment sequences.
//!
//! # Data Flow
//! ```text
//! RouteRegistry (routes in registration order)
//!     → one insertion walk per route, root downward
//!     → shared literal prefixes merge into common nodes
//!     → terminal nodes record method → route indices
//!     → Frozen as the immutable lookup structure
//! ```
//!
//! # Design Decisions
//! - One node per path segment position; matching cost is proportional to
//!   path depth, not to the number of registered routes
//! - At most one parameter child and one wildcard child per node; the first
//!   registered name is the one stored
//! - Duplicate (method, pattern) pairs fail the whole build

use std::collections::HashMap;

use crate::routing::error::RouteError;
use crate::routing::pattern::Segment;
use crate::routing::registry::Route;

/// One path segment position in the trie.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Literal children keyed by exact segment text.
    literals: HashMap<String, TrieNode>,
    /// Parameter child, at most one per node.
    param: Option<Box<ParamChild>>,
    /// Wildcard child, at most one per node. Always a leaf.
    wildcard: Option<Box<WildcardChild>>,
    /// Method → indices of routes terminating at this node.
    terminals: HashMap<String, Vec<usize>>,
}

#[derive(Debug)]
pub(crate) struct ParamChild {
    pub(crate) name: String,
    pub(crate) node: TrieNode,
}

#[derive(Debug)]
pub(crate) struct WildcardChild {
    pub(crate) name: String,
    pub(crate) node: TrieNode,
}

impl TrieNode {
    pub(crate) fn literal(&self, segment: &str) -> Option<&TrieNode> {
        self.literals.get(segment)
    }

    pub(crate) fn param(&self) -> Option<&ParamChild> {
        self.param.as_deref()
    }

    pub(crate) fn wildcard(&self) -> Option<&WildcardChild> {
        self.wildcard.as_deref()
    }

    pub(crate) fn terminals(&self, method: &str) -> &[usize] {
        self.terminals.get(method).map_or(&[], Vec::as_slice)
    }
}

/// Build the trie from the registry's routes, in registration order.
///
/// The returned root is treated as immutable from here on; lookups never
/// mutate it.
pub(crate) fn build<D>(routes: &[Route<D>]) -> Result<TrieNode, RouteError> {
    let mut root = TrieNode::default();

    for route in routes {
        let mut node = &mut root;
        for segment in route.segments() {
            node = match segment {
                Segment::Literal(text) => node.literals.entry(text.clone()).or_default(),
                Segment::Param(name) => {
                    &mut node
                        .param
                        .get_or_insert_with(|| {
                            Box::new(ParamChild {
                                name: name.clone(),
                                node: TrieNode::default(),
                            })
                        })
                        .node
                }
                Segment::Wildcard(name) => {
                    &mut node
                        .wildcard
                        .get_or_insert_with(|| {
                            Box::new(WildcardChild {
                                name: name.clone(),
                                node: TrieNode::default(),
                            })
                        })
                        .node
                }
            };
        }

        let entries = node.terminals.entry(route.method().to_string()).or_default();
        let duplicate = entries
            .iter()
            .any(|&index| routes[index].pattern() == route.pattern());
        if duplicate {
            return Err(RouteError::DuplicateRoute {
                method: route.method().to_string(),
                pattern: route.pattern().to_string(),
            });
        }
        entries.push(route.index());
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::registry::RouteRegistry;

    fn registry(routes: &[(&str, &str)]) -> RouteRegistry<usize> {
        let mut registry = RouteRegistry::new();
        for (position, (method, pattern)) in routes.iter().enumerate() {
            registry.register(method, pattern, position).unwrap();
        }
        registry
    }

    #[test]
    fn merges_shared_literal_prefixes() {
        let registry = registry(&[("GET", "/api/users"), ("GET", "/api/teams")]);
        let root = build(registry.all()).unwrap();

        let api = root.literal("api").unwrap();
        assert!(api.literal("users").is_some());
        assert!(api.literal("teams").is_some());
    }

    #[test]
    fn records_terminals_per_method() {
        let registry = registry(&[("GET", "/users"), ("POST", "/users")]);
        let root = build(registry.all()).unwrap();

        let users = root.literal("users").unwrap();
        assert_eq!(users.terminals("GET"), &[0]);
        assert_eq!(users.terminals("POST"), &[1]);
        assert!(users.terminals("DELETE").is_empty());
    }

    #[test]
    fn first_param_name_wins_for_storage() {
        let registry = registry(&[("GET", "/r/:id"), ("DELETE", "/r/:key")]);
        let root = build(registry.all()).unwrap();

        let param = root.literal("r").unwrap().param().unwrap();
        assert_eq!(param.name, "id");
        assert_eq!(param.node.terminals("GET"), &[0]);
        assert_eq!(param.node.terminals("DELETE"), &[1]);
    }

    #[test]
    fn duplicate_method_and_pattern_fails_the_build() {
        let registry = registry(&[("GET", "/"), ("get", "/")]);
        let err = build(registry.all()).unwrap_err();
        match err {
            RouteError::DuplicateRoute { method, pattern } => {
                assert_eq!(method, "GET");
                assert_eq!(pattern, "/");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn same_position_params_with_different_names_are_not_duplicates() {
        let registry = registry(&[("GET", "/r/:id"), ("GET", "/r/:key")]);
        let root = build(registry.all()).unwrap();

        let param = root.literal("r").unwrap().param().unwrap();
        assert_eq!(param.node.terminals("GET"), &[0, 1]);
    }

    #[test]
    fn root_pattern_terminates_at_the_root_node() {
        let registry = registry(&[("GET", "/")]);
        let root = build(registry.all()).unwrap();
        assert_eq!(root.terminals("GET"), &[0]);
    }
}
