//! Route lookup surface.
//!
//! # Responsibilities
//! - Collect route registrations during the build phase
//! - Freeze routes and trie into an immutable router
//! - Resolve (method, path) and (method, url) lookups
//!
//! # Design Decisions
//! - Two strict phases: `RouterBuilder` is consumed by `build()`, so
//!   registering on a built router is impossible at the type level
//! - Immutable after construction (shared across threads without locks)
//! - Explicit `None` for no-match rather than an error

use url::Url;

use crate::routing::error::RouteError;
use crate::routing::matcher;
use crate::routing::params::Params;
use crate::routing::pattern::Segment;
use crate::routing::registry::{Route, RouteRegistry};
use crate::routing::trie::{self, TrieNode};

/// Build-phase collector for route registrations.
///
/// ```
/// use routekit::RouterBuilder;
///
/// # fn main() -> Result<(), routekit::RouteError> {
/// let router = RouterBuilder::new()
///     .route("GET", "/resources/:id", "one_resource")?
///     .route("GET", "/resources", "all_resources")?
///     .build()?;
///
/// let matched = router.find("GET", "/resources/123").unwrap();
/// assert_eq!(*matched.route.destination(), "one_resource");
/// assert_eq!(matched.params.get("id"), Some("123"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouterBuilder<D> {
    registry: RouteRegistry<D>,
}

impl<D> RouterBuilder<D> {
    pub fn new() -> Self {
        Self {
            registry: RouteRegistry::new(),
        }
    }

    /// Register a route. Registration order is significant: when several
    /// routes match a path, the one registered first wins.
    pub fn route(mut self, method: &str, pattern: &str, destination: D) -> Result<Self, RouteError> {
        self.registry.register(method, pattern, destination)?;
        Ok(self)
    }

    /// Routes registered so far, in registration order.
    pub fn routes(&self) -> &[Route<D>] {
        self.registry.all()
    }

    /// Validate the route set and freeze it into an immutable [`Router`].
    pub fn build(self) -> Result<Router<D>, RouteError> {
        let routes = self.registry.into_routes();
        let root = trie::build(&routes)?;

        tracing::debug!(routes = routes.len(), "Router built");

        Ok(Router { routes, root })
    }
}

/// Immutable route matcher, shared freely across threads.
///
/// Produced by [`RouterBuilder::build`]; owns its routes and the trie built
/// over them, and both are discarded together when the router is dropped.
#[derive(Debug)]
pub struct Router<D> {
    routes: Vec<Route<D>>,
    root: TrieNode,
}

/// A successful lookup: the winning route and its captured parameters.
#[derive(Debug)]
pub struct Match<'r, D> {
    pub route: &'r Route<D>,
    pub params: Params,
}

impl<D> Router<D> {
    /// Resolve a request path. Returns `None` when nothing matched; the
    /// method comparison is case-insensitive.
    pub fn find(&self, method: &str, path: &str) -> Option<Match<'_, D>> {
        let method = method.to_uppercase();
        let segments = matcher::split_path(path);
        let winner = matcher::find(&self.root, &method, &segments)?;

        let route = &self.routes[winner.index];
        let mut params = Params::new();
        let mut values = winner.values.into_iter();
        for segment in route.segments() {
            match segment {
                Segment::Literal(_) => {}
                Segment::Param(name) => {
                    if let Some(value) = values.next() {
                        params.insert(name.clone(), value);
                    }
                }
                Segment::Wildcard(name) => {
                    params.insert(name.clone(), winner.rest.clone().unwrap_or_default());
                }
            }
        }

        Some(Match { route, params })
    }

    /// Resolve a full URL string, or a bare path as a degenerate URL.
    ///
    /// The path component is extracted and matched exactly as [`find`]
    /// would; a malformed URL fails with [`RouteError::InvalidUrl`] and
    /// leaves the router untouched.
    ///
    /// [`find`]: Router::find
    pub fn find_url(&self, method: &str, url: &str) -> Result<Option<Match<'_, D>>, RouteError> {
        let path = match Url::parse(url) {
            Ok(parsed) => parsed.path().to_string(),
            // A bare "/path" has no scheme; take it as the path itself.
            Err(url::ParseError::RelativeUrlWithoutBase) if url.starts_with('/') => {
                url.to_string()
            }
            Err(source) => {
                return Err(RouteError::InvalidUrl {
                    url: url.to_string(),
                    source,
                })
            }
        };

        Ok(self.find(method, &path))
    }

    /// The registered routes, in registration order.
    pub fn routes(&self) -> &[Route<D>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_lookup_is_case_insensitive() {
        let router = RouterBuilder::new()
            .route("GET", "/users", "all")
            .unwrap()
            .build()
            .unwrap();

        assert!(router.find("get", "/users").is_some());
        assert!(router.find("GeT", "/users").is_some());
    }

    #[test]
    fn params_are_named_by_the_winning_route() {
        // The param child stores "id" (registered first), but a GET lookup
        // can only win the second route, so the capture must be named "key".
        let router = RouterBuilder::new()
            .route("DELETE", "/r/:id", "remove")
            .unwrap()
            .route("GET", "/r/:key", "fetch")
            .unwrap()
            .build()
            .unwrap();

        let matched = router.find("GET", "/r/abc").unwrap();
        assert_eq!(*matched.route.destination(), "fetch");
        assert_eq!(matched.params.get("key"), Some("abc"));
        assert_eq!(matched.params.get("id"), None);
    }

    #[test]
    fn find_url_accepts_full_urls_and_bare_paths() {
        let router = RouterBuilder::new()
            .route("GET", "/resources/:id", "one")
            .unwrap()
            .build()
            .unwrap();

        let from_url = router
            .find_url("GET", "http://example.org/resources/123")
            .unwrap()
            .unwrap();
        let from_path = router.find_url("GET", "/resources/123").unwrap().unwrap();

        assert_eq!(from_url.route.index(), from_path.route.index());
        assert_eq!(from_url.params, from_path.params);
    }

    #[test]
    fn find_url_rejects_malformed_urls() {
        let router = RouterBuilder::<&str>::new().build().unwrap();
        let err = router.find_url("GET", "http://[invalid").unwrap_err();
        assert!(matches!(err, RouteError::InvalidUrl { .. }));
    }

    #[test]
    fn built_router_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Router<String>>();
    }
}
