//! Ordered route registration.
//!
//! # Responsibilities
//! - Validate patterns as routes are registered
//! - Assign each route a stable registration index
//! - Preserve registration order exactly as calls occur
//!
//! # Design Decisions
//! - Registration order is semantically significant: the index is the
//!   tie-break used when multiple routes match a path
//! - Methods are normalized to uppercase once, at registration

use crate::routing::error::RouteError;
use crate::routing::pattern::{self, Segment};

/// A registered association between an HTTP method, a path pattern and an
/// opaque destination handle.
///
/// The destination type `D` is chosen by the caller; the router never
/// interprets it.
#[derive(Debug, Clone)]
pub struct Route<D> {
    method: String,
    pattern: String,
    destination: D,
    segments: Vec<Segment>,
    index: usize,
}

impl<D> Route<D> {
    /// The HTTP method, normalized to uppercase.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The pattern string exactly as registered.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The destination handle supplied at registration.
    pub fn destination(&self) -> &D {
        &self.destination
    }

    /// Insertion-order rank, used to resolve ambiguous matches.
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Ordered collection of validated routes.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry<D> {
    routes: Vec<Route<D>>,
}

impl<D> RouteRegistry<D> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Parse and validate the pattern, then append the route with the next
    /// registration index.
    pub fn register(
        &mut self,
        method: &str,
        pattern: &str,
        destination: D,
    ) -> Result<&Route<D>, RouteError> {
        let segments = pattern::parse(pattern).map_err(|source| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let index = self.routes.len();
        let route = Route {
            method: method.to_uppercase(),
            pattern: pattern.to_string(),
            destination,
            segments,
            index,
        };

        tracing::debug!(
            method = %route.method,
            pattern = %route.pattern,
            index,
            "Route registered"
        );

        self.routes.push(route);
        Ok(&self.routes[index])
    }

    /// Read-only view of the routes in registration order.
    pub fn all(&self) -> &[Route<D>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub(crate) fn into_routes(self) -> Vec<Route<D>> {
        self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::error::PatternError;

    #[test]
    fn assigns_monotonic_indices() {
        let mut registry = RouteRegistry::new();
        registry.register("get", "/a", 1).unwrap();
        registry.register("POST", "/b", 2).unwrap();

        let indices: Vec<_> = registry.all().iter().map(Route::index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn normalizes_method_case() {
        let mut registry = RouteRegistry::new();
        let route = registry.register("delete", "/a", ()).unwrap();
        assert_eq!(route.method(), "DELETE");
    }

    #[test]
    fn keeps_pattern_verbatim() {
        let mut registry = RouteRegistry::new();
        let route = registry.register("GET", "/users/:id", ()).unwrap();
        assert_eq!(route.pattern(), "/users/:id");
    }

    #[test]
    fn invalid_pattern_is_rejected_and_nothing_is_appended() {
        let mut registry = RouteRegistry::new();
        let err = registry.register("GET", "no-slash", ()).unwrap_err();
        match err {
            RouteError::InvalidPattern { pattern, source } => {
                assert_eq!(pattern, "no-slash");
                assert_eq!(source, PatternError::MissingLeadingSlash);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(registry.is_empty());
    }
}
