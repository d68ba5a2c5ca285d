//! Trie-based URL routing library.
//!
//! Routes are registered as `(method, pattern, destination)` triples during
//! a single-threaded build phase, compiled into a shared prefix tree, and
//! matched concurrently without synchronization afterwards. Patterns support
//! `:param` placeholders (one `/`-delimited segment) and a terminal `*splat`
//! catch-all. When several routes match a path, the one registered first
//! wins.
//!
//! ```
//! use routekit::RouterBuilder;
//!
//! # fn main() -> Result<(), routekit::RouteError> {
//! let router = RouterBuilder::new()
//!     .route("GET", "/resources/:id", "one_resource")?
//!     .route("GET", "/resources", "all_resources")?
//!     .build()?;
//!
//! let matched = router
//!     .find_url("GET", "http://example.org/resources/123")?
//!     .unwrap();
//! assert_eq!(*matched.route.destination(), "one_resource");
//! assert_eq!(matched.params.get("id"), Some("123"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod resource;
pub mod routing;

pub use resource::{ResourceAction, ResourceRoutes};
pub use routing::{Match, Params, PatternError, Route, RouteError, Router, RouterBuilder, Segment};
