//! Routing error definitions.
//!
//! # Design Decisions
//! - "No route matched" is not an error; lookups return `Option` instead
//! - All failures are deterministic functions of input, surfaced to the
//!   caller synchronously

use thiserror::Error;

/// Ways a route pattern can be malformed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern string was empty.
    #[error("pattern is empty")]
    Empty,

    /// Patterns must start at the path root.
    #[error("pattern must begin with '/'")]
    MissingLeadingSlash,

    /// A `:` segment had no name.
    #[error("parameter segments must be named")]
    UnnamedParam,

    /// A `*` segment had no name.
    #[error("wildcard segments must be named")]
    UnnamedWildcard,

    /// A segment followed a catch-all.
    #[error("wildcard segments are only allowed at the end of a pattern")]
    WildcardNotLast,
}

/// Errors surfaced while registering routes or resolving URLs.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The pattern failed validation at registration time.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern as passed by the caller.
        pattern: String,
        #[source]
        source: PatternError,
    },

    /// Two routes share an identical method and pattern. The build fails
    /// entirely rather than silently keeping one of the two.
    #[error("duplicate route: {method} {pattern}")]
    DuplicateRoute { method: String, pattern: String },

    /// A malformed URL string was passed to a URL lookup. Local to that
    /// call; router state is unaffected.
    #[error("invalid url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Resource names become literal path segments and may not be empty or
    /// contain `/`, `:` or `*`.
    #[error("invalid resource name `{name}`")]
    InvalidResourceName { name: String },
}
