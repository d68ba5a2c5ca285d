//! Route pattern parsing.
//!
//! # Responsibilities
//! - Split a pattern string into typed segments
//! - Reject malformed patterns at registration time
//!
//! # Design Decisions
//! - `:name` matches exactly one `/`-delimited segment (no `.` splitting)
//! - `*name` matches everything to the end of the path and must be final
//! - Empty pieces are discarded, so `//users` and `/users/` parse like `/users`

use crate::routing::error::PatternError;

/// One `/`-delimited unit of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches only an identical path segment.
    Literal(String),
    /// Matches any single path segment, capturing it under the name.
    Param(String),
    /// Matches all remaining path content, capturing it under the name.
    Wildcard(String),
}

impl Segment {
    /// Name of the capture this segment produces, if any.
    pub fn capture_name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Param(name) | Segment::Wildcard(name) => Some(name),
        }
    }
}

/// Parse a route pattern into its segment sequence.
///
/// Patterns must be non-empty and begin with `/`. Each non-empty piece
/// between slashes becomes one segment: a `:` prefix marks a named
/// parameter, a `*` prefix marks a terminal catch-all, anything else is a
/// literal matched by exact string equality.
pub fn parse(pattern: &str) -> Result<Vec<Segment>, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    if !pattern.starts_with('/') {
        return Err(PatternError::MissingLeadingSlash);
    }

    let mut segments = Vec::new();
    for piece in pattern.split('/').filter(|piece| !piece.is_empty()) {
        if segments.last().is_some_and(is_wildcard) {
            return Err(PatternError::WildcardNotLast);
        }

        let segment = if let Some(name) = piece.strip_prefix(':') {
            if name.is_empty() {
                return Err(PatternError::UnnamedParam);
            }
            Segment::Param(name.to_string())
        } else if let Some(name) = piece.strip_prefix('*') {
            if name.is_empty() {
                return Err(PatternError::UnnamedWildcard);
            }
            Segment::Wildcard(name.to_string())
        } else {
            Segment::Literal(piece.to_string())
        };

        segments.push(segment);
    }

    Ok(segments)
}

fn is_wildcard(segment: &Segment) -> bool {
    matches!(segment, Segment::Wildcard(_))
}
