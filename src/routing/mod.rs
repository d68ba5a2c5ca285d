//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (build phase, single-threaded):
//!     (method, pattern, destination)
//!     → pattern.rs (parse into typed segments)
//!     → registry.rs (validate, assign registration index)
//!     → trie.rs (merge shared prefixes, attach method → route terminals)
//!     → Frozen as immutable Router
//!
//! Lookup (serve phase, concurrent):
//!     Incoming (method, path)
//!     → matcher.rs (exhaustive trie walk, collect candidates)
//!     → router.rs (lowest registration index wins, bind params)
//!     → Return: Match or None
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex anywhere (trie walk bounded by path depth)
//! - Deterministic: ambiguous matches resolve by registration order,
//!   independent of trie structure

pub mod error;
mod matcher;
pub mod params;
pub mod pattern;
pub mod registry;
pub mod router;
mod trie;

pub use error::{PatternError, RouteError};
pub use params::Params;
pub use pattern::Segment;
pub use registry::{Route, RouteRegistry};
pub use router::{Match, Router, RouterBuilder};
