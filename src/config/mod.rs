//! Route-table configuration subsystem.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → schema.rs (RouteTableConfig → RouterBuilder)
//!     → routing build (semantic checks: patterns, duplicates)
//!     → immutable Router<String>
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - No separate semantic validation pass: compiling the table into a
//!   router is the validation

pub mod loader;
pub mod schema;

pub use loader::{load_route_table, ConfigError};
pub use schema::{ResourceSpec, RouteSpec, RouteTableConfig};
