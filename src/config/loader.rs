//! Route-table loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RouteTableConfig;

/// Error type for route-table loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load a route table from a TOML file.
///
/// Only syntax is checked here; semantic validation happens when the table
/// is compiled into a router.
pub fn load_route_table(path: &Path) -> Result<RouteTableConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let table: RouteTableConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    tracing::debug!(
        path = %path.display(),
        routes = table.routes.len(),
        resources = table.resources.len(),
        "Route table loaded"
    );

    Ok(table)
}
