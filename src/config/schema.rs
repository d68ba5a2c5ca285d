//! Route-table schema definitions.
//!
//! This module defines the declarative route-table structure. All types
//! derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceRoutes;
use crate::routing::{RouteError, Router, RouterBuilder};

/// A declarative route table.
///
/// Destinations are plain string labels; what they refer to is up to the
/// application that loads the table. Resources expand into the five
/// conventional CRUD routes with `name#action` labels.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteTableConfig {
    /// Explicit route definitions, in the order they should win ties.
    pub routes: Vec<RouteSpec>,

    /// Resources expanded after the explicit routes.
    pub resources: Vec<ResourceSpec>,
}

/// One explicit route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteSpec {
    /// HTTP method (any case).
    pub method: String,

    /// Route pattern, e.g. `/users/:id` or `/files/*path`.
    pub pattern: String,

    /// Destination label handed back on a match.
    pub destination: String,
}

/// A named REST resource.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceSpec {
    /// Resource name; becomes the leading path segment.
    pub name: String,
}

impl RouteTableConfig {
    /// Compile the table into a router with string destination labels.
    ///
    /// Semantic validation is the router build itself: bad patterns and
    /// duplicate routes surface here as [`RouteError`].
    pub fn build_router(&self) -> Result<Router<String>, RouteError> {
        let mut builder = RouterBuilder::new();

        for route in &self.routes {
            builder = builder.route(&route.method, &route.pattern, route.destination.clone())?;
        }
        for resource in &self.resources {
            builder = builder.resource(&resource.name, |action| {
                format!("{}#{action}", resource.name)
            })?;
        }

        builder.build()
    }
}
