//! Resource-controller route wiring.
//!
//! # Responsibilities
//! - Wire the five conventional CRUD routes for a named resource
//! - Map each route to a caller-supplied destination handle
//!
//! # Design Decisions
//! - The adapter only produces (method, pattern, destination) triples; what
//!   a destination means and how it is invoked stays with the caller
//! - Routes are registered in a fixed order (index, show, create, update,
//!   delete), so resources registered earlier shadow later ones like any
//!   other route

use std::fmt;

use crate::routing::{RouteError, RouterBuilder};

/// The five conventional operations on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceAction {
    /// `GET /name` lists the collection.
    Index,
    /// `GET /name/:id` fetches one member.
    Show,
    /// `POST /name` creates a member.
    Create,
    /// `PUT /name/:id` updates a member.
    Update,
    /// `DELETE /name/:id` deletes a member.
    Delete,
}

impl ResourceAction {
    /// All actions, in the order their routes are registered.
    pub const ALL: [ResourceAction; 5] = [
        ResourceAction::Index,
        ResourceAction::Show,
        ResourceAction::Create,
        ResourceAction::Update,
        ResourceAction::Delete,
    ];

    /// The HTTP method for this action.
    pub fn method(self) -> &'static str {
        match self {
            ResourceAction::Index | ResourceAction::Show => "GET",
            ResourceAction::Create => "POST",
            ResourceAction::Update => "PUT",
            ResourceAction::Delete => "DELETE",
        }
    }

    /// The route pattern for this action on the given resource.
    pub fn pattern(self, resource: &str) -> String {
        match self {
            ResourceAction::Index | ResourceAction::Create => format!("/{resource}"),
            ResourceAction::Show | ResourceAction::Update | ResourceAction::Delete => {
                format!("/{resource}/:id")
            }
        }
    }
}

impl fmt::Display for ResourceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceAction::Index => "index",
            ResourceAction::Show => "show",
            ResourceAction::Create => "create",
            ResourceAction::Update => "update",
            ResourceAction::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Builder extension that registers a full resource in one call.
pub trait ResourceRoutes<D>: Sized {
    /// Wire the five conventional routes for `name`, asking `destination`
    /// for the handle bound to each action.
    fn resource<F>(self, name: &str, destination: F) -> Result<Self, RouteError>
    where
        F: FnMut(ResourceAction) -> D;
}

impl<D> ResourceRoutes<D> for RouterBuilder<D> {
    fn resource<F>(mut self, name: &str, mut destination: F) -> Result<Self, RouteError>
    where
        F: FnMut(ResourceAction) -> D,
    {
        if name.is_empty() || name.contains(['/', ':', '*']) {
            return Err(RouteError::InvalidResourceName {
                name: name.to_string(),
            });
        }

        for action in ResourceAction::ALL {
            self = self.route(action.method(), &action.pattern(name), destination(action))?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wires_the_five_conventional_routes() {
        let builder = RouterBuilder::new().resource("dishes", |action| action).unwrap();

        let wired: Vec<_> = builder
            .routes()
            .iter()
            .map(|route| (route.method(), route.pattern()))
            .collect();
        assert_eq!(
            wired,
            vec![
                ("GET", "/dishes"),
                ("GET", "/dishes/:id"),
                ("POST", "/dishes"),
                ("PUT", "/dishes/:id"),
                ("DELETE", "/dishes/:id"),
            ]
        );
    }

    #[test]
    fn destinations_come_from_the_caller() {
        let router = RouterBuilder::new()
            .resource("dishes", |action| format!("dishes#{action}"))
            .unwrap()
            .build()
            .unwrap();

        let matched = router.find("PUT", "/dishes/7").unwrap();
        assert_eq!(matched.route.destination(), "dishes#update");
        assert_eq!(matched.params.get("id"), Some("7"));
    }

    #[test]
    fn rejects_names_that_break_the_patterns() {
        for name in ["", "a/b", "a:b", "a*b"] {
            let err = RouterBuilder::new()
                .resource(name, |action| action)
                .unwrap_err();
            assert!(matches!(err, RouteError::InvalidResourceName { .. }), "{name:?}");
        }
    }
}
