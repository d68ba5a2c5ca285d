//! Demonstration REST server.
//!
//! Every request is dispatched through the routekit router: a `dishes`
//! resource is wired to an in-memory store, and the matched action plus
//! captured params decide what runs. The router only answers "which route,
//! with which parameters"; everything below is ordinary application code.
//!
//! Run with `cargo run --example rest_server`, then e.g.
//! `curl http://localhost:3000/dishes/1`.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::any;
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use routekit::{ResourceAction, ResourceRoutes, RouterBuilder};

#[derive(Debug, Clone, Serialize)]
struct Dish {
    id: u64,
    name: String,
    origin: String,
}

#[derive(Debug, Deserialize)]
struct DishInput {
    name: String,
    origin: String,
}

struct AppState {
    router: routekit::Router<ResourceAction>,
    dishes: RwLock<HashMap<u64, Dish>>,
    next_id: AtomicU64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rest_server=debug,routekit=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let router = RouterBuilder::new()
        .resource("dishes", |action| action)?
        .build()?;

    let mut dishes = HashMap::new();
    dishes.insert(
        1,
        Dish {
            id: 1,
            name: "Pho".to_string(),
            origin: "Vietnam".to_string(),
        },
    );
    dishes.insert(
        2,
        Dish {
            id: 2,
            name: "Jollof rice".to_string(),
            origin: "West Africa".to_string(),
        },
    );

    let state = Arc::new(AppState {
        router,
        dishes: RwLock::new(dishes),
        next_id: AtomicU64::new(3),
    });

    let app = Router::new()
        .route("/{*path}", any(dispatch))
        .route("/", any(dispatch))
        .with_state(state);

    let addr: SocketAddr = "127.0.0.1:3000".parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "Demo server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn dispatch(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    body: String,
) -> Response {
    let Some(matched) = state.router.find(method.as_str(), uri.path()) else {
        tracing::debug!(method = %method, path = uri.path(), "No route matched");
        return error(StatusCode::NOT_FOUND, "no route matched");
    };

    let action = *matched.route.destination();
    tracing::debug!(
        method = %method,
        path = uri.path(),
        action = %action,
        "Dispatching"
    );

    match action {
        ResourceAction::Index => {
            let dishes = lock_read(&state);
            let mut all: Vec<_> = dishes.values().cloned().collect();
            all.sort_by_key(|dish| dish.id);
            Json(all).into_response()
        }
        ResourceAction::Show => {
            let Some(id) = dish_id(&matched.params) else {
                return error(StatusCode::BAD_REQUEST, "id must be an integer");
            };
            match lock_read(&state).get(&id) {
                Some(dish) => Json(dish.clone()).into_response(),
                None => error(StatusCode::NOT_FOUND, "no such dish"),
            }
        }
        ResourceAction::Create => {
            let Ok(input) = serde_json::from_str::<DishInput>(&body) else {
                return error(StatusCode::BAD_REQUEST, "expected {name, origin}");
            };
            let id = state.next_id.fetch_add(1, Ordering::Relaxed);
            let dish = Dish {
                id,
                name: input.name,
                origin: input.origin,
            };
            lock_write(&state).insert(id, dish.clone());
            (StatusCode::CREATED, Json(dish)).into_response()
        }
        ResourceAction::Update => {
            let Some(id) = dish_id(&matched.params) else {
                return error(StatusCode::BAD_REQUEST, "id must be an integer");
            };
            let Ok(input) = serde_json::from_str::<DishInput>(&body) else {
                return error(StatusCode::BAD_REQUEST, "expected {name, origin}");
            };
            let mut dishes = lock_write(&state);
            match dishes.get_mut(&id) {
                Some(dish) => {
                    dish.name = input.name;
                    dish.origin = input.origin;
                    Json(dish.clone()).into_response()
                }
                None => error(StatusCode::NOT_FOUND, "no such dish"),
            }
        }
        ResourceAction::Delete => {
            let Some(id) = dish_id(&matched.params) else {
                return error(StatusCode::BAD_REQUEST, "id must be an integer");
            };
            match lock_write(&state).remove(&id) {
                Some(_) => StatusCode::NO_CONTENT.into_response(),
                None => error(StatusCode::NOT_FOUND, "no such dish"),
            }
        }
    }
}

fn dish_id(params: &routekit::Params) -> Option<u64> {
    params.get("id")?.parse().ok()
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn lock_read(state: &AppState) -> std::sync::RwLockReadGuard<'_, HashMap<u64, Dish>> {
    state.dishes.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn lock_write(state: &AppState) -> std::sync::RwLockWriteGuard<'_, HashMap<u64, Dish>> {
    state.dishes.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
