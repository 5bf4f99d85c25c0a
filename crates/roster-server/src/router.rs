use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use roster_store::UserStore;

use crate::handler;

/// HTTP endpoint paths.
pub mod paths {
    pub const HEALTH: &str = "/health";
    pub const INFO: &str = "/info";
    pub const USERS: &str = "/users";
    pub const USER: &str = "/users/:id";
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

/// Build the axum router with all Roster endpoints.
pub fn build_router(store: Arc<dyn UserStore>) -> Router {
    Router::new()
        .route(paths::HEALTH, get(handler::health_handler))
        .route(paths::INFO, get(handler::info_handler))
        .route(
            paths::USERS,
            get(handler::list_users).post(handler::create_user),
        )
        .route(
            paths::USER,
            put(handler::update_user).delete(handler::delete_user),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store))
}
