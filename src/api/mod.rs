pub mod health;
pub mod lines;
pub mod schedules;
pub mod stops;

use crate::db::Repository;
use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }
}

pub fn create_router(state: AppState) -> Router {
    build_router(state, None)
}

/// Like [`create_router`], also serving the frontend's files under `/static`.
/// `/` stays the JSON health check.
pub fn create_router_with_static_assets(state: AppState, dir: impl AsRef<Path>) -> Router {
    build_router(state, Some(dir.as_ref()))
}

fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(health::health))
        .route("/linhas", get(lines::list_lines))
        .route("/paradas", get(stops::list_stops))
        .route("/paradas/mapa", get(stops::list_stops_for_map))
        .route("/horarios", get(schedules::list_schedules));

    // Nested before the layers so static responses get CORS headers and request spans too.
    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
