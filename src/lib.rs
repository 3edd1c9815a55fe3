//! Recipe Catalog
//!
//! A REST backend for a personal recipe collection with SQLite or Postgres
//! persistence, plus a client library that front ends build on.

pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod import;
pub mod models;
pub mod service;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use import::Importer;
use service::RecipeService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<RecipeService>,
    pub importer: Arc<Importer>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // The browser front end is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/recipes",
            get(api::list_recipes).post(api::create_recipe),
        )
        .route(
            "/recipes/{id}",
            get(api::get_recipe)
                .put(api::update_recipe)
                .delete(api::delete_recipe),
        )
        .route("/import-recipe", post(api::import_recipe));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
